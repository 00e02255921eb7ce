pub mod file;

use crate::utils::error::Result;
use crate::utils::validation::validate_non_empty_string;
use serde::{Deserialize, Serialize};

/// User-facing message strings, one per condition the controller can report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Messages {
    pub invalid_email: String,
    pub empty_message: String,
    pub server_error: String,
    pub unexpected_error: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            invalid_email: "Please enter a valid email address".to_string(),
            empty_message: "Please enter a message".to_string(),
            server_error: "An error occurred. Please try again later.".to_string(),
            unexpected_error: "An unexpected error occurred. Please try again later.".to_string(),
        }
    }
}

impl Messages {
    /// Defaults with any overridden keys replaced. The merge is per key:
    /// an override only touches the keys it sets.
    pub fn merged(overrides: MessageOverrides) -> Self {
        let defaults = Self::default();
        Self {
            invalid_email: overrides.invalid_email.unwrap_or(defaults.invalid_email),
            empty_message: overrides.empty_message.unwrap_or(defaults.empty_message),
            server_error: overrides.server_error.unwrap_or(defaults.server_error),
            unexpected_error: overrides
                .unexpected_error
                .unwrap_or(defaults.unexpected_error),
        }
    }
}

/// Partial `Messages`: unset keys fall back to the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageOverrides {
    pub invalid_email: Option<String>,
    pub empty_message: Option<String>,
    pub server_error: Option<String>,
    pub unexpected_error: Option<String>,
}

/// Query strings for the page elements the controller touches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selectors {
    pub success_modal: String,
    pub message_alert: String,
    pub send_button: String,
    pub loading_element: String,
    pub name_input: String,
    pub email_input: String,
    pub message_input: String,
    pub cancel_button: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            success_modal: "#success".to_string(),
            message_alert: "#message-alert".to_string(),
            send_button: "#sendmessage".to_string(),
            loading_element: "#loading".to_string(),
            name_input: "#name".to_string(),
            email_input: "#email".to_string(),
            message_input: "#message".to_string(),
            cancel_button: "#contactCancel".to_string(),
        }
    }
}

impl Selectors {
    pub fn merged(overrides: SelectorOverrides) -> Self {
        let defaults = Self::default();
        Self {
            success_modal: overrides.success_modal.unwrap_or(defaults.success_modal),
            message_alert: overrides.message_alert.unwrap_or(defaults.message_alert),
            send_button: overrides.send_button.unwrap_or(defaults.send_button),
            loading_element: overrides
                .loading_element
                .unwrap_or(defaults.loading_element),
            name_input: overrides.name_input.unwrap_or(defaults.name_input),
            email_input: overrides.email_input.unwrap_or(defaults.email_input),
            message_input: overrides.message_input.unwrap_or(defaults.message_input),
            cancel_button: overrides.cancel_button.unwrap_or(defaults.cancel_button),
        }
    }
}

/// Partial `Selectors`: unset keys fall back to the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectorOverrides {
    pub success_modal: Option<String>,
    pub message_alert: Option<String>,
    pub send_button: Option<String>,
    pub loading_element: Option<String>,
    pub name_input: Option<String>,
    pub email_input: Option<String>,
    pub message_input: Option<String>,
    pub cancel_button: Option<String>,
}

/// Controller configuration, fixed after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    pub endpoint: String,
    pub messages: Messages,
    pub selectors: Selectors,
}

impl FormConfig {
    /// Endpoint plus all-default messages and selectors. The endpoint is
    /// the one required setting; an empty or whitespace-only value is
    /// rejected.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        Self::with_overrides(
            endpoint,
            MessageOverrides::default(),
            SelectorOverrides::default(),
        )
    }

    pub fn with_overrides(
        endpoint: impl Into<String>,
        messages: MessageOverrides,
        selectors: SelectorOverrides,
    ) -> Result<Self> {
        let endpoint = endpoint.into();
        validate_non_empty_string("endpoint", &endpoint)?;
        Ok(Self {
            endpoint,
            messages: Messages::merged(messages),
            selectors: Selectors::merged(selectors),
        })
    }
}
