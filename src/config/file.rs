use crate::config::{FormConfig, MessageOverrides, SelectorOverrides};
use crate::utils::error::Result;
use crate::utils::validation::validate_url;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML-backed configuration source for the CLI front-end:
///
/// ```toml
/// endpoint = "https://example.com/contact.php"
/// token_input_name = "csrf-token"
///
/// [messages]
/// server_error = "The backend is unavailable."
///
/// [selectors]
/// email_input = "#contact-email"
/// ```
///
/// Only `endpoint` is required; the override tables may set any subset of
/// keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub endpoint: String,
    pub token_input_name: Option<String>,
    #[serde(default)]
    pub messages: MessageOverrides,
    #[serde(default)]
    pub selectors: SelectorOverrides,
}

impl FileConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Merge into a full `FormConfig`. The endpoint must be an absolute
    /// http(s) URL here: a file-sourced configuration drives a standalone
    /// client with no page origin to resolve relative paths against.
    pub fn into_form_config(self) -> Result<FormConfig> {
        validate_url("endpoint", &self.endpoint)?;
        FormConfig::with_overrides(self.endpoint, self.messages, self.selectors)
    }
}
