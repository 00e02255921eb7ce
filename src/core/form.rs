use crate::config::FormConfig;
use crate::core::{ElementLocator, ModalWidget, ResponseEnvelope, SubmissionPayload, SubmitOutcome, Transport};
use crate::utils::validation::is_email;
use std::sync::atomic::{AtomicBool, Ordering};

/// Fixed `name` attribute of the challenge widget's hidden response field.
pub const TURNSTILE_FIELD_NAME: &str = "cf-turnstile-response";

/// Contact-form controller: reads field values through an [`ElementLocator`],
/// validates them, and submits them through a [`Transport`], reflecting the
/// outcome back into the page.
///
/// The alert region, send button, and loading indicator are resolved once at
/// construction; when any of them is absent the corresponding behavior is a
/// no-op. The email and message inputs are re-resolved on every submit.
///
/// At most one submission is in flight per controller. A `handle_submit`
/// while one is pending is dropped, not queued.
pub struct ContactForm<L: ElementLocator, T: Transport> {
    config: FormConfig,
    locator: L,
    transport: T,
    token_input_name: Option<String>,
    modal: Option<Box<dyn ModalWidget>>,
    on_success: Option<Box<dyn Fn(&ResponseEnvelope) + Send + Sync>>,
    alert: Option<L::Handle>,
    send_button: Option<L::Handle>,
    loading: Option<L::Handle>,
    busy: AtomicBool,
}

impl<L: ElementLocator, T: Transport> ContactForm<L, T> {
    pub fn new(config: FormConfig, locator: L, transport: T) -> Self {
        let alert = locator.by_selector(&config.selectors.message_alert);
        let send_button = locator.by_selector(&config.selectors.send_button);
        let loading = locator.by_selector(&config.selectors.loading_element);

        Self {
            config,
            locator,
            transport,
            token_input_name: None,
            modal: None,
            on_success: None,
            alert,
            send_button,
            loading,
            busy: AtomicBool::new(false),
        }
    }

    /// `name` attribute of a second anti-abuse token field to read at
    /// submit time. Without this the field is sent empty.
    pub fn with_token_input_name(mut self, name: impl Into<String>) -> Self {
        self.token_input_name = Some(name.into());
        self
    }

    /// Attach the success presentation widget. `build` runs only when the
    /// success-modal selector resolves, and receives the resolved handle;
    /// with no matching element no widget is constructed.
    pub fn with_modal<F>(mut self, build: F) -> Self
    where
        F: FnOnce(&L::Handle) -> Box<dyn ModalWidget>,
    {
        if let Some(handle) = self.locator.by_selector(&self.config.selectors.success_modal) {
            self.modal = Some(build(&handle));
        }
        self
    }

    /// Callback invoked with the decoded reply after a successful
    /// submission.
    pub fn with_on_success<F>(mut self, on_success: F) -> Self
    where
        F: Fn(&ResponseEnvelope) + Send + Sync + 'static,
    {
        self.on_success = Some(Box::new(on_success));
        self
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Entry point for the submit trigger. Re-resolves the required inputs,
    /// validates, gathers the optional context fields, and submits.
    pub async fn handle_submit(&self) -> SubmitOutcome {
        let email_element = self.locator.by_selector(&self.config.selectors.email_input);
        let message_element = self.locator.by_selector(&self.config.selectors.message_input);

        let (Some(email_element), Some(message_element)) = (email_element, message_element) else {
            // Broken markup or selector configuration, not a user mistake.
            tracing::error!("Email or message element not found");
            return SubmitOutcome::MissingMarkup;
        };

        let email = self.locator.value(&email_element);
        let message = self.locator.value(&message_element);

        if email.is_empty() || !is_email(&email) {
            self.display_alert(&self.config.messages.invalid_email);
            return SubmitOutcome::InvalidInput;
        }

        if message.is_empty() {
            self.display_alert(&self.config.messages.empty_message);
            return SubmitOutcome::InvalidInput;
        }

        let name = self.value_by_selector(&self.config.selectors.name_input);
        let turnstile_token = self.value_by_name(TURNSTILE_FIELD_NAME);
        let token_input_token = self
            .token_input_name
            .as_deref()
            .map(|name| self.value_by_name(name))
            .unwrap_or_default();

        let payload = SubmissionPayload {
            name,
            email,
            message,
            turnstile_token,
            token_input_token,
        };

        self.submit(payload).await
    }

    /// Guarded network call. A duplicate invocation while one is pending
    /// returns immediately with no side effects; otherwise the busy state
    /// brackets the whole round trip and is restored on every path.
    pub async fn submit(&self, payload: SubmissionPayload) -> SubmitOutcome {
        if self.busy.swap(true, Ordering::SeqCst) {
            tracing::debug!("Submission already in flight, dropping duplicate");
            return SubmitOutcome::AlreadyPending;
        }

        self.set_busy_indicator(true);
        let outcome = self.send_message(&payload).await;
        self.set_busy_indicator(false);
        self.busy.store(false, Ordering::SeqCst);

        outcome
    }

    /// Write `message` into the alert region and reveal it.
    pub fn display_alert(&self, message: &str) {
        match &self.alert {
            Some(handle) => {
                self.locator.set_content(handle, message);
                self.locator.set_visible(handle, true);
            }
            None => tracing::error!("Message alert element not found"),
        }
    }

    async fn send_message(&self, payload: &SubmissionPayload) -> SubmitOutcome {
        match self.transport.post_form(&self.config.endpoint, payload).await {
            Ok(reply) => {
                if !reply.http_ok || !reply.envelope.is_success() {
                    let message = reply
                        .envelope
                        .message
                        .clone()
                        .unwrap_or_else(|| self.config.messages.server_error.clone());
                    self.display_alert(&message);
                    return SubmitOutcome::Rejected;
                }
                self.finish_success(&reply.envelope);
                SubmitOutcome::Sent
            }
            Err(e) => {
                // Operator-facing detail; the user only sees the generic text.
                tracing::error!("Error sending message: {}", e);
                self.display_alert(&self.config.messages.unexpected_error);
                SubmitOutcome::TransportFailed
            }
        }
    }

    fn finish_success(&self, envelope: &ResponseEnvelope) {
        for selector in [
            &self.config.selectors.name_input,
            &self.config.selectors.email_input,
            &self.config.selectors.message_input,
        ] {
            if let Some(handle) = self.locator.by_selector(selector) {
                self.locator.set_value(&handle, "");
            }
        }

        // Conventional modal-dismiss trigger for the form dialog.
        if let Some(handle) = self.locator.by_selector(&self.config.selectors.cancel_button) {
            self.locator.activate(&handle);
        }

        if let Some(modal) = &self.modal {
            modal.show();
        }

        if let Some(on_success) = &self.on_success {
            on_success(envelope);
        }
    }

    fn set_busy_indicator(&self, busy: bool) {
        if let Some(handle) = &self.send_button {
            self.locator.set_visible(handle, !busy);
        }
        if let Some(handle) = &self.loading {
            self.locator.set_visible(handle, busy);
        }
    }

    fn value_by_selector(&self, selector: &str) -> String {
        self.locator
            .by_selector(selector)
            .map(|handle| self.locator.value(&handle))
            .unwrap_or_default()
    }

    fn value_by_name(&self, name: &str) -> String {
        self.locator
            .by_name(name)
            .map(|handle| self.locator.value(&handle))
            .unwrap_or_default()
    }
}
