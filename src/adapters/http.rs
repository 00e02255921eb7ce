use crate::domain::model::{ResponseEnvelope, ServerReply, SubmissionPayload};
use crate::domain::ports::Transport;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::multipart::Form;
use reqwest::Client;

/// `reqwest`-backed transport. One multipart POST per submission; no retry,
/// no timeout beyond the client defaults.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_form(&self, endpoint: &str, payload: &SubmissionPayload) -> Result<ServerReply> {
        // All five fields are always present on the wire, even when empty.
        let form = Form::new()
            .text("name", payload.name.clone())
            .text("email", payload.email.clone())
            .text("message", payload.message.clone())
            .text("turnstileToken", payload.turnstile_token.clone())
            .text("tokenInputToken", payload.token_input_token.clone());

        tracing::debug!("Posting contact form to: {}", endpoint);
        let response = self.client.post(endpoint).multipart(form).send().await?;

        let http_ok = response.status().is_success();
        tracing::debug!("Server response status: {}", response.status());

        let body = response.bytes().await?;
        let envelope: ResponseEnvelope = serde_json::from_slice(&body)?;

        Ok(ServerReply { http_ok, envelope })
    }
}
