use serde::{Deserialize, Serialize};

/// One submission attempt's field values, read from the live page state.
/// Built fresh per attempt and discarded afterwards.
#[derive(Debug, Clone)]
pub struct SubmissionPayload {
    pub name: String,
    pub email: String,
    pub message: String,
    pub turnstile_token: String,
    pub token_input_token: String,
}

/// Decoded JSON body of the server reply. `status` defaults to an empty
/// string when the key is absent, so such replies take the rejection path
/// rather than failing to decode. Unknown keys are kept and handed to the
/// success callback untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ResponseEnvelope {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Transport-level reply: whether the HTTP status was 2xx, plus the decoded
/// body. A reply that cannot be decoded never becomes a `ServerReply`.
#[derive(Debug, Clone)]
pub struct ServerReply {
    pub http_ok: bool,
    pub envelope: ResponseEnvelope,
}

/// What a submission attempt did. User-facing effects flow through the page
/// surface; this is for callers that need a programmatic result, such as
/// the CLI's exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Server accepted the submission.
    Sent,
    /// Server replied, but with a non-2xx status or a non-success body.
    Rejected,
    /// The request or response decoding failed.
    TransportFailed,
    /// Client-side validation stopped the attempt.
    InvalidInput,
    /// Required input elements were absent from the page.
    MissingMarkup,
    /// Another submission was already in flight; this one was dropped.
    AlreadyPending,
}
