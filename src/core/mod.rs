pub mod form;

pub use crate::domain::model::{ResponseEnvelope, ServerReply, SubmissionPayload, SubmitOutcome};
pub use crate::domain::ports::{ElementLocator, ModalWidget, Transport};
pub use crate::utils::error::Result;
