pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::http::HttpTransport;
pub use adapters::page::MemoryPage;
pub use config::{file::FileConfig, FormConfig, MessageOverrides, Messages, SelectorOverrides, Selectors};
pub use crate::core::form::{ContactForm, TURNSTILE_FIELD_NAME};
pub use domain::model::{ResponseEnvelope, ServerReply, SubmissionPayload, SubmitOutcome};
pub use domain::ports::{ElementLocator, ModalWidget, Transport};
pub use utils::error::{FormError, Result};
