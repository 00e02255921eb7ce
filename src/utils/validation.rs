use crate::utils::error::{FormError, Result};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

/// Longest address the syntactic check will consider.
pub const MAX_EMAIL_LENGTH: usize = 254;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Syntactic email sanity check: something, an `@`, something, a dot,
/// something, with no whitespace or second `@` anywhere. Deliberately
/// permissive; this is not RFC 5322 validation.
pub fn is_email(email: &str) -> bool {
    if email.len() > MAX_EMAIL_LENGTH {
        return false;
    }
    let pattern = EMAIL_PATTERN
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
    pattern.is_match(email)
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(FormError::InvalidValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(FormError::InvalidValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(FormError::InvalidValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FormError::MissingField {
            field: field_name.to_string(),
        });
    }
    Ok(())
}
