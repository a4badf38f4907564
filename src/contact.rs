//! Contact form intake module
//!
//! Decodes the form-encoded body, applies the documented defaults, and
//! validates that a message is actually present before anything is logged.

use std::collections::HashMap;
use std::fmt;

/// Name used when the sender leaves the name field empty
const DEFAULT_NAME: &str = "Anonymous";

/// Email placeholder when the sender leaves the email field empty
const DEFAULT_EMAIL: &str = "None";

/// A validated contact form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Validation failure for a submitted form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactFormError {
    /// The message field is absent or blank
    MissingMessage,
}

impl fmt::Display for ContactFormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingMessage => write!(f, "message is required"),
        }
    }
}

impl std::error::Error for ContactFormError {}

/// Decode a form-encoded request body into its fields
pub fn parse_form(body: &[u8]) -> HashMap<String, String> {
    url::form_urlencoded::parse(body).into_owned().collect()
}

/// Validate the decoded fields into a submission.
///
/// Name and email fall back to their placeholders; the message has no
/// default and its absence is an error.
pub fn validate(fields: &HashMap<String, String>) -> Result<ContactSubmission, ContactFormError> {
    let message = fields
        .get("message")
        .map(String::as_str)
        .unwrap_or_default();
    if message.trim().is_empty() {
        return Err(ContactFormError::MissingMessage);
    }

    Ok(ContactSubmission {
        name: non_empty_or(fields.get("name"), DEFAULT_NAME),
        email: non_empty_or(fields.get("email"), DEFAULT_EMAIL),
        message: message.to_string(),
    })
}

fn non_empty_or(value: Option<&String>, fallback: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.clone(),
        _ => fallback.to_string(),
    }
}

/// The canonical submission log line
pub fn format_log_line(submission: &ContactSubmission) -> String {
    format!(
        "{} - {} said: \n{}",
        submission.name, submission.email, submission.message
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_full_submission_log_line() {
        let sub = validate(&fields(&[
            ("name", "Alice"),
            ("email", "a@x.com"),
            ("message", "Hi"),
        ]))
        .unwrap();
        assert_eq!(format_log_line(&sub), "Alice - a@x.com said: \nHi");
    }

    #[test]
    fn test_defaults_applied_when_fields_absent() {
        let sub = validate(&fields(&[("message", "Hi")])).unwrap();
        assert_eq!(format_log_line(&sub), "Anonymous - None said: \nHi");
    }

    #[test]
    fn test_blank_fields_get_defaults() {
        let sub = validate(&fields(&[
            ("name", "  "),
            ("email", ""),
            ("message", "Hi"),
        ]))
        .unwrap();
        assert_eq!(sub.name, "Anonymous");
        assert_eq!(sub.email, "None");
    }

    #[test]
    fn test_missing_message_is_an_error() {
        assert_eq!(
            validate(&fields(&[("name", "Alice")])),
            Err(ContactFormError::MissingMessage)
        );
        assert_eq!(
            validate(&fields(&[("message", "   ")])),
            Err(ContactFormError::MissingMessage)
        );
    }

    #[test]
    fn test_parse_form_decodes_urlencoding() {
        let fields = parse_form(b"name=Alice+B&message=Hi%20there%21");
        assert_eq!(fields["name"], "Alice B");
        assert_eq!(fields["message"], "Hi there!");
    }
}
