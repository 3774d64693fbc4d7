//! Google API error body parser
//!
//! Failed calls return `{"error": {"code", "message", "errors": [{"reason"}]}}`.
//! Only used to build readable messages; classification goes by status code.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    reason: Option<String>,
}

/// Describes a failed response body in one line
///
/// Yields `"<reason>: <message>"` for Google error envelopes and the
/// trimmed raw body otherwise.
pub fn describe_error_body(body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        let reason = envelope
            .error
            .errors
            .iter()
            .find_map(|detail| detail.reason.as_deref());
        match (reason, envelope.error.message.as_deref()) {
            (Some(reason), Some(message)) => return format!("{}: {}", reason, message),
            (Some(reason), None) => return reason.to_string(),
            (None, Some(message)) => return message.to_string(),
            (None, None) => {}
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        "no error details".to_string()
    } else {
        trimmed.to_string()
    }
}
