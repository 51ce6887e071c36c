//! Error type for calls against the publishing REST API.
//!
//! ERROR HANDLING
//! ==============
//! Every variant is caught at a page boundary and turned into an inline
//! message or a notice. Transient and permanent failures are not told apart
//! because nothing retries.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single REST call.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, aborted).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("server responded with status {status}")]
    Status {
        status: u16,
        /// `message` field of the JSON error body, when the server sent one.
        message: Option<String>,
    },

    /// The response body could not be decoded.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The call was attempted outside the browser (server render).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Message to show the user: the server's own message when present,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}
