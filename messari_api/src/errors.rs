//! Error types for the API client and the service's error-code table.

/// Errors that can occur when making API requests.
///
/// These are faults of the transport itself. A well-formed envelope carrying an
/// `error_code` is not an `Error`; it decodes to [`crate::types::QueryResult::Failure`].
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status and a body that is not an envelope.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The body was not a valid response envelope.
    #[error("Failed to decode response: {0}")]
    Decode(String),
    /// The base URL and endpoint did not form a valid URL.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

/// Message used for any `error_code` missing from the table.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Resolves a service `error_code` into its human-readable message.
pub fn error_message_for(code: i64) -> &'static str {
    match code {
        400 => "Bad request",
        401 => "Unauthorized (authentication)",
        403 => "Forbidden (authorization)",
        404 => "Asset not found",
        429 => "Too many requests (rate limit)",
        500 => "An Internal server error occurred",
        _ => UNKNOWN_ERROR,
    }
}
