//! Error types for the client layer.

use thiserror::Error;

/// Errors surfaced by [`crate::MessariClient`].
///
/// A failure the service reports in its envelope is not an `Error`; it is a
/// normal [`crate::QueryResult::Failure`].
#[derive(Error, Debug)]
pub enum Error {
    /// No API key, or an empty one, was supplied at construction.
    #[error("An API key must be provided and be non-empty")]
    MissingApiKey,
    /// The request could not be completed or its response could not be decoded.
    #[error("API error: {0}")]
    Api(#[from] messari_api::Error),
}
