//! Typed client for the Messari market-data API.
//!
//! Wraps the `messari_api` wire layer with a facade that validates its
//! configuration once, exposes one method per remote operation, and returns
//! every service-reported failure as the same [`QueryResult::Failure`] shape.

pub mod client;
pub mod config;
pub mod error;

pub use messari_api;
pub use messari_api::types;
pub use messari_api::types::QueryResult;
pub use messari_api::{FieldSelection, HttpTransport, Metric, PaginationOptions, SortBy, Transport};

pub use client::MessariClient;
pub use config::{ClientConfig, API_KEY_ENV};
pub use error::Error;
