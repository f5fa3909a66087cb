//! The capability the facade depends on to reach the service.

use std::future::Future;

use serde::de::DeserializeOwned;

use crate::{types::QueryResult, Error};

/// Issues one GET for an endpoint and classifies the decoded envelope.
///
/// [`crate::HttpTransport`] is the network implementation. Tests substitute a
/// scripted implementation so the facade can be exercised without a server.
///
/// A service-reported error is an `Ok(QueryResult::Failure { .. })`. Only faults
/// of the transport itself (network, undecodable body) are `Err`.
pub trait Transport: Send + Sync {
    fn get<T>(&self, endpoint: &str) -> impl Future<Output = Result<QueryResult<T>, Error>> + Send
    where
        T: DeserializeOwned + Send;
}

