//! The response envelope every endpoint wraps its payload in, and the
//! [`QueryResult`] it is classified into.

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize, Serializer};

use crate::{error_message_for, Error};

/// Metadata the service attaches to every response.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Status {
    /// When the service generated the response.
    pub timestamp: DateTime<Utc>,
    /// Milliseconds the service took to generate the response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elapsed: Option<u64>,
}

/// The `status` object exactly as it arrives on the wire.
#[derive(Deserialize, Clone, Debug)]
pub struct WireStatus {
    pub timestamp: DateTime<Utc>,
    pub elapsed: Option<u64>,
    pub error_code: Option<i64>,
    pub error_message: Option<String>,
}

/// A decoded response body, before classification.
///
/// `data` stays untyped until the status is known to carry no `error_code`, so
/// an error envelope with a stray or partial `data` is still a failure.
#[derive(Deserialize, Debug)]
pub struct Envelope {
    pub status: WireStatus,
    pub data: Option<serde_json::Value>,
}

impl Envelope {
    /// Classifies the envelope. A numeric `error_code` marks a failure and its
    /// message is resolved through the error-code table; otherwise `data` must
    /// be present and decode as `T`.
    pub fn into_query_result<T: DeserializeOwned>(self) -> Result<QueryResult<T>, Error> {
        let WireStatus {
            timestamp,
            elapsed,
            error_code,
            error_message,
        } = self.status;
        let status = Status { timestamp, elapsed };
        match (error_code, self.data) {
            (Some(code), _) => {
                tracing::warn!(
                    "Service reported error {}: {}",
                    code,
                    error_message.as_deref().unwrap_or("<no message>")
                );
                Ok(QueryResult::Failure {
                    status,
                    error_code: code,
                    error_message: error_message_for(code).to_string(),
                })
            }
            (None, Some(data)) => {
                let data = serde_json::from_value::<T>(data).map_err(|e| {
                    tracing::error!("Failed to decode payload: {}", e);
                    Error::Decode(e.to_string())
                })?;
                Ok(QueryResult::Success { status, data })
            }
            (None, None) => Err(Error::Decode(
                "envelope carries neither data nor error_code".to_string(),
            )),
        }
    }
}

/// Outcome of a single request: the payload, or the error the service reported.
///
/// Exactly one of `data` and `error_code`/`error_message` exists, which the
/// two variants encode directly.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryResult<T> {
    Success {
        status: Status,
        data: T,
    },
    Failure {
        status: Status,
        error_code: i64,
        error_message: String,
    },
}

impl<T> QueryResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, QueryResult::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn status(&self) -> &Status {
        match self {
            QueryResult::Success { status, .. } | QueryResult::Failure { status, .. } => status,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            QueryResult::Success { data, .. } => Some(data),
            QueryResult::Failure { .. } => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            QueryResult::Success { data, .. } => Some(data),
            QueryResult::Failure { .. } => None,
        }
    }

    pub fn error_code(&self) -> Option<i64> {
        match self {
            QueryResult::Success { .. } => None,
            QueryResult::Failure { error_code, .. } => Some(*error_code),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            QueryResult::Success { .. } => None,
            QueryResult::Failure { error_message, .. } => Some(error_message),
        }
    }

    /// Reshapes the payload of a success, carrying a failure through untouched.
    pub fn map<U, F>(self, f: F) -> QueryResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            QueryResult::Success { status, data } => QueryResult::Success {
                status,
                data: f(data),
            },
            QueryResult::Failure {
                status,
                error_code,
                error_message,
            } => QueryResult::Failure {
                status,
                error_code,
                error_message,
            },
        }
    }

    /// Converts into a `Result` for callers that prefer `?` over matching.
    pub fn into_result(self) -> Result<T, RemoteError> {
        match self {
            QueryResult::Success { data, .. } => Ok(data),
            QueryResult::Failure {
                status,
                error_code,
                error_message,
            } => Err(RemoteError {
                status,
                error_code,
                error_message,
            }),
        }
    }
}

impl<T: Serialize> Serialize for QueryResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct StatusOut<'a> {
            timestamp: &'a DateTime<Utc>,
            #[serde(skip_serializing_if = "Option::is_none")]
            elapsed: Option<u64>,
            #[serde(skip_serializing_if = "Option::is_none")]
            error_code: Option<i64>,
            #[serde(skip_serializing_if = "Option::is_none")]
            error_message: Option<&'a str>,
        }

        #[derive(Serialize)]
        struct EnvelopeOut<'a, T> {
            status: StatusOut<'a>,
            #[serde(skip_serializing_if = "Option::is_none")]
            data: Option<&'a T>,
        }

        let status = self.status();
        EnvelopeOut {
            status: StatusOut {
                timestamp: &status.timestamp,
                elapsed: status.elapsed,
                error_code: self.error_code(),
                error_message: self.error_message(),
            },
            data: self.data(),
        }
        .serialize(serializer)
    }
}

/// A service-reported failure, as returned by [`QueryResult::into_result`].
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
#[error("{error_message} (error code {error_code})")]
pub struct RemoteError {
    pub status: Status,
    pub error_code: i64,
    pub error_message: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn decode(value: serde_json::Value) -> Result<QueryResult<serde_json::Value>, Error> {
        serde_json::from_value::<Envelope>(value)
            .unwrap()
            .into_query_result()
    }

    #[test]
    fn success_envelope_keeps_data() {
        let result = decode(json!({
            "status": { "timestamp": "2021-06-01T10:00:00.000Z", "elapsed": 3 },
            "data": { "id": "abc" }
        }))
        .unwrap();
        assert!(result.is_success());
        assert_eq!(result.status().elapsed, Some(3));
        assert_eq!(result.data(), Some(&json!({ "id": "abc" })));
        assert_eq!(result.error_code(), None);
    }

    #[test]
    fn error_code_translates_message() {
        let result = decode(json!({
            "status": {
                "timestamp": "2021-06-01T10:00:00.000Z",
                "elapsed": 1,
                "error_code": 404,
                "error_message": "Not Found"
            }
        }))
        .unwrap();
        assert!(result.is_failure());
        assert_eq!(result.error_code(), Some(404));
        assert_eq!(result.error_message(), Some("Asset not found"));
        assert!(result.data().is_none());
    }

    #[test]
    fn error_code_wins_over_data() {
        let result = decode(json!({
            "status": { "timestamp": "2021-06-01T10:00:00Z", "error_code": 500 },
            "data": { "id": "abc" }
        }))
        .unwrap();
        assert_eq!(result.error_code(), Some(500));
        assert!(result.data().is_none());
    }

    #[test]
    fn error_code_wins_over_mistyped_data() {
        let envelope = serde_json::from_value::<Envelope>(json!({
            "status": {
                "timestamp": "2021-09-14T12:08:00Z",
                "error_code": 429,
                "error_message": "rate"
            },
            "data": {}
        }))
        .unwrap();
        let result = envelope.into_query_result::<Vec<String>>().unwrap();
        assert_eq!(result.error_code(), Some(429));
        assert_eq!(result.error_message(), Some("Too many requests (rate limit)"));
    }

    #[test]
    fn mistyped_data_without_error_is_decode_error() {
        let envelope = serde_json::from_value::<Envelope>(json!({
            "status": { "timestamp": "2021-09-14T12:08:00Z" },
            "data": {}
        }))
        .unwrap();
        let result = envelope.into_query_result::<Vec<String>>();
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn unknown_code_resolves_to_generic_message() {
        let result = decode(json!({
            "status": { "timestamp": "2021-06-01T10:00:00Z", "error_code": 502 }
        }))
        .unwrap();
        assert_eq!(result.error_message(), Some(crate::UNKNOWN_ERROR));
    }

    #[test]
    fn neither_data_nor_error_is_rejected() {
        let result = decode(json!({
            "status": { "timestamp": "2021-06-01T10:00:00Z" }
        }));
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn map_carries_failure_metadata() {
        let failure: QueryResult<Vec<u8>> = QueryResult::Failure {
            status: Status {
                timestamp: "2021-06-01T10:00:00Z".parse().unwrap(),
                elapsed: Some(9),
            },
            error_code: 429,
            error_message: "Too many requests (rate limit)".to_string(),
        };
        let mapped = failure.clone().map(|bytes| bytes.len());
        assert_eq!(mapped.status(), failure.status());
        assert_eq!(mapped.error_code(), Some(429));

        let err = failure.into_result().unwrap_err();
        assert_eq!(err.error_code, 429);
        assert_eq!(
            err.to_string(),
            "Too many requests (rate limit) (error code 429)"
        );
    }

    #[test]
    fn serializes_back_to_envelope_shape() {
        let success = QueryResult::Success {
            status: Status {
                timestamp: "2021-06-01T10:00:00Z".parse().unwrap(),
                elapsed: None,
            },
            data: json!([1, 2]),
        };
        assert_eq!(
            serde_json::to_value(&success).unwrap(),
            json!({ "status": { "timestamp": "2021-06-01T10:00:00Z" }, "data": [1, 2] })
        );

        let failure: QueryResult<serde_json::Value> = QueryResult::Failure {
            status: Status {
                timestamp: "2021-06-01T10:00:00Z".parse().unwrap(),
                elapsed: Some(2),
            },
            error_code: 401,
            error_message: "Unauthorized (authentication)".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&failure).unwrap(),
            json!({
                "status": {
                    "timestamp": "2021-06-01T10:00:00Z",
                    "elapsed": 2,
                    "error_code": 401,
                    "error_message": "Unauthorized (authentication)"
                }
            })
        );
    }
}
