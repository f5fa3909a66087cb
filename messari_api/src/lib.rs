mod client;
mod endpoint;
mod errors;
mod transport;
pub mod types;
pub use self::client::{HttpTransport, API_KEY_HEADER, DEFAULT_BASE_URL};
pub use self::endpoint::{
    build_endpoint, FieldNaming, FieldSelection, Metric, PaginationOptions, Query, SortBy,
    DEFAULT_LIMIT, IDENTITY_FIELDS, MAX_LIMIT,
};
pub use self::errors::{error_message_for, Error, UNKNOWN_ERROR};
pub use self::transport::Transport;
