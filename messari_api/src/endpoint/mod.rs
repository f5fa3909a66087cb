mod common;
pub use self::common::{build_endpoint, PaginationOptions, Query, SortBy, DEFAULT_LIMIT, MAX_LIMIT};

mod fields;
pub use self::fields::{FieldNaming, FieldSelection, Metric, IDENTITY_FIELDS};
