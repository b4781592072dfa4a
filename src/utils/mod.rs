pub mod bucket;
pub mod db;
pub mod error;
pub mod logging;
pub mod validate;

// Re-exports for convenience
pub use bucket::{DayBucket, InvalidRangeError, Timestamped, TripWindow, bucket_by_day};
pub use db::{create_connection_pool, ensure_schema};
pub use error::{ApiError, json_error_response};
pub use logging::{initialize_logger, initialize_request_tracing};
pub use validate::validate_id;
