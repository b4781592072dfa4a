use uuid::Uuid;

use crate::utils::ApiError;

/// Parse a path segment as a UUID, naming the offending field on failure.
pub fn validate_id(field: &'static str, raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::InvalidId {
        field,
        value: raw.to_string(),
    })
}
