use thiserror::Error;

/// Errors for lookups the caller requested by id. Dangling references
/// inside the model itself are tolerated and never surface here.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("unknown resource: {0}")]
    UnknownResource(String),
}
