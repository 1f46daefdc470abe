use thiserror::Error;

/// Failures of storefront lookups and review validation.
///
/// These never abort the application; the update loop turns them into
/// error notices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Unknown device: {0}")]
    UnknownDevice(String),

    #[error("Unknown plan: {0}")]
    UnknownPlan(String),

    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    #[error("Please fill in the {0} field")]
    MissingField(&'static str),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Failed to load store data: {0}")]
    Seed(String),
}
