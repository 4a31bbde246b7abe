use thiserror::Error;

/// Errors that can occur while fetching or decoding meals
#[derive(Error, Debug)]
pub enum MealError {
    /// Endpoint URL could not be constructed
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Network-level failure or non-success HTTP status
    #[error("Failed to fetch meals: {0}")]
    TransportFailure(#[from] reqwest::Error),

    /// Payload does not match the expected shape
    #[error("Failed to decode payload: {0}")]
    DecodeFailure(#[from] serde_json::Error),

    /// A required key was absent from a meal detail payload
    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),

    /// Lookup by id returned zero matching records
    #[error("No meal found for id {0}")]
    NotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

impl MealError {
    /// True for the lookup-returned-nothing case
    pub fn is_not_found(&self) -> bool {
        matches!(self, MealError::NotFound(_))
    }
}
