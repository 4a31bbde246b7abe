//! UniFFI bindings for mealdb-desserts
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! It wraps the async Rust API with synchronous functions that manage their own tokio runtime,
//! so callers should invoke them off the UI thread.

use std::fmt;

use crate::{MealDbClient, MealDbConfig, MealDetail, MealError, MealSummary};

/// FFI-compatible dessert listing entry
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiMealSummary {
    pub name: String,
    pub thumbnail_url: String,
    pub id: String,
}

impl From<MealSummary> for FfiMealSummary {
    fn from(summary: MealSummary) -> Self {
        FfiMealSummary {
            name: summary.name,
            thumbnail_url: summary.thumbnail_url,
            id: summary.id,
        }
    }
}

/// FFI-compatible recipe detail
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiMealDetail {
    pub name: String,
    pub instructions: String,
    /// Formatted as "<measurement> <ingredient>"
    pub ingredients: Vec<String>,
    pub source_link: Option<String>,
    pub youtube_link: Option<String>,
}

impl From<MealDetail> for FfiMealDetail {
    fn from(detail: MealDetail) -> Self {
        FfiMealDetail {
            name: detail.name,
            instructions: detail.instructions,
            ingredients: detail.ingredients,
            source_link: detail.source_link,
            youtube_link: detail.youtube_link,
        }
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiMealError {
    InvalidRequest { message: String },
    TransportFailure { message: String },
    DecodeFailure { message: String },
    MissingRequiredField { message: String },
    NotFound { message: String },
    ConfigError { message: String },
    /// Runtime error (tokio)
    RuntimeError { message: String },
}

impl fmt::Display for FfiMealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiMealError::InvalidRequest { message } => write!(f, "Invalid request: {}", message),
            FfiMealError::TransportFailure { message } => {
                write!(f, "Transport failure: {}", message)
            }
            FfiMealError::DecodeFailure { message } => write!(f, "Decode failure: {}", message),
            FfiMealError::MissingRequiredField { message } => {
                write!(f, "Missing required field: {}", message)
            }
            FfiMealError::NotFound { message } => write!(f, "Not found: {}", message),
            FfiMealError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiMealError::RuntimeError { message } => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for FfiMealError {}

impl From<MealError> for FfiMealError {
    fn from(err: MealError) -> Self {
        match err {
            MealError::InvalidRequest(message) => FfiMealError::InvalidRequest { message },
            MealError::TransportFailure(e) => FfiMealError::TransportFailure {
                message: e.to_string(),
            },
            MealError::DecodeFailure(e) => FfiMealError::DecodeFailure {
                message: e.to_string(),
            },
            MealError::MissingRequiredField(key) => FfiMealError::MissingRequiredField {
                message: key.to_string(),
            },
            MealError::NotFound(id) => FfiMealError::NotFound { message: id },
            MealError::ConfigError(e) => FfiMealError::ConfigError {
                message: e.to_string(),
            },
        }
    }
}

/// Client settings; unset fields fall back to `mealdb.toml` / `MEALDB__*` values
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiClientConfig {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

/// Create a new tokio runtime for FFI calls
fn create_runtime() -> Result<tokio::runtime::Runtime, FfiMealError> {
    tokio::runtime::Runtime::new().map_err(|e| FfiMealError::RuntimeError {
        message: format!("Failed to create async runtime: {}", e),
    })
}

fn create_client(config: Option<FfiClientConfig>) -> Result<MealDbClient, FfiMealError> {
    let config = config.unwrap_or_default();
    let mut settings = MealDbConfig::load().map_err(MealError::from)?;

    if let Some(base_url) = config.base_url {
        settings.base_url = base_url;
    }
    if let Some(timeout) = config.timeout_seconds {
        settings.timeout = Some(timeout);
    }

    Ok(MealDbClient::from_config(&settings)?)
}

/// Fetch the dessert list
///
/// # Returns
/// Summaries with incomplete records removed (possibly empty)
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn list_desserts(
    config: Option<FfiClientConfig>,
) -> Result<Vec<FfiMealSummary>, FfiMealError> {
    let client = create_client(config)?;
    let rt = create_runtime()?;
    let meals = rt.block_on(client.list_desserts())?;
    Ok(meals.into_iter().map(FfiMealSummary::from).collect())
}

/// Fetch one recipe's detail by id
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn meal_detail(
    id: String,
    config: Option<FfiClientConfig>,
) -> Result<FfiMealDetail, FfiMealError> {
    let client = create_client(config)?;
    let rt = create_runtime()?;
    let detail = rt.block_on(client.meal_detail(&id))?;
    Ok(detail.into())
}

/// Decode a raw meal JSON object without any network access
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn decode_meal_detail(json: String) -> Result<FfiMealDetail, FfiMealError> {
    Ok(crate::decode_meal_detail_json(&json)?.into())
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
