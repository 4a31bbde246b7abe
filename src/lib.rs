pub mod config;
pub mod decoder;
pub mod error;
pub mod fetchers;
pub mod model;
pub mod uniffi_bindings;

#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

pub use config::MealDbConfig;
pub use decoder::{decode_meal_detail, FieldLookup, MAX_INGREDIENT_INDEX};
pub use error::MealError;
pub use fetchers::{MealCatalog, MealDbClient, MealDbClientBuilder};
pub use model::{MealDetail, MealSummary, RawMeal};

/// Fetch the dessert list using configuration from `mealdb.toml` and the environment
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), mealdb_desserts::MealError> {
/// let desserts = mealdb_desserts::fetch_desserts().await?;
/// for meal in &desserts {
///     println!("{} {}", meal.id, meal.name);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn fetch_desserts() -> Result<Vec<MealSummary>, MealError> {
    let client = MealDbClient::from_config(&MealDbConfig::load()?)?;
    client.list_desserts().await
}

/// Fetch one recipe's detail using configuration from `mealdb.toml` and the environment
pub async fn fetch_meal_detail(id: &str) -> Result<MealDetail, MealError> {
    let client = MealDbClient::from_config(&MealDbConfig::load()?)?;
    client.meal_detail(id).await
}

/// Decode a single raw meal object given as JSON text
pub fn decode_meal_detail_json(json: &str) -> Result<MealDetail, MealError> {
    let raw = RawMeal::from_json(json)?;
    decode_meal_detail(&raw)
}
