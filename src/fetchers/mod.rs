mod mealdb;

pub use mealdb::{MealDbClient, MealDbClientBuilder, DESSERT_CATEGORY};

use async_trait::async_trait;

use crate::error::MealError;
use crate::model::{MealDetail, MealSummary};

/// Source of dessert listings and recipe details
#[async_trait]
pub trait MealCatalog: Send + Sync {
    /// Dessert summaries with incomplete records removed
    async fn desserts(&self) -> Result<Vec<MealSummary>, MealError>;

    /// Full detail for one recipe id
    async fn meal_detail(&self, id: &str) -> Result<MealDetail, MealError>;
}
