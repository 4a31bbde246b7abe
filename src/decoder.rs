use std::collections::HashMap;

use log::debug;

use crate::error::MealError;
use crate::model::{MealDetail, RawMeal};

/// Highest ingredient/measure suffix the upstream API publishes.
pub const MAX_INGREDIENT_INDEX: usize = 20;

const NAME_KEY: &str = "strMeal";
const INSTRUCTIONS_KEY: &str = "strInstructions";
const SOURCE_KEY: &str = "strSource";
const YOUTUBE_KEY: &str = "strYoutube";
const INGREDIENT_PREFIX: &str = "strIngredient";
const MEASURE_PREFIX: &str = "strMeasure";

/// Key to optional string lookup over a flat meal payload.
///
/// Absent keys and `null` values are both `None`.
pub trait FieldLookup {
    fn field(&self, key: &str) -> Option<&str>;
}

impl FieldLookup for RawMeal {
    fn field(&self, key: &str) -> Option<&str> {
        self.get(key)
    }
}

impl FieldLookup for HashMap<String, Option<String>> {
    fn field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|value| value.as_deref())
    }
}

impl FieldLookup for HashMap<&str, &str> {
    fn field(&self, key: &str) -> Option<&str> {
        self.get(key).copied()
    }
}

/// Build a [`MealDetail`] from one flat meal payload.
///
/// `strMeal` and `strInstructions` must be present. Ingredient pairs are
/// scanned over the fixed range `1..=20`; a pair contributes only when both
/// halves are non-empty, and gaps do not end the scan.
pub fn decode_meal_detail<L: FieldLookup + ?Sized>(raw: &L) -> Result<MealDetail, MealError> {
    let name = raw
        .field(NAME_KEY)
        .ok_or(MealError::MissingRequiredField(NAME_KEY))?;
    let instructions = raw
        .field(INSTRUCTIONS_KEY)
        .ok_or(MealError::MissingRequiredField(INSTRUCTIONS_KEY))?;

    let ingredients = collect_ingredients(raw);
    debug!("Decoded {} ingredients for '{}'", ingredients.len(), name);

    Ok(MealDetail {
        name: name.to_string(),
        instructions: instructions.to_string(),
        ingredients,
        source_link: non_empty(raw.field(SOURCE_KEY)),
        youtube_link: non_empty(raw.field(YOUTUBE_KEY)),
    })
}

fn collect_ingredients<L: FieldLookup + ?Sized>(raw: &L) -> Vec<String> {
    let mut ingredients = Vec::new();

    for index in 1..=MAX_INGREDIENT_INDEX {
        let ingredient = raw.field(&format!("{INGREDIENT_PREFIX}{index}"));
        let measure = raw.field(&format!("{MEASURE_PREFIX}{index}"));

        if let (Some(ingredient), Some(measure)) = (ingredient, measure) {
            if !ingredient.is_empty() && !measure.is_empty() {
                ingredients.push(format!("{measure} {ingredient}"));
            }
        }
    }

    ingredients
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

impl TryFrom<&RawMeal> for MealDetail {
    type Error = MealError;

    fn try_from(raw: &RawMeal) -> Result<Self, Self::Error> {
        decode_meal_detail(raw)
    }
}
