use std::env;

use log::error;
use mealdb_desserts::{MealCatalog, MealDbClient, MealDbConfig, MealDetail, MealSummary};

const USAGE: &str = "Usage: mealdb desserts [--json] | mealdb meal <id> [--json]";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let positional: Vec<&str> = args
        .iter()
        .map(String::as_str)
        .filter(|a| *a != "--json")
        .collect();

    let config = MealDbConfig::load()?;
    let client = MealDbClient::from_config(&config)?;

    let result = match positional.as_slice() {
        ["desserts"] => list(&client, json).await,
        ["meal", id] => show(&client, id, json).await,
        _ => return Err(USAGE.into()),
    };

    if let Err(e) = &result {
        error!("{}", e);
    }
    result
}

async fn list(catalog: &dyn MealCatalog, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let meals = catalog.desserts().await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&meals)?);
    } else {
        print!("{}", render_list(&meals));
    }
    Ok(())
}

async fn show(
    catalog: &dyn MealCatalog,
    id: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let meal = catalog.meal_detail(id).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&meal)?);
    } else {
        print!("{}", render_detail(&meal));
    }
    Ok(())
}

fn render_list(meals: &[MealSummary]) -> String {
    meals
        .iter()
        .map(|meal| format!("{:>6}  {}\n", meal.id, meal.name))
        .collect()
}

fn render_detail(meal: &MealDetail) -> String {
    let mut out = format!("{}\n\nIngredients:\n", meal.name);
    for ingredient in &meal.ingredients {
        out.push_str(&format!("  - {}\n", ingredient));
    }
    out.push_str(&format!("\nInstructions:\n{}\n", meal.instructions));
    if let Some(source) = &meal.source_link {
        out.push_str(&format!("\nSource: {}\n", source));
    }
    if let Some(youtube) = &meal.youtube_link {
        out.push_str(&format!("Video: {}\n", youtube));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_list() {
        let meals = vec![MealSummary {
            name: "Apam balik".to_string(),
            thumbnail_url: "https://example.com/apam.jpg".to_string(),
            id: "53049".to_string(),
        }];
        assert_eq!(render_list(&meals), " 53049  Apam balik\n");
    }

    #[test]
    fn test_render_detail() {
        let meal = MealDetail {
            name: "Dessert".to_string(),
            instructions: "Mix well.".to_string(),
            ingredients: vec!["100g Sugar".to_string(), "200g Flour".to_string()],
            source_link: None,
            youtube_link: Some("https://youtube.com/x".to_string()),
        };
        let out = render_detail(&meal);
        assert!(out.starts_with("Dessert\n"));
        assert!(out.contains("  - 100g Sugar\n  - 200g Flour\n"));
        assert!(out.contains("Mix well."));
        assert!(!out.contains("Source:"));
        assert!(out.contains("Video: https://youtube.com/x"));
    }
}
