use serde::{Deserialize, Deserializer, Serialize};

/// JSON has no infinity or NaN and writes them as `null`; read that back as an unknown count.
fn count_or_nan<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// Minimal recipe representation returned by a search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image_url: String,
}

/// Full recipe representation returned by fetch-by-id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDetail {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image_url: String,
    pub source_url: String,
    pub ingredients: Vec<String>,
}

/// One parsed ingredient line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(deserialize_with = "count_or_nan")]
    pub count: f64,
    pub unit: String,
    pub ingredient: String,
}

/// An entry of the shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: String,
    #[serde(deserialize_with = "count_or_nan")]
    pub count: f64,
    pub unit: String,
    pub ingredient: String,
}

/// An entry of the likes list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikedRecipe {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image_url: String,
}

