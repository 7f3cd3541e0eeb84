use crate::error::BrowserError;
use crate::ingredients::{estimate_time, parse_ingredient};
use crate::model::{Ingredient, LikedRecipe};
use crate::source::RecipeSource;
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServingsChange {
    Increase,
    Decrease,
}

/// The recipe currently on display
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image_url: String,
    pub source_url: String,
    pub raw_ingredients: Vec<String>,
    pub ingredients: Vec<Ingredient>,
    /// Minutes
    pub time: u32,
    pub servings: u32,
}

impl Recipe {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            author: String::new(),
            image_url: String::new(),
            source_url: String::new(),
            raw_ingredients: Vec::new(),
            ingredients: Vec::new(),
            time: 0,
            servings: 0,
        }
    }

    pub async fn get_recipe(&mut self, source: &dyn RecipeSource) -> Result<(), BrowserError> {
        let detail = source.fetch_by_id(&self.id).await?;
        debug!("Loaded recipe {} '{}'", detail.id, detail.title);

        self.title = detail.title;
        self.author = detail.author;
        self.image_url = detail.image_url;
        self.source_url = detail.source_url;
        self.raw_ingredients = detail.ingredients;
        Ok(())
    }

    pub fn parse_ingredients(&mut self) {
        self.ingredients = self
            .raw_ingredients
            .iter()
            .map(|line| parse_ingredient(line))
            .collect();
    }

    pub fn calc_time(&mut self) {
        self.time = estimate_time(self.ingredients.len());
    }

    pub fn calc_servings(&mut self, default_servings: u32) {
        self.servings = default_servings.max(1);
    }

    /// Step servings by one and rescale every ingredient count.
    ///
    /// Returns `false` when the change was refused (decreasing below 1).
    pub fn update_servings(&mut self, change: ServingsChange) -> bool {
        let new_servings = match change {
            ServingsChange::Increase => self.servings + 1,
            ServingsChange::Decrease if self.servings > 1 => self.servings - 1,
            ServingsChange::Decrease => return false,
        };

        self.scale_to(new_servings);
        true
    }

    /// Rescale ingredient counts proportionally to `new_servings` (floor 1).
    pub fn scale_to(&mut self, new_servings: u32) {
        let new_servings = new_servings.max(1);
        if self.servings == 0 {
            self.servings = new_servings;
            return;
        }

        let factor = f64::from(new_servings) / f64::from(self.servings);
        for ingredient in &mut self.ingredients {
            ingredient.count *= factor;
        }
        self.servings = new_servings;
    }

    pub fn to_like(&self) -> LikedRecipe {
        LikedRecipe {
            id: self.id.clone(),
            title: self.title.clone(),
            author: self.author.clone(),
            image_url: self.image_url.clone(),
        }
    }
}
