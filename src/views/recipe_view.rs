use super::likes_view::like_button;
use crate::ingredients::format_count;
use crate::model::Ingredient;
use crate::recipe::Recipe;

fn render_ingredient(out: &mut String, ingredient: &Ingredient) {
    let count = format_count(ingredient.count);
    if ingredient.unit.is_empty() {
        out.push_str(&format!("  * {} {}\n", count, ingredient.ingredient));
    } else {
        out.push_str(&format!(
            "  * {} {} {}\n",
            count, ingredient.unit, ingredient.ingredient
        ));
    }
}

fn render_servings_line(out: &mut String, recipe: &Recipe) {
    out.push_str(&format!("{} servings  [-] [+]\n", recipe.servings));
}

/// Full recipe page
pub fn render_recipe(recipe: &Recipe, is_liked: bool) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", recipe.title.to_uppercase()));
    if !recipe.image_url.is_empty() {
        out.push_str(&format!("{}\n", recipe.image_url));
    }
    out.push_str(&format!(
        "{} minutes   {}\n",
        recipe.time,
        like_button(is_liked)
    ));
    render_servings_line(&mut out, recipe);
    out.push('\n');

    for ingredient in &recipe.ingredients {
        render_ingredient(&mut out, ingredient);
    }
    out.push_str("[Add to shopping list]\n");
    out.push('\n');

    out.push_str(&format!(
        "This recipe was carefully designed and tested by {}.\n",
        recipe.author
    ));
    out.push_str(&format!("Directions: {}\n", recipe.source_url));

    out
}

/// Servings line and quantities only, for in-place rescaling
pub fn update_servings_ingredients(recipe: &Recipe) -> String {
    let mut out = String::new();
    render_servings_line(&mut out, recipe);
    for ingredient in &recipe.ingredients {
        render_ingredient(&mut out, ingredient);
    }
    out
}
