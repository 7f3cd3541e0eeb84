use crate::model::RecipeSummary;
use crate::search::Pagination;

const TITLE_LIMIT: usize = 17;

/// Shorten `title` on word boundaries so it fits in `limit` characters, adding ` ...`.
pub fn limit_recipe_title(title: &str, limit: usize) -> String {
    if title.chars().count() <= limit {
        return title.to_string();
    }

    let mut kept: Vec<&str> = Vec::new();
    let mut length = 0;
    for word in title.split_whitespace() {
        if length + word.chars().count() > limit {
            break;
        }
        length += word.chars().count();
        kept.push(word);
    }

    if kept.is_empty() {
        let truncated: String = title.chars().take(limit).collect();
        return format!("{} ...", truncated);
    }
    format!("{} ...", kept.join(" "))
}

fn render_row(out: &mut String, recipe: &RecipeSummary, active: bool) {
    let marker = if active { '>' } else { ' ' };
    out.push_str(&format!(
        "{} #{:<8} {:<22} {}\n",
        marker,
        recipe.id,
        limit_recipe_title(&recipe.title, TITLE_LIMIT),
        recipe.author
    ));
}

fn render_buttons(out: &mut String, pagination: &Pagination) {
    let prev = pagination.prev.map(|p| format!("< Page {}", p));
    let next = pagination.next.map(|p| format!("Page {} >", p));

    let buttons: Vec<String> = prev.into_iter().chain(next).collect();
    if !buttons.is_empty() {
        out.push_str(&format!("{}\n", buttons.join("   ")));
    }
}

/// Render one page of results plus its pagination controls.
pub fn render_results(
    results: &[RecipeSummary],
    page: usize,
    per_page: usize,
    active_id: Option<&str>,
) -> String {
    let pagination = Pagination::new(results.len(), page, per_page);
    let mut out = String::new();

    for recipe in pagination.slice(results) {
        render_row(&mut out, recipe, active_id == Some(recipe.id.as_str()));
    }
    render_buttons(&mut out, &pagination);

    out
}
