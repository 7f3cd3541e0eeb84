use crate::ingredients::format_count;
use crate::model::ShoppingItem;

pub fn render_item(item: &ShoppingItem) -> String {
    let unit = if item.unit.is_empty() {
        String::new()
    } else {
        format!("{} ", item.unit)
    };
    format!(
        "[{}] {} {}{}",
        item.id,
        format_count(item.count),
        unit,
        item.ingredient
    )
}

pub fn render_list(items: &[ShoppingItem]) -> String {
    if items.is_empty() {
        return "Shopping list is empty\n".to_string();
    }

    let mut out = String::from("Shopping list\n");
    for item in items {
        out.push_str(&format!("  {}\n", render_item(item)));
    }
    out
}
