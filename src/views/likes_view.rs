use super::search_view::limit_recipe_title;
use crate::model::LikedRecipe;

pub fn like_button(is_liked: bool) -> String {
    if is_liked {
        "[♥ Liked]".to_string()
    } else {
        "[♡ Like]".to_string()
    }
}

/// Likes menu with its badge; hidden (`None`) while nothing is liked.
pub fn render_likes_menu(likes: &[LikedRecipe]) -> Option<String> {
    if likes.is_empty() {
        return None;
    }

    let mut out = format!("Likes ({})\n", likes.len());
    for like in likes {
        out.push_str(&format!(
            "  #{:<8} {:<22} {}\n",
            like.id,
            limit_recipe_title(&like.title, 17),
            like.author
        ));
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_hidden_when_empty() {
        assert!(render_likes_menu(&[]).is_none());
    }

    #[test]
    fn test_menu_shows_badge_count() {
        let likes = vec![
            LikedRecipe {
                id: "1".to_string(),
                title: "Pizza".to_string(),
                author: "A".to_string(),
                image_url: String::new(),
            },
            LikedRecipe {
                id: "2".to_string(),
                title: "Pasta".to_string(),
                author: "B".to_string(),
                image_url: String::new(),
            },
        ];
        let menu = render_likes_menu(&likes).unwrap();
        assert!(menu.starts_with("Likes (2)"));
        assert!(menu.contains("#1"));
        assert!(menu.contains("Pasta"));
    }

    #[test]
    fn test_like_button_states() {
        assert_ne!(like_button(true), like_button(false));
    }
}
