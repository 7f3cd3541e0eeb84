//! User actions, decoded from input lines at the boundary.

use crate::error::BrowserError;
use crate::ingredients::parse_count_term;
use crate::recipe::ServingsChange;
use std::str::FromStr;

pub const HELP: &str = "\
Commands:
  search <query>            search recipes
  page <n>                  show page n of the results
  #<id> | open <id>         open a recipe
  + | -                     more or fewer servings
  shop                      add the open recipe's ingredients to the shopping list
  like                      like or unlike the open recipe
  add <count> <unit> <name> add an item to the shopping list (unit may be '-')
  set <item-id> <count>     change the count of a shopping list item
  rm <item-id>              remove a shopping list item
  list                      show the shopping list
  likes                     show liked recipes
  help                      show this message
  quit                      leave
";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Search(String),
    GoToPage(usize),
    OpenRecipe(String),
    Servings(ServingsChange),
    AddRecipeToList,
    ToggleLike,
    AddItem {
        count: f64,
        unit: String,
        ingredient: String,
    },
    UpdateCount {
        id: String,
        count: f64,
    },
    DeleteItem(String),
    ShowList,
    ShowLikes,
    Help,
    Quit,
}

fn invalid(message: impl Into<String>) -> BrowserError {
    BrowserError::InvalidCommand(message.into())
}

fn parse_count(text: &str) -> Result<f64, BrowserError> {
    parse_count_term(text).ok_or_else(|| invalid(format!("'{}' is not a number", text)))
}

impl FromStr for Command {
    type Err = BrowserError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();

        if let Some(id) = line.strip_prefix('#') {
            let id = id.trim();
            if id.is_empty() {
                return Err(invalid("missing recipe id after '#'"));
            }
            return Ok(Command::OpenRecipe(id.to_string()));
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "search" | "s" => Ok(Command::Search(rest.to_string())),
            "page" | "p" => rest
                .parse::<usize>()
                .ok()
                .filter(|page| *page >= 1)
                .map(Command::GoToPage)
                .ok_or_else(|| invalid("page needs a number starting at 1")),
            "open" | "o" if !rest.is_empty() => Ok(Command::OpenRecipe(rest.to_string())),
            "+" => Ok(Command::Servings(ServingsChange::Increase)),
            "-" => Ok(Command::Servings(ServingsChange::Decrease)),
            "shop" => Ok(Command::AddRecipeToList),
            "like" => Ok(Command::ToggleLike),
            "add" => {
                let mut parts = rest.splitn(3, char::is_whitespace);
                let (count, unit, ingredient) = match (parts.next(), parts.next(), parts.next()) {
                    (Some(count), Some(unit), Some(ingredient)) if !count.is_empty() => {
                        (count, unit, ingredient.trim())
                    }
                    _ => return Err(invalid("usage: add <count> <unit> <name>")),
                };
                let unit = if unit == "-" { "" } else { unit };
                Ok(Command::AddItem {
                    count: parse_count(count)?,
                    unit: unit.to_string(),
                    ingredient: ingredient.to_string(),
                })
            }
            "set" => match rest.split_whitespace().collect::<Vec<_>>()[..] {
                [id, count] => Ok(Command::UpdateCount {
                    id: id.to_string(),
                    count: parse_count(count)?,
                }),
                _ => Err(invalid("usage: set <item-id> <count>")),
            },
            "rm" if !rest.is_empty() => Ok(Command::DeleteItem(rest.to_string())),
            "list" => Ok(Command::ShowList),
            "likes" => Ok(Command::ShowLikes),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Err(invalid(format!("unknown command '{}', try 'help'", line))),
        }
    }
}
