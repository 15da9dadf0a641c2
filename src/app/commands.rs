use crate::app::controller::Intent;
use crate::core::browse::{CatalogQuery, SortOrder};
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  items [words] [search=<kw>] [category=<c>] [diet=<d>] [sort=az|za]
  categories                 list categories and dietary tags
  add <qty> <name>           add an item to the cart
  adjust <qty> <name>        set the quantity of an item in the cart
  + <name>                   one more of an item in the cart
  - <name>                   one less of an item in the cart
  remove <name>              remove an item from the cart
  cart                       show the cart
  clear                      empty the cart
  submit                     submit the order
  help                       show this help
  quit                       leave the kiosk";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Intent),
    Categories,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for the list of commands.")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Unknown filter '{0}'. Use search=, category=, diet= or sort=.")]
    UnknownFilter(String),

    #[error("{0}")]
    InvalidSort(String),
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_lowercase().as_str() {
        "items" | "browse" | "ls" => Command::Run(Intent::Browse(parse_query(rest)?)),
        "categories" => Command::Categories,
        "add" => {
            let (quantity, name) = split_quantity(rest).ok_or(CommandError::Usage("add <qty> <name>"))?;
            Command::Run(Intent::AddItem { name, quantity })
        }
        "adjust" => {
            let (quantity, name) =
                split_quantity(rest).ok_or(CommandError::Usage("adjust <qty> <name>"))?;
            Command::Run(Intent::AdjustQuantity { name, quantity })
        }
        "+" | "inc" | "more" => Command::Run(Intent::IncreaseQuantity {
            name: required_name(rest, "+ <name>")?,
        }),
        "-" | "dec" | "less" => Command::Run(Intent::DecreaseQuantity {
            name: required_name(rest, "- <name>")?,
        }),
        "remove" | "rm" => {
            if rest.is_empty() {
                return Err(CommandError::Usage("remove <name>"));
            }
            Command::Run(Intent::RemoveItem {
                name: rest.to_string(),
            })
        }
        "cart" => Command::Run(Intent::ViewCart),
        "clear" => Command::Run(Intent::ClearCart),
        "submit" => Command::Run(Intent::Submit),
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn required_name(rest: &str, usage: &'static str) -> Result<String, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::Usage(usage));
    }
    Ok(rest.to_string())
}

/// Answer to the `[y/N]` submit prompt. Anything but y/yes means no.
pub fn is_confirmation(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

/// `<qty> <name...>`; the quantity stays raw text so the validator sees it.
fn split_quantity(rest: &str) -> Option<(String, String)> {
    let (quantity, name) = rest.split_once(char::is_whitespace)?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((quantity.to_string(), name.to_string()))
}

/// Leading bare words form the keyword. A `key=value` pair runs until the next
/// pair, so values may contain spaces ("category=Prepared Meals").
fn parse_query(rest: &str) -> Result<CatalogQuery, CommandError> {
    let mut keyword_words: Vec<&str> = Vec::new();
    let mut pairs: Vec<(String, String)> = Vec::new();

    for token in rest.split_whitespace() {
        if let Some((key, value)) = token.split_once('=') {
            pairs.push((key.to_lowercase(), value.to_string()));
        } else if let Some((_, value)) = pairs.last_mut() {
            if !value.is_empty() {
                value.push(' ');
            }
            value.push_str(token);
        } else {
            keyword_words.push(token);
        }
    }

    let mut query = CatalogQuery::new().keyword(keyword_words.join(" "));
    for (key, value) in pairs {
        match key.as_str() {
            "search" | "q" => query.keyword = value,
            "category" | "cat" => query.category = all_means_none(value),
            "diet" | "dietary" | "tag" => query.dietary = all_means_none(value),
            "sort" => {
                query.sort = value
                    .parse::<SortOrder>()
                    .map_err(CommandError::InvalidSort)?
            }
            _ => return Err(CommandError::UnknownFilter(key)),
        }
    }
    Ok(query)
}

fn all_means_none(value: String) -> Option<String> {
    if value.is_empty() || value.eq_ignore_ascii_case("all") {
        None
    } else {
        Some(value)
    }
}
