//! Control-value changes and the text commands that produce them.

use shared::domain::{CategoryFilter, SortMode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    QueryChanged(String),
    CategorySelected(CategoryFilter),
    SortModeChanged(SortMode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Control(ControlEvent),
    ShowCategories,
    AddToCart(String),
    Help,
    Quit,
    Unknown(String),
}

pub const SESSION_HELP: &str = concat!(
    "commands: query <text> | category <name|all> | ",
    "sort <name|price-asc|price-desc|ranking> | add <id> | categories | help | quit"
);

/// Parses one line of an interactive session.
///
/// `category` accepts either `all` or the configured sentinel label for the
/// no-filter selection; anything else is taken verbatim as a category name.
pub fn parse_session_line(line: &str, all_label: &str) -> SessionCommand {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb.to_ascii_lowercase().as_str() {
        "query" | "q" => SessionCommand::Control(ControlEvent::QueryChanged(rest.to_string())),
        "category" | "c" => {
            let no_filter = rest.is_empty() || rest.eq_ignore_ascii_case("all") || rest == all_label;
            let category = if no_filter {
                CategoryFilter::All
            } else {
                CategoryFilter::only(rest)
            };
            SessionCommand::Control(ControlEvent::CategorySelected(category))
        }
        "sort" | "s" => {
            SessionCommand::Control(ControlEvent::SortModeChanged(SortMode::parse_lenient(rest)))
        }
        "categories" => SessionCommand::ShowCategories,
        "add" if !rest.is_empty() => SessionCommand::AddToCart(rest.to_string()),
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        _ => SessionCommand::Unknown(line.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: &str = "All products";

    #[test]
    fn parses_control_commands() {
        assert_eq!(
            parse_session_line("query  café crème ", ALL),
            SessionCommand::Control(ControlEvent::QueryChanged("café crème".into()))
        );
        assert_eq!(
            parse_session_line("query", ALL),
            SessionCommand::Control(ControlEvent::QueryChanged(String::new()))
        );
        assert_eq!(
            parse_session_line("sort price-desc", ALL),
            SessionCommand::Control(ControlEvent::SortModeChanged(SortMode::PriceDesc))
        );
        assert_eq!(
            parse_session_line("s whatever", ALL),
            SessionCommand::Control(ControlEvent::SortModeChanged(SortMode::Name))
        );
    }

    #[test]
    fn category_sentinel_accepts_all_and_label() {
        for line in ["category all", "category All products", "c"] {
            assert_eq!(
                parse_session_line(line, ALL),
                SessionCommand::Control(ControlEvent::CategorySelected(CategoryFilter::All)),
                "{line}"
            );
        }
        assert_eq!(
            parse_session_line("category Home Office", ALL),
            SessionCommand::Control(ControlEvent::CategorySelected(CategoryFilter::only(
                "Home Office"
            )))
        );
    }

    #[test]
    fn recognizes_session_commands() {
        assert_eq!(parse_session_line("categories", ALL), SessionCommand::ShowCategories);
        assert_eq!(parse_session_line("HELP", ALL), SessionCommand::Help);
        assert_eq!(
            parse_session_line("add sku-9", ALL),
            SessionCommand::AddToCart("sku-9".into())
        );
        assert_eq!(parse_session_line("add", ALL), SessionCommand::Unknown("add".into()));
        assert_eq!(parse_session_line("exit", ALL), SessionCommand::Quit);
        assert_eq!(
            parse_session_line("buy mouse", ALL),
            SessionCommand::Unknown("buy mouse".into())
        );
    }
}
