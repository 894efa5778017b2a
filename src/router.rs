/// Category menu sent on /start and re-sent after every fetch.
pub const MENU: &str = "Press 1 for India news\n\
                        Press 2 for International news\n\
                        Press 3 for Business news\n\
                        Press 4 for Sports news";

pub const INVALID_INPUT: &str = "Invalid input. Please try again.";
pub const PRESS_START: &str = "Press Enter to start...";
pub const NO_NEW_ARTICLES: &str = "No new articles found.";

/// What to do with one inbound text message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Send the category menu.
    Menu,
    /// Nudge toward the start command.
    Nudge,
    /// Fetch headlines for a category/country pair.
    Fetch {
        category: &'static str,
        country: &'static str,
    },
    /// Unrecognized input: error notice plus the menu.
    Invalid,
}

/// Maps inbound text to a route. The fixed category table lives here and is
/// immutable for the process lifetime.
pub fn route(text: &str) -> Route {
    match text {
        "" => Route::Nudge,
        "/start" | "start" => Route::Menu,
        "1" => Route::Fetch {
            category: "general",
            country: "in",
        },
        "2" => Route::Fetch {
            category: "general",
            country: "us",
        },
        "3" => Route::Fetch {
            category: "business",
            country: "us",
        },
        "4" => Route::Fetch {
            category: "sports",
            country: "us",
        },
        _ => Route::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_commands_show_menu() {
        assert_eq!(route("/start"), Route::Menu);
        assert_eq!(route("start"), Route::Menu);
    }

    #[test]
    fn test_empty_text_nudges() {
        assert_eq!(route(""), Route::Nudge);
    }

    #[test]
    fn test_category_table() {
        assert_eq!(
            route("1"),
            Route::Fetch {
                category: "general",
                country: "in"
            }
        );
        assert_eq!(
            route("2"),
            Route::Fetch {
                category: "general",
                country: "us"
            }
        );
        assert_eq!(
            route("3"),
            Route::Fetch {
                category: "business",
                country: "us"
            }
        );
        assert_eq!(
            route("4"),
            Route::Fetch {
                category: "sports",
                country: "us"
            }
        );
    }

    #[test]
    fn test_everything_else_is_invalid() {
        assert_eq!(route("5"), Route::Invalid);
        assert_eq!(route("hello"), Route::Invalid);
        assert_eq!(route(" 1"), Route::Invalid);
        assert_eq!(route("START"), Route::Invalid);
    }

    #[test]
    fn test_menu_lists_every_command() {
        for key in ["1", "2", "3", "4"] {
            assert!(MENU.contains(&format!("Press {} for", key)));
        }
    }
}
