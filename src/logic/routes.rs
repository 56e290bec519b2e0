//! Screen routes
//!
//! String routes for each screen (`wearApp`, `selection/{iconIndex}`,
//! `textInput/{iconIndex}`, `fullScreenDisplay/{content}`). Content is
//! URL-escaped so arbitrary text survives the trip through a route.

use std::borrow::Cow;

use crate::model::{IconSlot, Screen};

pub const HOME_ROUTE: &str = "wearApp";
const SELECTION_PREFIX: &str = "selection/";
const TEXT_INPUT_PREFIX: &str = "textInput/";
const FULL_SCREEN_PREFIX: &str = "fullScreenDisplay/";

/// A parsed route with its raw parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Selection { icon_index: u8 },
    TextInput { icon_index: u8 },
    FullScreenDisplay { content: String },
}

impl Route {
    /// Parse a route string, returning `None` for unknown routes
    ///
    /// A non-numeric icon index falls back to 0 rather than failing.
    ///
    /// # Examples
    /// ```
    /// use emojicon::logic::routes::Route;
    ///
    /// assert_eq!(Route::parse("selection/3"), Some(Route::Selection { icon_index: 3 }));
    /// assert_eq!(Route::parse("textInput/abc"), Some(Route::TextInput { icon_index: 0 }));
    /// assert_eq!(
    ///     Route::parse("fullScreenDisplay/Hi%3Athere"),
    ///     Some(Route::FullScreenDisplay { content: "Hi:there".to_string() })
    /// );
    /// ```
    pub fn parse(route: &str) -> Option<Self> {
        if route == HOME_ROUTE {
            return Some(Route::Home);
        }
        if let Some(param) = route.strip_prefix(SELECTION_PREFIX) {
            return Some(Route::Selection {
                icon_index: parse_icon_index(param),
            });
        }
        if let Some(param) = route.strip_prefix(TEXT_INPUT_PREFIX) {
            return Some(Route::TextInput {
                icon_index: parse_icon_index(param),
            });
        }
        if let Some(param) = route.strip_prefix(FULL_SCREEN_PREFIX) {
            let content = urlencoding::decode(param)
                .map(Cow::into_owned)
                .unwrap_or_else(|_| param.to_string());
            return Some(Route::FullScreenDisplay { content });
        }
        None
    }

    /// Screen this route opens, if its parameter is usable
    pub fn to_screen(&self) -> Option<Screen> {
        match self {
            Route::Home => Some(Screen::Home),
            Route::Selection { icon_index } => IconSlot::new(*icon_index).map(Screen::Selection),
            Route::TextInput { icon_index } => IconSlot::new(*icon_index).map(Screen::TextInput),
            Route::FullScreenDisplay { content } => {
                Some(Screen::FullScreenDisplay(content.clone()))
            }
        }
    }
}

/// Icon index route parameter; anything that is not a small integer is 0
pub fn parse_icon_index(param: &str) -> u8 {
    param.trim().parse().unwrap_or(0)
}

/// Route string for a screen
///
/// # Examples
/// ```
/// use emojicon::logic::routes::route_for;
/// use emojicon::model::Screen;
///
/// assert_eq!(route_for(&Screen::Home), "wearApp");
/// assert_eq!(
///     route_for(&Screen::FullScreenDisplay("a/b c".to_string())),
///     "fullScreenDisplay/a%2Fb%20c"
/// );
/// ```
pub fn route_for(screen: &Screen) -> String {
    match screen {
        Screen::Home => HOME_ROUTE.to_string(),
        Screen::Selection(slot) => format!("{}{}", SELECTION_PREFIX, slot),
        Screen::TextInput(slot) => format!("{}{}", TEXT_INPUT_PREFIX, slot),
        Screen::FullScreenDisplay(content) => {
            format!("{}{}", FULL_SCREEN_PREFIX, urlencoding::encode(content))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_home() {
        assert_eq!(Route::parse("wearApp"), Some(Route::Home));
        assert_eq!(Route::parse("nowhere"), None);
    }

    #[test]
    fn test_parse_icon_index_fallback() {
        assert_eq!(parse_icon_index("4"), 4);
        assert_eq!(parse_icon_index(" 2 "), 2);
        assert_eq!(parse_icon_index("four"), 0);
        assert_eq!(parse_icon_index(""), 0);
        assert_eq!(parse_icon_index("-1"), 0);
        assert_eq!(parse_icon_index("999"), 0);
    }

    #[test]
    fn test_fallback_index_has_no_screen() {
        let route = Route::parse("selection/oops").unwrap();
        assert_eq!(route, Route::Selection { icon_index: 0 });
        assert_eq!(route.to_screen(), None);

        let route = Route::parse("textInput/7").unwrap();
        assert_eq!(route.to_screen(), None);
    }

    #[test]
    fn test_screen_routes_round_trip() {
        let slot = IconSlot::new(5).unwrap();
        let screens = [
            Screen::Home,
            Screen::Selection(slot),
            Screen::TextInput(slot),
            Screen::FullScreenDisplay("Hi:there/100% ✓".to_string()),
            Screen::FullScreenDisplay(String::new()),
        ];
        for screen in screens {
            let route = route_for(&screen);
            let parsed = Route::parse(&route).and_then(|r| r.to_screen());
            assert_eq!(parsed, Some(screen), "route {}", route);
        }
    }

    #[test]
    fn test_content_is_escaped() {
        let route = route_for(&Screen::FullScreenDisplay("selection/1".to_string()));
        assert!(!route["fullScreenDisplay/".len()..].contains('/'));
    }

    #[test]
    fn test_undecodable_content_kept_raw() {
        // %FF is not valid UTF-8 once decoded
        assert_eq!(
            Route::parse("fullScreenDisplay/%FF"),
            Some(Route::FullScreenDisplay {
                content: "%FF".to_string()
            })
        );
    }
}
