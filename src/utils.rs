/// Utility functions used throughout the application

use std::path::PathBuf;

/// Get platform-specific debug log path
pub fn get_debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("emojicon-debug.log");
    path
}

/// Get platform-specific data fallback path
pub fn get_data_fallback_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("emojicon-data");
    path
}

/// Truncate `text` to at most `max_width` terminal columns, adding an
/// ellipsis when something was cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;
    use unicode_width::UnicodeWidthStr;

    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate_to_width("Hi", 5), "Hi");
        assert_eq!(truncate_to_width("Hello", 5), "Hello");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("Hello world", 6), "Hello…");
        assert_eq!(truncate_to_width("Hello", 1), "…");
        assert_eq!(truncate_to_width("Hello", 0), "");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK character is two columns wide
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
    }
}
