//! String helpers and the name rule

use crate::error::FieldError;

/// Regex class body for ECMAScript WhiteSpace and LineTerminator, which is
/// what `\s` matches and `String.prototype.trim` strips in a browser
pub const JS_WHITESPACE_CLASS: &str = r"\t\n\x0B\x0C\r\p{Zs}\x{2028}\x{2029}\x{FEFF}";

/// ECMAScript WhiteSpace or LineTerminator. Unlike `char::is_whitespace`
/// this excludes U+0085 and includes U+FEFF.
pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r'
            | '\u{2028}' | '\u{2029}' | '\u{FEFF}'
            // Zs
            | ' ' | '\u{A0}' | '\u{1680}' | '\u{2000}'..='\u{200A}'
            | '\u{202F}' | '\u{205F}' | '\u{3000}'
    )
}

/// Trims `value` the way `String.prototype.trim` does in a browser
pub fn trim_input(value: &str) -> &str {
    value.trim_matches(is_js_whitespace)
}

/// True when nothing but whitespace was entered
pub fn is_blank(value: &str) -> bool {
    trim_input(value).is_empty()
}

/// Full name is required after trimming
pub fn check_name(value: &str) -> Result<(), FieldError> {
    if is_blank(value) {
        return Err(FieldError::NameRequired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_input() {
        assert_eq!(trim_input("  Jo  "), "Jo");
        assert_eq!(trim_input("\t\nJo\r\n"), "Jo");
        assert_eq!(trim_input("\u{FEFF}Jo\u{00A0}"), "Jo");
        assert_eq!(trim_input("J o"), "J o");
        assert_eq!(trim_input("\u{2028}Jo\u{3000}\u{0B}"), "Jo");
    }

    #[test]
    fn test_trim_keeps_next_line() {
        // U+0085 is Unicode whitespace but not ECMAScript whitespace
        assert_eq!(trim_input("\u{85}"), "\u{85}");
        assert!(check_name("\u{85}").is_ok());
        assert!(!is_js_whitespace('\u{85}'));
        assert!(is_js_whitespace('\u{FEFF}'));
    }

    #[test]
    fn test_check_name() {
        assert!(check_name("Jo").is_ok());
        assert!(check_name("  Jo ").is_ok());
        assert_eq!(check_name(""), Err(FieldError::NameRequired));
        assert_eq!(check_name("   "), Err(FieldError::NameRequired));
        assert_eq!(check_name("\u{2003}\u{FEFF}"), Err(FieldError::NameRequired));
    }
}
