//! person-identifier validation

use crate::error::{Argument, Error, Result};

/// Returns true if `c` separates words in a name.
///
/// This is Unicode `White_Space` without the non-breaking spaces (U+00A0, U+2007, U+202F) and
/// NEL (U+0085), plus the ASCII information separators U+001C..=U+001F. Non-breaking spaces
/// glue a name together, so a name made only of them still counts as a name.
pub fn is_separator(c: char) -> bool {
    match c {
        '\u{001C}'..='\u{001F}' => true,
        '\u{0085}' | '\u{00A0}' | '\u{2007}' | '\u{202F}' => false,
        _ => c.is_whitespace(),
    }
}

/// Returns true if `name` can't be used as a person-identifier: it's empty, or every character in
/// it is a [separator](is_separator).
pub fn is_blank(name: &str) -> bool {
    name.chars().all(is_separator)
}

/// Check that `name` is a valid person-identifier, reporting `argument` as the culprit if not.
///
/// # Example
///
/// ```
/// use friendships::{error::Argument, person};
///
/// assert_eq!(person::validate("Bartek", Argument::First), Ok("Bartek"));
/// assert!(person::validate(" \t ", Argument::Second).is_err());
/// ```
pub fn validate(name: &str, argument: Argument) -> Result<&str> {
    if is_blank(name) {
        tracing::warn!(%argument, "rejected blank person-identifier");
        return Err(Error::InvalidArgument { argument });
    }
    Ok(name)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" "));
        assert!(is_blank("      "));
        assert!(is_blank("\t\n\r"));
        // U+3000 IDEOGRAPHIC SPACE
        assert!(is_blank("\u{3000}"));
        // U+2028 LINE SEPARATOR, U+2029 PARAGRAPH SEPARATOR
        assert!(is_blank("\u{2028}\u{2029}"));
        // information separators
        for c in '\u{001C}'..='\u{001F}' {
            assert!(is_blank(&c.to_string()), "{:?}", c);
        }
        assert!(is_blank(" \u{001F}\t"));
        assert!(!is_blank("a"));
        assert!(!is_blank("  Mati  "));
    }

    #[test]
    fn test_non_breaking_spaces_are_not_blank() {
        for c in ['\u{00A0}', '\u{2007}', '\u{202F}', '\u{0085}'] {
            assert!(c.is_whitespace());
            assert!(!is_separator(c), "{:?}", c);
            assert!(!is_blank(&c.to_string()), "{:?}", c);
        }
        assert!(!is_blank(" \u{00A0} "));
        assert_eq!(validate("\u{00A0}", Argument::First), Ok("\u{00A0}"));
        assert_eq!(
            validate("\u{001C}", Argument::First),
            Err(Error::InvalidArgument {
                argument: Argument::First
            }),
        );
    }

    #[test]
    fn test_validate_reports_argument() {
        assert_eq!(
            validate("", Argument::Second),
            Err(Error::InvalidArgument {
                argument: Argument::Second
            }),
        );
        // Surrounding whitespace is kept as-is. Only all-blank names are rejected.
        assert_eq!(validate(" Kuba ", Argument::First), Ok(" Kuba "));
    }
}
