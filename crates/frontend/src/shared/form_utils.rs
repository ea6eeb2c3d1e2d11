//! Helpers for reading raw form field values.

/// Parse a field the way browsers read an integer prefix.
///
/// Leading whitespace and one sign are accepted, then decimal digits up to the
/// first non-digit. No digits means `None`. Values outside `i64` saturate.
///
/// # Examples
///
/// ```
/// use frontend::shared::form_utils::parse_int_prefix;
///
/// assert_eq!(parse_int_prefix("12abc"), Some(12));
/// assert_eq!(parse_int_prefix("abc"), None);
/// ```
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value = digits[..end].bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_int_prefix("5"), Some(5));
        assert_eq!(parse_int_prefix("0"), Some(0));
        assert_eq!(parse_int_prefix("-3"), Some(-3));
        assert_eq!(parse_int_prefix("+8"), Some(8));
    }

    #[test]
    fn test_prefix_semantics() {
        assert_eq!(parse_int_prefix("12abc"), Some(12));
        assert_eq!(parse_int_prefix("  -3"), Some(-3));
        assert_eq!(parse_int_prefix("4.9"), Some(4));
    }

    #[test]
    fn test_unparseable() {
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix("-"), None);
        assert_eq!(parse_int_prefix(" - 3"), None);
    }
}
