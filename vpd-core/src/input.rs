//! Field text parsing
//!
//! Hosts hand over whatever is in the temperature and humidity boxes. The
//! number is read from the longest numeric prefix, the way a browser reads a
//! float out of free text:
//!
//! | Text       | Value      |
//! |------------|------------|
//! | `"72"`     | `Some(72)` |
//! | `" 7.5e1"` | `Some(75)` |
//! | `"72abc"`  | `Some(72)` |
//! | `".5"`     | `Some(0.5)`|
//! | `""`       | `None`     |
//! | `"abc"`    | `None`     |
//! | `"-"`      | `None`     |
//!
//! `None` means the field is absent, which is not an error.

/// Parse the numeric prefix of a field's text
pub fn parse_field(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let end = numeric_prefix_len(text.as_bytes());
    if end == 0 {
        return None;
    }
    text[..end].parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Length of the longest prefix shaped like `[+-]digits[.digits][e[+-]digits]`
fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    let mut digits = i - int_start;

    if bytes.get(i) == Some(&b'.') {
        let frac_start = i + 1;
        let mut j = frac_start;
        while bytes.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            i = j;
        }
    }

    if digits == 0 {
        return 0;
    }

    // Exponent only counts when at least one digit follows
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_start = j;
        while bytes.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numbers() {
        assert_eq!(parse_field("72"), Some(72.0));
        assert_eq!(parse_field("-4"), Some(-4.0));
        assert_eq!(parse_field("+18.25"), Some(18.25));
        assert_eq!(parse_field("  55"), Some(55.0));
    }

    #[test]
    fn trailing_text_is_ignored() {
        assert_eq!(parse_field("72abc"), Some(72.0));
        assert_eq!(parse_field("65%"), Some(65.0));
        assert_eq!(parse_field("1.5.3"), Some(1.5));
        assert_eq!(parse_field("3e"), Some(3.0));
        assert_eq!(parse_field("3e+"), Some(3.0));
    }

    #[test]
    fn fraction_and_exponent_forms() {
        assert_eq!(parse_field(".5"), Some(0.5));
        assert_eq!(parse_field("5."), Some(5.0));
        assert_eq!(parse_field("7.5e1"), Some(75.0));
        assert_eq!(parse_field("2E-1"), Some(0.2));
    }

    #[test]
    fn absent_values() {
        assert_eq!(parse_field(""), None);
        assert_eq!(parse_field("   "), None);
        assert_eq!(parse_field("abc"), None);
        assert_eq!(parse_field("-"), None);
        assert_eq!(parse_field("."), None);
        assert_eq!(parse_field("e5"), None);
    }

    #[test]
    fn overflow_is_absent() {
        assert_eq!(parse_field("1e999"), None);
    }
}
