/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Parses a raw price string, ignoring surrounding whitespace.
///
/// A single `_` between two digits is accepted as a digit separator
/// (`"1_000"`); any other underscore makes the price invalid.
pub fn parse_price(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if !raw.contains('_') {
        return raw.parse::<f64>().ok();
    }

    let bytes = raw.as_bytes();
    let mut digits = String::with_capacity(raw.len());
    for (i, c) in raw.char_indices() {
        if c != '_' {
            digits.push(c);
            continue;
        }
        let after_digit = i > 0 && bytes[i - 1].is_ascii_digit();
        let before_digit = bytes.get(i + 1).is_some_and(|b| b.is_ascii_digit());
        if !(after_digit && before_digit) {
            return None;
        }
    }
    digits.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[10.0, 20.0]), 15.0);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("9.99"), Some(9.99));
        assert_eq!(parse_price(" 12 "), Some(12.0));
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("$9.99"), None);
        assert_eq!(parse_price("n/a"), None);
    }

    #[test]
    fn test_parse_price_digit_separators() {
        assert_eq!(parse_price("1_000"), Some(1000.0));
        assert_eq!(parse_price("1_299.99"), Some(1299.99));
        assert_eq!(parse_price("_100"), None);
        assert_eq!(parse_price("100_"), None);
        assert_eq!(parse_price("1__0"), None);
        assert_eq!(parse_price("1_.5"), None);
    }
}
