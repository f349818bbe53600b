//! Formatting helpers for parsed numeric input (en-US conventions).

/// Inserts `,` every three digits from the right of an unsigned digit string.
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

fn sign(value: f64) -> &'static str {
    if value < 0.0 { "-" } else { "" }
}

/// `1234567` -> `1,234,567`.
pub fn format_integer(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    format!("{}{}", sign(value), group_thousands(&digits))
}

/// `-1234.5` -> `-$1,234.50`.
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{}${}.{}", sign(value), group_thousands(whole), cents)
}

/// Shortest plain representation: `123.45`, `99.999`, `5`.
pub fn format_decimal(value: f64) -> String {
    value.to_string()
}

/// Renders a bound for error messages without a trailing `.0`.
pub fn format_bound(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn formats_integers_with_sign() {
        assert_eq!(format_integer(-50.0), "-50");
        assert_eq!(format_integer(1234.0), "1,234");
        assert_eq!(format_integer(0.0), "0");
    }

    #[test]
    fn formats_currency() {
        assert_eq!(format_currency(1234.56), "$1,234.56");
        assert_eq!(format_currency(-0.5), "-$0.50");
        assert_eq!(format_currency(1000000.0), "$1,000,000.00");
    }

    #[test]
    fn formats_decimals_and_bounds() {
        assert_eq!(format_decimal(123.45), "123.45");
        assert_eq!(format_decimal(5.0), "5");
        assert_eq!(format_bound(100.0), "100");
    }
}
