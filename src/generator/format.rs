//! Display formatting for prices.

/// Display symbol for a currency code.
pub fn currency_symbol(currency: &str) -> &str {
    match currency {
        "HUF" => "Ft",
        other => other,
    }
}

/// Group the digits of a non-negative integer by thousands with spaces.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    grouped
}

/// Format an amount for display: rounded to a whole unit, thousands
/// separated by spaces, followed by the currency.
///
/// Display only; never feed the result back into a calculation.
pub fn format_price(amount: f64, currency: &str) -> String {
    let rounded = amount.round() as i64;
    let sign = if rounded < 0 { "-" } else { "" };
    let number = format!("{}{}", sign, group_thousands(rounded.unsigned_abs()));

    let symbol = currency_symbol(currency);
    if symbol.is_empty() {
        number
    } else {
        format!("{} {}", number, symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_groups_thousands() {
        insta::assert_snapshot!(format_price(1_234_567.0, "Ft"), @"1 234 567 Ft");
        insta::assert_snapshot!(format_price(999.0, "Ft"), @"999 Ft");
        insta::assert_snapshot!(format_price(1000.0, "EUR"), @"1 000 EUR");
    }

    #[test]
    fn test_format_price_rounds() {
        assert_eq!(format_price(1904.5, "Ft"), "1 905 Ft");
        assert_eq!(format_price(1904.49, "Ft"), "1 904 Ft");
        assert_eq!(format_price(0.2, "Ft"), "0 Ft");
    }

    #[test]
    fn test_format_price_currency_symbol() {
        assert_eq!(format_price(1500.0, "HUF"), "1 500 Ft");
        assert_eq!(format_price(1500.0, ""), "1 500");
    }

    #[test]
    fn test_format_price_negative() {
        assert_eq!(format_price(-12_345.0, "Ft"), "-12 345 Ft");
    }
}
