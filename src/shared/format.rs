//! Number formatting for prices and ratings
//!
//! Mirrors the browser's default en-US `toLocaleString()` output:
//! thousands grouped with `,`, at most three fraction digits rounded half
//! away from zero on the shortest decimal form, trailing zeros dropped.

const MAX_FRACTION_DIGITS: usize = 3;

/// Format a number the way an en-US locale displays it
pub fn format_locale_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // Display for f64 is the shortest round-trip decimal, never exponent form
    let shortest = value.abs().to_string();
    let (integer, fraction) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));
    let (integer, fraction) = round_fraction(integer, fraction);
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::with_capacity(integer.len() + integer.len() / 3 + fraction.len() + 2);
    if value < 0.0 && (integer != "0" || !fraction.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_thousands(&integer));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Price label as shown on a card, e.g. `$ 1,989`
pub fn format_price(price: f64) -> String {
    format!("$ {}", format_locale_number(price))
}

/// Cut the fraction to MAX_FRACTION_DIGITS, ties rounding up, carrying into the integer part
fn round_fraction(integer: &str, fraction: &str) -> (String, String) {
    if fraction.len() <= MAX_FRACTION_DIGITS {
        return (integer.to_string(), fraction.to_string());
    }

    let mut digits: Vec<u8> = integer
        .bytes()
        .chain(fraction.bytes().take(MAX_FRACTION_DIGITS))
        .collect();

    if fraction.as_bytes()[MAX_FRACTION_DIGITS] >= b'5' {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, b'1');
                break;
            }
            i -= 1;
            if digits[i] == b'9' {
                digits[i] = b'0';
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - MAX_FRACTION_DIGITS;
    let integer = digits[..split].iter().map(|d| *d as char).collect();
    let fraction = digits[split..].iter().map(|d| *d as char).collect();
    (integer, fraction)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::original_price;

    #[test]
    fn test_groups_thousands() {
        assert_eq!(format_locale_number(1989.0), "1,989");
        assert_eq!(format_locale_number(1234567.0), "1,234,567");
        assert_eq!(format_locale_number(999.0), "999");
        assert_eq!(format_locale_number(0.0), "0");
    }

    #[test]
    fn test_trims_fraction() {
        assert_eq!(format_locale_number(4.5), "4.5");
        assert_eq!(format_locale_number(1989.0 * 1.1), "2,187.9");
        assert_eq!(format_locale_number(1.23456), "1.235");
        assert_eq!(format_locale_number(1.0004), "1");
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(format_locale_number(0.0625), "0.063");
        assert_eq!(format_locale_number(1.0005), "1.001");
        assert_eq!(format_locale_number(1.2345), "1.235");
        assert_eq!(format_locale_number(2.0625), "2.063");
        assert_eq!(format_locale_number(19.995 * 1.1), "21.995");
    }

    #[test]
    fn test_rounding_carries_into_integer() {
        assert_eq!(format_locale_number(0.9995), "1");
        assert_eq!(format_locale_number(999.9996), "1,000");
        assert_eq!(format_locale_number(-0.9995), "-1");
    }

    #[test]
    fn test_negative_numbers() {
        assert_eq!(format_locale_number(-1500.25), "-1,500.25");
        assert_eq!(format_locale_number(-0.0001), "0");
    }

    #[test]
    fn test_original_prices_of_fixture() {
        assert_eq!(format_price(original_price(1989.0)), "$ 2,187.9");
        assert_eq!(format_price(original_price(2499.0)), "$ 2,748.9");
        assert_eq!(format_price(original_price(1699.0)), "$ 1,868.9");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(2499.0), "$ 2,499");
    }
}
