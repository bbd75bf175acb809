//! Display helpers for derived numbers.

use super::FloatValue;

/// Rendering of a Δ vs coal that does not exist for the selected boundary
pub const NOT_APPLICABLE: &str = "not applicable";

/// Format `value` with a fixed number of decimals and thousands separators.
///
/// Non-finite values render as an em dash so a NaN never reaches a table.
pub fn format_number(value: FloatValue, digits: usize) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    let fixed = format!("{:.*}", digits, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let negative = value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if negative { "-" } else { "" };
    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Format an optional Δ vs coal; `None` is "not applicable", never zero.
pub fn format_delta(delta: Option<FloatValue>, digits: usize) -> String {
    match delta {
        Some(value) => format_number(value, digits),
        None => NOT_APPLICABLE.to_string(),
    }
}

/// Column heading for the coal comparison
pub fn coal_comparator_label() -> &'static str {
    "Δ vs coal baseline"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_number(1234567.0, 0), "1,234,567");
        assert_eq!(format_number(999.0, 0), "999");
        assert_eq!(format_number(1000.0, 1), "1,000.0");
    }

    #[test]
    fn keeps_sign_and_decimals() {
        assert_eq!(format_number(-1222.4938, 2), "-1,222.49");
        assert_eq!(format_number(-0.0001, 1), "0.0");
    }

    #[test]
    fn non_finite_renders_as_dash() {
        assert_eq!(format_number(FloatValue::NAN, 0), "—");
        assert_eq!(format_number(FloatValue::INFINITY, 2), "—");
    }

    #[test]
    fn missing_delta_is_not_zero() {
        assert_eq!(format_delta(None, 0), NOT_APPLICABLE);
        assert_eq!(format_delta(Some(-12.0), 0), "-12");
    }
}
