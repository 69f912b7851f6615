//! Display formatting for result values.

/// Fixed-point with `decimals` places; never renders negative zero.
///
/// Non-finite values (from overflowing inputs) render as zero.
pub fn fixed(value: f64, decimals: usize) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let scale = 10f64.powi(decimals as i32);
    let scaled = (value * scale).round() / scale;
    let mut rounded = if scaled.is_finite() { scaled } else { value };
    if rounded == 0.0 {
        rounded = 0.0;
    }
    format!("{:.*}", decimals, rounded)
}

/// Two decimals followed by a unit suffix, e.g. `"24.17 tons"`.
pub fn quantity(value: f64, unit: &str) -> String {
    format!("{} {}", fixed(value, 2), unit)
}

/// Whole count followed by a unit suffix, e.g. `"56 bags"`.
pub fn count(value: u64, unit: &str) -> String {
    format!("{} {}", group_thousands(&value.to_string()), unit)
}

/// US dollars with thousands separators, e.g. `"$2,416.67"`.
pub fn currency(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let text = fixed(value.abs(), 2);
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let sign = if value < 0.0 && text != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, group_thousands(whole), cents)
}

/// Percentage with up to two decimals, trailing zeros trimmed, e.g. `"8.33%"`.
pub fn percent(value: f64) -> String {
    let text = fixed(value, 2);
    let trimmed = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text.as_str()
    };
    format!("{}%", trimmed)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed() {
        assert_eq!(fixed(333.3333, 2), "333.33");
        assert_eq!(fixed(-0.001, 2), "0.00");
        assert_eq!(fixed(5.0, 2), "5.00");
        assert_eq!(fixed(1.0 / 3.0, 0), "0");
    }

    #[test]
    fn test_currency() {
        assert_eq!(currency(2416.666), "$2,416.67");
        assert_eq!(currency(0.0), "$0.00");
        assert_eq!(currency(999.999), "$1,000.00");
        assert_eq!(currency(1234567.0), "$1,234,567.00");
        assert_eq!(currency(-12.5), "-$12.50");
    }

    #[test]
    fn test_non_finite_renders_zero() {
        assert_eq!(fixed(f64::INFINITY, 2), "0.00");
        assert_eq!(fixed(f64::NAN, 0), "0");
        assert_eq!(quantity(f64::NEG_INFINITY, "tons"), "0.00 tons");
        assert_eq!(currency(f64::INFINITY), "$0.00");
        assert_eq!(percent(f64::NAN), "0%");
    }

    #[test]
    fn test_huge_finite_values_stay_numeric() {
        let text = fixed(1e300, 2);
        assert!(text.ends_with(".00"));
        assert!(!text.contains("inf"));
        assert!(currency(1e300).starts_with("$1"));
    }

    #[test]
    fn test_count_and_percent() {
        assert_eq!(count(1500, "blocks"), "1,500 blocks");
        assert_eq!(percent(8.3333), "8.33%");
        assert_eq!(percent(24.0), "24%");
        assert_eq!(percent(12.5), "12.5%");
    }
}
