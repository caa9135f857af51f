//! Number formatting for the dashboard

/// Whole-unit money with thousands separators, e.g. `₦1,234,567`
pub fn format_money(value: f64, currency: &str) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if rounded < 0 { "-" } else { "" };
    format!("{sign}{currency}{grouped}")
}

/// Format percentage
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.prec$}%", value, prec = decimals)
}

/// Signed change, e.g. `+12.5%`; `n/a` when the sheet sent none
pub fn format_delta(delta: Option<f64>) -> String {
    match delta {
        Some(d) if d > 0.0 => format!("+{}", format_percent(d, 1)),
        Some(d) => format_percent(d, 1),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0, "₦"), "₦0");
        assert_eq!(format_money(999.4, "₦"), "₦999");
        assert_eq!(format_money(1000.0, "₦"), "₦1,000");
        assert_eq!(format_money(1234567.0, "$"), "$1,234,567");
        assert_eq!(format_money(-45000.0, "₦"), "-₦45,000");
    }

    #[test]
    fn test_format_delta() {
        assert_eq!(format_delta(Some(12.5)), "+12.5%");
        assert_eq!(format_delta(Some(-3.0)), "-3.0%");
        assert_eq!(format_delta(Some(0.0)), "0.0%");
        assert_eq!(format_delta(None), "n/a");
    }
}
