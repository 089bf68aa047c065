const UNITS: [&str; 7] = ["", "k", "M", "G", "T", "P", "E"];

/// Formats a count or rate with two decimals and a metric suffix, e.g.
/// `1234567.0` becomes `"1.23M"`.
#[must_use]
pub fn format_metric(value: f64) -> String {
    if !value.is_finite() {
        return format!("{:.2}", 0.0);
    }

    let mut scaled = value;
    let mut magnitude = 0;

    while scaled.abs() >= 1000.0 && magnitude < UNITS.len() - 1 {
        scaled /= 1000.0;
        magnitude += 1;
    }

    format!("{:.2}{}", scaled, UNITS[magnitude])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_values_have_no_suffix() {
        assert_eq!(format_metric(0.0), "0.00");
        assert_eq!(format_metric(0.5), "0.50");
        assert_eq!(format_metric(1.0), "1.00");
        assert_eq!(format_metric(999.0), "999.00");
    }

    #[test]
    fn test_thousands_and_millions() {
        assert_eq!(format_metric(1000.0), "1.00k");
        assert_eq!(format_metric(1234567.0), "1.23M");
        assert_eq!(format_metric(5.5e9), "5.50G");
    }

    #[test]
    fn test_huge_values_use_largest_unit() {
        assert_eq!(format_metric(2.0e21), "2000.00E");
    }

    #[test]
    fn test_non_finite_is_zero() {
        assert_eq!(format_metric(f64::NAN), "0.00");
        assert_eq!(format_metric(f64::INFINITY), "0.00");
    }
}
