use unicode_width::UnicodeWidthStr;

use crate::feed::Stat;

/// Placeholder shown for any stat that is absent, empty, or non-numeric.
pub const STAT_PLACEHOLDER: &str = "-";

/// Normalize a raw stat scalar into a fixed-precision display string.
///
/// * Absent or empty input yields [`STAT_PLACEHOLDER`].
/// * With `decimals > 0` the value is coerced to a number and rendered
///   fixed-point; a failed coercion yields the placeholder.
/// * With `decimals == 0` the value keeps its natural string form, which
///   preserves pre-formatted season averages like `.287`.
pub fn format_stat(value: Option<&Stat>, decimals: usize) -> String {
    let Some(stat) = value else {
        return STAT_PLACEHOLDER.to_string();
    };
    if let Stat::Text(s) = stat {
        if s.is_empty() {
            return STAT_PLACEHOLDER.to_string();
        }
    }
    if decimals > 0 {
        return match stat.as_f64() {
            Some(n) => format!("{:.*}", decimals, n),
            None => STAT_PLACEHOLDER.to_string(),
        };
    }
    match stat {
        Stat::Text(s) => s.clone(),
        Stat::Number(n) => format_number(*n),
    }
}

/// Natural display form of a number: integral values drop the fraction.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// Fit a display name into `width` columns: truncate with a `..` tail if it
/// overflows, pad with spaces if it falls short. Width is measured in
/// terminal columns, not chars.
pub fn fit_name(name: &str, width: usize) -> String {
    let mut fitted = if name.width() > width {
        let target = width.saturating_sub(2);
        let mut out = String::new();
        for c in name.chars() {
            if out.width() + unicode_width::UnicodeWidthChar::width(c).unwrap_or(0) > target {
                break;
            }
            out.push(c);
        }
        out.push_str("..");
        out
    } else {
        name.to_string()
    };
    while fitted.width() < width {
        fitted.push(' ');
    }
    fitted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_stat_missing_is_placeholder() {
        assert_eq!(format_stat(None, 0), "-");
        assert_eq!(format_stat(None, 2), "-");
        assert_eq!(format_stat(None, 3), "-");
    }

    #[test]
    fn test_format_stat_empty_string_is_placeholder() {
        let empty = Stat::from("");
        assert_eq!(format_stat(Some(&empty), 0), "-");
        assert_eq!(format_stat(Some(&empty), 2), "-");
    }

    #[test]
    fn test_format_stat_fixed_point() {
        assert_eq!(format_stat(Some(&Stat::Number(3.126)), 2), "3.13");
        assert_eq!(format_stat(Some(&Stat::from("3.1")), 2), "3.10");
        assert_eq!(format_stat(Some(&Stat::from(".287")), 3), "0.287");
        assert_eq!(format_stat(Some(&Stat::Number(10.0)), 1), "10.0");
    }

    #[test]
    fn test_format_stat_non_numeric_with_decimals_is_placeholder() {
        assert_eq!(format_stat(Some(&Stat::from("n/a")), 2), "-");
        assert_eq!(format_stat(Some(&Stat::from("--")), 1), "-");
    }

    #[test]
    fn test_format_stat_zero_decimals_keeps_natural_form() {
        // Pre-formatted season averages pass through untouched.
        assert_eq!(format_stat(Some(&Stat::from(".287")), 0), ".287");
        assert_eq!(format_stat(Some(&Stat::Number(5.0)), 0), "5");
        assert_eq!(format_stat(Some(&Stat::Number(5.5)), 0), "5.5");
        assert_eq!(format_stat(Some(&Stat::Number(0.0)), 0), "0");
    }

    #[test]
    fn test_format_stat_round_trips_numeric_value() {
        let formatted = format_stat(Some(&Stat::from("1.049")), 2);
        assert_eq!(formatted.split('.').nth(1).unwrap().len(), 2);
        let back: f64 = formatted.parse().unwrap();
        assert!((back - 1.049).abs() < 0.01);
    }

    #[test]
    fn test_fit_name_pads_short_names() {
        assert_eq!(fit_name("Mookie Betts", 20), "Mookie Betts        ");
        assert_eq!(fit_name("Mookie Betts", 20).width(), 20);
    }

    #[test]
    fn test_fit_name_truncates_long_names() {
        let fitted = fit_name("Jacob Theodore Walter deGrom", 20);
        assert_eq!(fitted.width(), 20);
        assert!(fitted.trim_end().ends_with(".."));
    }

    #[test]
    fn test_fit_name_exact_width_untouched() {
        let name = "12345678901234567890";
        assert_eq!(fit_name(name, 20), name);
    }
}
