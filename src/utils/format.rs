//! Suffixed number formatting for currency and score displays.

/// Suffix table, largest magnitude first. Covers up to 1e63 (vigintillion).
const SUFFIXES: [(f64, &str); 21] = [
    (1e63, "V"),
    (1e60, "Nd"),
    (1e57, "Od"),
    (1e54, "Sd"),
    (1e51, "sd"),
    (1e48, "Qd"),
    (1e45, "qd"),
    (1e42, "Td"),
    (1e39, "D"),
    (1e36, "U"),
    (1e33, "d"),
    (1e30, "N"),
    (1e27, "O"),
    (1e24, "S"),
    (1e21, "s"),
    (1e18, "Q"),
    (1e15, "q"),
    (1e12, "T"),
    (1e9, "B"),
    (1e6, "M"),
    (1e3, "K"),
];

/// Formats a number with a magnitude suffix: `1234.0` -> `"1.23K"`,
/// `950.0` -> `"950"`, `950.5` -> `"950.5"`.
pub fn format_number(n: f64) -> String {
    if n < 0.0 {
        return format!("-{}", format_number(-n));
    }
    if !n.is_finite() {
        return n.to_string();
    }

    for (magnitude, suffix) in SUFFIXES {
        if n >= magnitude {
            return format!("{:.2}{}", n / magnitude, suffix);
        }
    }

    // Below 1000: two decimals, trailing zeros trimmed
    let formatted = format!("{:.2}", n);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_numbers_trim_trailing_zeros() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(7.0), "7");
        assert_eq!(format_number(7.5), "7.5");
        assert_eq!(format_number(7.25), "7.25");
        assert_eq!(format_number(999.0), "999");
    }

    #[test]
    fn test_suffixed_magnitudes() {
        assert_eq!(format_number(1_000.0), "1.00K");
        assert_eq!(format_number(1_234.0), "1.23K");
        assert_eq!(format_number(2_500_000.0), "2.50M");
        assert_eq!(format_number(3.2e9), "3.20B");
        assert_eq!(format_number(1e12), "1.00T");
        assert_eq!(format_number(1e63), "1.00V");
    }

    #[test]
    fn test_negative_numbers() {
        assert_eq!(format_number(-1_500.0), "-1.50K");
        assert_eq!(format_number(-2.5), "-2.5");
    }
}
