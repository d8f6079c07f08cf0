// 🔢 Numeric helpers shared by both calculators

use crate::error::InputError;

/// Round `value` to `places` decimal places.
///
/// Rounds the exact binary value with ties to even, so `0.25` becomes `0.2`
/// and `2.675` (stored just below the half) becomes `2.67`. Goes through the
/// correctly rounded decimal formatter; scaling by `10^places` first would
/// add its own error.
pub fn round_to(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", places as usize, value)
        .parse()
        .unwrap_or(value)
}

/// Reject NaN and infinities for the named input.
pub fn ensure_finite(field: &'static str, value: f64) -> Result<f64, InputError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InputError::NotFinite { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_one_place() {
        assert_eq!(round_to(500000.0 / 60000.0, 1), 8.3);
        assert_eq!(round_to(2.0, 1), 2.0);
        // Exact binary halves go to the even digit
        assert_eq!(round_to(0.25, 1), 0.2);
        assert_eq!(round_to(3.25, 1), 3.2);
        assert_eq!(round_to(0.75, 1), 0.8);
        // 1249.85 is stored as 1249.8499999...
        assert_eq!(round_to(199_976.0 / 160.0, 1), 1249.8);
    }

    #[test]
    fn test_round_to_two_places() {
        // 3.2 + 2.8 - 1.0 carries float noise before rounding
        let raw = 8.0 * 0.4 + 7.0 * 0.4 - 5.0 * 0.2;
        assert_eq!(round_to(raw, 2), 5.0);
        assert_eq!(round_to(6.994, 2), 6.99);
        assert_eq!(round_to(-1.234, 2), -1.23);
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(0.375, 2), 0.38);
        assert_eq!(round_to(2.675, 2), 2.67);
        assert_eq!(round_to(6.984999999999999, 2), 6.98);
    }

    #[test]
    fn test_round_to_leaves_non_finite_alone() {
        assert_eq!(round_to(f64::INFINITY, 1), f64::INFINITY);
        assert!(round_to(f64::NAN, 2).is_nan());
    }

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite("x", 1.5), Ok(1.5));
        assert!(ensure_finite("x", f64::NAN).is_err());
        assert_eq!(
            ensure_finite("x", f64::INFINITY),
            Err(InputError::NotFinite {
                field: "x",
                value: f64::INFINITY
            })
        );
    }
}
