use serde_json::Value;

use data_normalization::parse_amount;

/// Share of `part` over `whole`, in percent.
///
/// A zero denominator yields `0.0` instead of dividing. Values above 100
/// are intentional: variance reports display a part exceeding its whole.
/// Rounding is left to the display layer.
pub fn percentage_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }
    let share = (part / whole) * 100.0;
    if share.is_finite() {
        share
    } else {
        0.0
    }
}

/// Raw-field variant: both operands go through the amount parser first.
pub fn percentage(part: &Value, whole: &Value) -> f64 {
    percentage_of(parse_amount(part), parse_amount(whole))
}

/// Relative growth from `lower` to `upper`, in percent.
pub fn variation_percentage(lower: &Value, upper: &Value) -> f64 {
    let lower = parse_amount(lower);
    let upper = parse_amount(upper);
    percentage_of(upper - lower, lower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_percentage_of_basic() {
        assert_eq!(percentage_of(25.0, 100.0), 25.0);
        assert_eq!(percentage_of(1.0, 3.0), 100.0 / 3.0);
    }

    #[test]
    fn test_zero_denominator_yields_zero() {
        assert_eq!(percentage_of(25.0, 0.0), 0.0);
        assert_eq!(percentage_of(-25.0, 0.0), 0.0);
        assert_eq!(percentage(&json!("qualquer"), &json!(null)), 0.0);
        assert_eq!(percentage(&json!(25), &json!("abc")), 0.0);
    }

    #[test]
    fn test_no_upper_clamp() {
        assert_eq!(percentage_of(150.0, 100.0), 150.0);
    }

    #[test]
    fn test_locale_formatted_operands() {
        assert_eq!(percentage(&json!("1.500,00"), &json!("3.000,00")), 50.0);
    }

    #[test]
    fn test_extreme_magnitudes_stay_finite() {
        assert!(percentage_of(1e308, 1e-300).is_finite());
        assert!(percentage_of(-1e308, 1e-300).is_finite());
    }

    #[test]
    fn test_variation_percentage() {
        assert_eq!(variation_percentage(&json!("10,00"), &json!("15,00")), 50.0);
        assert_eq!(variation_percentage(&json!(0), &json!(100)), 0.0);
        assert_eq!(variation_percentage(&json!(20), &json!(15)), -25.0);
    }
}
