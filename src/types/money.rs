//! Fixed-point decimal rules for monetary values
//!
//! All amounts enter and leave the engine as decimal text; binary floating
//! point never touches currency math. Stored values carry exactly
//! [`STORAGE_SCALE`] fractional digits. Computed interest is rendered at
//! [`DISPLAY_SCALE`] digits, rounded half away from zero at the final output
//! step only — intermediate arithmetic keeps full precision.

use crate::types::error::InvestmentError;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Fractional digits carried by stored balances and amounts
pub const STORAGE_SCALE: u32 = 4;

/// Fractional digits of rendered interest figures
pub const DISPLAY_SCALE: u32 = 2;

/// Upper bound on accepted amounts
///
/// Mirrors the `decimal(13,4)` shape of the stored columns: at most 9
/// integral digits in front of the 4 fractional ones.
fn max_amount() -> Decimal {
    dec!(1000000000)
}

/// Parse a non-negative monetary amount from decimal text
///
/// Accepts plain decimal notation with at most [`STORAGE_SCALE`] significant
/// fractional digits and a value below one billion. The returned value is
/// rescaled to exactly [`STORAGE_SCALE`] digits.
///
/// # Errors
///
/// Returns [`InvestmentError::InvalidAmount`] if the text is malformed
/// (including scientific notation), the value is negative, or either
/// precision bound is exceeded.
pub fn parse_amount(text: &str) -> Result<Decimal, InvestmentError> {
    let value = Decimal::from_str_exact(text.trim())
        .map_err(|e| InvestmentError::invalid_amount(text, &e.to_string()))?;

    if value.is_sign_negative() {
        return Err(InvestmentError::invalid_amount(
            text,
            "amount must not be negative",
        ));
    }
    if value.normalize().scale() > STORAGE_SCALE {
        return Err(InvestmentError::invalid_amount(
            text,
            "more than 4 fractional digits",
        ));
    }
    if value >= max_amount() {
        return Err(InvestmentError::invalid_amount(
            text,
            "more than 9 integral digits",
        ));
    }

    Ok(to_storage(value))
}

/// Rescale a value to the storage scale
///
/// Callers must have bounded the fractional digits first; within that bound
/// the rescale is lossless.
pub fn to_storage(value: Decimal) -> Decimal {
    let mut scaled = value;
    scaled.rescale(STORAGE_SCALE);
    scaled
}

/// Zero at storage scale (`0.0000`)
pub fn zero_balance() -> Decimal {
    Decimal::new(0, STORAGE_SCALE)
}

/// Render a computed interest figure at display scale
///
/// Rounds half away from zero, then pads to exactly [`DISPLAY_SCALE`]
/// fractional digits.
pub fn format_interest(value: Decimal) -> String {
    let mut rounded =
        value.round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(DISPLAY_SCALE);
    rounded.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::integral("10000", Decimal::new(100_000_000, 4))]
    #[case::fractional("1.5", Decimal::new(15_000, 4))]
    #[case::smallest_unit("0.0001", Decimal::new(1, 4))]
    #[case::surrounding_whitespace("  2.0000 ", Decimal::new(20_000, 4))]
    #[case::trailing_zeros_beyond_scale("1.50000", Decimal::new(15_000, 4))]
    #[case::zero("0", Decimal::new(0, 4))]
    fn parses_valid_amounts(#[case] text: &str, #[case] expected: Decimal) {
        let parsed = parse_amount(text).unwrap();
        assert_eq!(parsed, expected);
        assert_eq!(parsed.scale(), STORAGE_SCALE);
    }

    #[rstest]
    #[case::empty("")]
    #[case::whitespace("   ")]
    #[case::alphabetic("abc")]
    #[case::negative("-5")]
    #[case::negative_fraction("-0.0001")]
    #[case::excess_precision("1.23456")]
    #[case::scientific("1e3")]
    #[case::too_large("1000000000")]
    #[case::thousands_separator("1,000")]
    fn rejects_invalid_amounts(#[case] text: &str) {
        assert!(matches!(
            parse_amount(text),
            Err(InvestmentError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn storage_text_round_trips_exactly() {
        let parsed = parse_amount("10000.0000").unwrap();
        assert_eq!(parsed.to_string(), "10000.0000");
        assert_eq!(parsed, Decimal::from_str_exact("10000.0000").unwrap());
    }

    #[test]
    fn zero_balance_has_storage_scale() {
        assert_eq!(zero_balance().to_string(), "0.0000");
    }

    #[rstest]
    #[case::rounds_up(dec!(16.9863), "16.99")]
    #[case::rounds_down(dec!(24.3835616), "24.38")]
    #[case::midpoint_away_from_zero(dec!(2.345), "2.35")]
    #[case::negative_midpoint(dec!(-2.345), "-2.35")]
    #[case::pads_zero(dec!(0), "0.00")]
    #[case::pads_single_digit(dec!(1.5), "1.50")]
    fn formats_interest_at_two_digits(#[case] value: Decimal, #[case] expected: &str) {
        assert_eq!(format_interest(value), expected);
    }
}
