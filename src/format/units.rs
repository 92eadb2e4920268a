//! Base-unit scaling for CFX (drip) and token amounts.
//!
//! Amounts travel as decimal strings of arbitrary size. Scaling is done on the
//! digit string itself so that values past `u128` (or any `f64`) keep every
//! digit.

use bigdecimal::BigDecimal;
use tracing::{debug, warn};

use super::numbers::format_number;
use super::{parse_decimal, render_scaled, FormatInput};
use crate::error::FormatError;

/// 1 CFX = 10^18 drip.
pub const DRIP_PER_CFX: u128 = 1_000_000_000_000_000_000;

/// 1 Gdrip = 10^9 drip.
pub const DRIP_PER_GDRIP: u64 = 1_000_000_000;

pub const CFX_DECIMALS: u32 = 18;

pub const GDRIP_DECIMALS: u32 = 9;

/// Widest scale [`format_unit`] accepts.
pub const MAX_DECIMALS: u32 = 255;

// ---------------------------------------------------------------------------
// Exact scaling
// ---------------------------------------------------------------------------

/// Divides a non-negative integer string by `10^decimals` without losing digits.
///
/// Trailing fractional zeros are trimmed and whole results carry no decimal
/// point.
///
/// ```
/// use confluxscan_client::format::format_unit;
///
/// assert_eq!(format_unit("1000000000000000000", 18).unwrap(), "1");
/// assert_eq!(format_unit("1500000000", 9).unwrap(), "1.5");
/// assert!(format_unit("1.5", 18).is_err());
/// assert!(format_unit("1", 65_535).is_err());
/// ```
pub fn format_unit(raw: &str, decimals: u32) -> Result<String, FormatError> {
    if decimals > MAX_DECIMALS {
        return Err(FormatError::InvalidDecimals(decimals));
    }
    let value = parse_decimal(raw).ok_or_else(|| FormatError::InvalidAmount(raw.to_string()))?;
    if !value.is_integer() {
        return Err(FormatError::InvalidAmount(raw.to_string()));
    }
    if value < BigDecimal::from(0) {
        return Err(FormatError::NegativeAmount(raw.to_string()));
    }

    let (digits, _) = value.with_scale(0).as_bigint_and_exponent();
    let (_, whole, frac) = render_scaled(&digits.to_string(), decimals as usize, true);
    if frac.is_empty() {
        Ok(whole)
    } else {
        Ok(format!("{whole}.{frac}"))
    }
}

// ---------------------------------------------------------------------------
// Display amounts
// ---------------------------------------------------------------------------

/// Scales `amount` by `decimals`, then groups it like [`format_number`].
///
/// With `is_currency_unit` the result carries a ` CFX` suffix. Absent, blank
/// or unparseable amounts yield `"0"` (`"0 CFX"` in currency mode).
pub fn format_token_amount(
    amount: impl FormatInput,
    decimals: u32,
    is_currency_unit: bool,
) -> String {
    let input = amount.as_input();
    let with_unit = |number: String| {
        if is_currency_unit {
            format!("{number} CFX")
        } else {
            number
        }
    };

    if input.is_empty() {
        debug!("empty amount provided, returning 0");
        return with_unit("0".to_string());
    }
    let Some(digits) = input.to_integer_string() else {
        warn!(amount = ?input, decimals, "amount is not an integer, returning 0");
        return with_unit("0".to_string());
    };

    match format_unit(&digits, decimals) {
        Ok(scaled) => with_unit(format_number(scaled.as_str())),
        Err(err) => {
            warn!(amount = ?input, decimals, error = %err, "error formatting token amount");
            with_unit("0".to_string())
        }
    }
}

/// Formats a drip amount as CFX, e.g. `"1 CFX"`.
///
/// ```
/// use confluxscan_client::format::format_cfx;
///
/// assert_eq!(format_cfx("1000000000000000000"), "1 CFX");
/// assert_eq!(format_cfx(0), "0 CFX");
/// assert_eq!(format_cfx(None::<&str>), "0 CFX");
/// ```
pub fn format_cfx(value: impl FormatInput) -> String {
    format_token_amount(value, CFX_DECIMALS, true)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn one_cfx_trims_to_integer() {
        assert_eq!(format_unit("1000000000000000000", 18).unwrap(), "1");
        assert_eq!(format_unit(&DRIP_PER_CFX.to_string(), CFX_DECIMALS).unwrap(), "1");
        assert_eq!(format_unit(&DRIP_PER_GDRIP.to_string(), GDRIP_DECIMALS).unwrap(), "1");
    }

    #[test]
    fn small_amounts_keep_leading_zeros() {
        assert_eq!(format_unit("1", 18).unwrap(), "0.000000000000000001");
        assert_eq!(format_unit("500000000000000000", 18).unwrap(), "0.5");
        assert_eq!(format_unit("0", 18).unwrap(), "0");
        assert_eq!(format_unit("42", 0).unwrap(), "42");
    }

    #[test]
    fn values_beyond_u128() {
        // 2^256
        let raw = "115792089237316195423570985008687907853269984665640564039457584007913129639936";
        assert_eq!(
            format_unit(raw, 18).unwrap(),
            "115792089237316195423570985008687907853269984665640564039457.584007913129639936"
        );
    }

    #[test]
    fn rejects_non_integers() {
        assert_eq!(
            format_unit("1.5", 18),
            Err(FormatError::InvalidAmount("1.5".into()))
        );
        assert_eq!(
            format_unit("-1", 18),
            Err(FormatError::NegativeAmount("-1".into()))
        );
        assert!(format_unit("", 18).is_err());
        assert!(format_unit("0xff", 18).is_err());
        assert!(format_unit("1e2000000", 18).is_err());
    }

    #[test]
    fn decimals_above_cap_are_rejected() {
        assert_eq!(format_unit("1", 65_535), Err(FormatError::InvalidDecimals(65_535)));
        assert_eq!(format_unit("1", u32::MAX), Err(FormatError::InvalidDecimals(u32::MAX)));

        let at_cap = format_unit("1", MAX_DECIMALS).unwrap();
        assert_eq!(at_cap.len(), 2 + MAX_DECIMALS as usize);
        assert!(at_cap.starts_with("0.0") && at_cap.ends_with('1'));
    }

    #[test]
    fn oversized_inputs_degrade_to_sentinels() {
        assert_eq!(format_token_amount("1", 200_000_000, false), "0");
        assert_eq!(format_cfx("1e100000"), "0 CFX");
        assert_eq!(format_cfx(f64::MAX), "0 CFX");
    }

    #[test]
    fn token_amounts_truncate_for_display() {
        assert_eq!(format_token_amount("1000000000000000000", 18, false), "1");
        assert_eq!(format_token_amount("1234567890000000000000", 18, false), "1,234.5678");
        assert_eq!(format_token_amount("123456789", 6, false), "123.4567");
        assert_eq!(format_token_amount("1000000", 6, true), "1 CFX");
    }

    #[test]
    fn empty_amounts_use_sentinels() {
        assert_eq!(format_token_amount("", 18, false), "0");
        assert_eq!(format_token_amount("", 18, true), "0 CFX");
        assert_eq!(format_token_amount("garbage", 18, true), "0 CFX");
        assert_eq!(format_token_amount(None::<String>, 18, false), "0");
    }

    #[test]
    fn cfx_amounts() {
        assert_eq!(format_cfx("1000000000000000000"), "1 CFX");
        assert_eq!(format_cfx("500000000000000000"), "0.5 CFX");
        assert_eq!(format_cfx("1000000000000000000000000"), "1,000,000 CFX");
        assert_eq!(format_cfx(0), "0 CFX");
        assert_eq!(format_cfx(None::<&str>), "0 CFX");
    }

    proptest! {
        #[test]
        fn scaling_never_loses_digits(raw in "[1-9][0-9]{0,77}", decimals in 0u32..=18) {
            let scaled = format_unit(&raw, decimals).unwrap();
            let (whole, frac) = scaled.split_once('.').unwrap_or((scaled.as_str(), ""));
            prop_assert!(frac.len() <= decimals as usize);

            let rebuilt = format!("{whole}{frac:0<width$}", width = decimals as usize);
            prop_assert_eq!(rebuilt.trim_start_matches('0'), raw.as_str());
        }
    }
}
