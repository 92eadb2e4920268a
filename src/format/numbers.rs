//! Locale-free number formatting: grouping, percentages and gas.

use bigdecimal::{BigDecimal, RoundingMode};
use tracing::{debug, warn};

use super::units::{format_unit, GDRIP_DECIMALS};
use super::{render_scaled, FormatInput};

/// Fractional digits kept by [`format_number`]; the rest is truncated.
const MAX_FRACTION_DIGITS: i64 = 4;

/// Groups integer digits with ASCII commas and keeps at most four
/// fractional digits (truncated, never rounded). Trailing fractional zeros are
/// dropped.
///
/// Absent, blank or non-numeric input yields `"0"`.
///
/// ```
/// use confluxscan_client::format::format_number;
///
/// assert_eq!(format_number(1234567.123456), "1,234,567.1234");
/// assert_eq!(format_number("1000"), "1,000");
/// assert_eq!(format_number("not a number"), "0");
/// ```
pub fn format_number(value: impl FormatInput) -> String {
    let input = value.as_input();
    if input.is_empty() {
        return "0".to_string();
    }
    let Some(decimal) = input.to_decimal() else {
        warn!(value = ?input, "invalid number value, returning 0");
        return "0".to_string();
    };

    let truncated = decimal.with_scale_round(MAX_FRACTION_DIGITS, RoundingMode::Down);
    let (digits, _) = truncated.as_bigint_and_exponent();
    let (negative, whole, frac) =
        render_scaled(&digits.to_string(), MAX_FRACTION_DIGITS as usize, true);

    let mut out = String::with_capacity(whole.len() + frac.len() + 8);
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(&whole));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(&frac);
    }
    out
}

/// Two fractional digits (half-up) followed by `%`. Invalid input yields `"0%"`.
pub fn format_percentage(value: impl FormatInput) -> String {
    match value.as_input().to_decimal() {
        Some(decimal) => format!("{}%", to_fixed(&decimal, 2)),
        None => "0%".to_string(),
    }
}

/// Re-expresses a gas amount given in drip at the 10^9 (Gdrip) scale.
///
/// Zero or absent input short-circuits to `"0"`. Strings must hold an integer;
/// floats are floored first.
///
/// ```
/// use confluxscan_client::format::format_gas;
///
/// assert_eq!(format_gas(1_000_000_000u64), "1");
/// assert_eq!(format_gas("21000000000000"), "21,000");
/// assert_eq!(format_gas(0), "0");
/// ```
pub fn format_gas(value: impl FormatInput) -> String {
    let input = value.as_input();
    if input.is_empty() || input.to_decimal().is_some_and(|d| d == BigDecimal::from(0)) {
        debug!("empty or zero gas value, returning 0");
        return "0".to_string();
    }

    let Some(digits) = input.to_integer_string() else {
        warn!(value = ?input, "gas value is not an integer, returning 0");
        return "0".to_string();
    };
    match format_unit(&digits, GDRIP_DECIMALS) {
        Ok(scaled) => format_number(scaled.as_str()),
        Err(err) => {
            warn!(value = ?input, error = %err, "error formatting gas value");
            "0".to_string()
        }
    }
}

/// [`format_gas`] with the ` Gdrip` unit appended.
pub fn format_gas_with_unit(value: impl FormatInput) -> String {
    format!("{} Gdrip", format_gas(value))
}

/// Fixed-point rendering with `places` fractional digits, rounded half-up.
pub(crate) fn to_fixed(value: &BigDecimal, places: i64) -> String {
    let rounded = value.with_scale_round(places, RoundingMode::HalfUp);
    let (digits, _) = rounded.as_bigint_and_exponent();
    let (negative, whole, frac) = render_scaled(&digits.to_string(), places as usize, false);
    let sign = if negative { "-" } else { "" };
    if frac.is_empty() {
        format!("{sign}{whole}")
    } else {
        format!("{sign}{whole}.{frac}")
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
