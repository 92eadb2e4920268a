//! Display formatting for explorer payloads.
//!
//! Every formatter here is a pure function. Inputs arrive as JSON numbers,
//! numeric strings, or nothing at all, so the formatters accept anything that
//! implements [`FormatInput`] and degrade to a fixed sentinel (`"0"`,
//! `"0 CFX"`, `"N/A"`) instead of failing.

mod dates;
mod numbers;
mod response;
mod summary;
mod units;

use std::borrow::Cow;
use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};
use tracing::debug;

use crate::types::Scalar;

pub use dates::{
    current_timestamp, days_before, format_timestamp, time_ago, twenty_four_hours_ago,
};
pub use numbers::{format_gas, format_gas_with_unit, format_number, format_percentage};
pub use response::{
    ACCOUNT_TOKENS, BLOCK_FEES, CFX_TRANSFERS, FieldFormat, FieldRule, FormatRules, MINING,
    NFT_BALANCES, NFT_TOKENS, NFT_TRANSFERS, NONE, REWARDS, ResponseEnvelope, STAT_LIST, SUPPLY,
    TOKEN_TRANSFERS, TOP_CFX, TOP_COUNT, TOP_GAS, TOP_MINER, TRANSACTIONS, TRANSFER_STATS,
    wrap_response,
};
pub use summary::{render_stat_item, render_token, render_top_stats};
pub use units::{
    format_cfx, format_token_amount, format_unit, CFX_DECIMALS, DRIP_PER_CFX, DRIP_PER_GDRIP,
    GDRIP_DECIMALS, MAX_DECIMALS,
};

/// A raw value as seen by the formatters.
#[derive(Debug, Clone, PartialEq)]
pub enum Input<'a> {
    Absent,
    Text(Cow<'a, str>),
    Float(f64),
}

/// Anything a formatter can read a numeric or timestamp value from.
pub trait FormatInput {
    fn as_input(&self) -> Input<'_>;
}

impl<T: FormatInput + ?Sized> FormatInput for &T {
    fn as_input(&self) -> Input<'_> {
        (**self).as_input()
    }
}

impl<T: FormatInput> FormatInput for Option<T> {
    fn as_input(&self) -> Input<'_> {
        match self {
            Some(value) => value.as_input(),
            None => Input::Absent,
        }
    }
}

impl FormatInput for str {
    fn as_input(&self) -> Input<'_> {
        Input::Text(Cow::Borrowed(self))
    }
}

impl FormatInput for String {
    fn as_input(&self) -> Input<'_> {
        Input::Text(Cow::Borrowed(self.as_str()))
    }
}

impl FormatInput for f64 {
    fn as_input(&self) -> Input<'_> {
        Input::Float(*self)
    }
}

macro_rules! integer_input {
    ($($ty:ty),*) => {
        $(
            impl FormatInput for $ty {
                fn as_input(&self) -> Input<'_> {
                    Input::Text(Cow::Owned(self.to_string()))
                }
            }
        )*
    };
}

integer_input!(i32, i64, u32, u64, u128);

impl FormatInput for serde_json::Number {
    fn as_input(&self) -> Input<'_> {
        if self.is_f64() {
            self.as_f64().map_or(Input::Absent, Input::Float)
        } else {
            Input::Text(Cow::Owned(self.to_string()))
        }
    }
}

impl FormatInput for serde_json::Value {
    fn as_input(&self) -> Input<'_> {
        match self {
            serde_json::Value::String(s) => Input::Text(Cow::Borrowed(s.as_str())),
            serde_json::Value::Number(n) => n.as_input(),
            _ => Input::Absent,
        }
    }
}

impl FormatInput for Scalar {
    fn as_input(&self) -> Input<'_> {
        match self {
            Scalar::Number(n) => n.as_input(),
            Scalar::Text(s) => Input::Text(Cow::Borrowed(s.as_str())),
        }
    }
}

impl Input<'_> {
    /// `true` for absent input and blank strings.
    pub(crate) fn is_empty(&self) -> bool {
        match self {
            Input::Absent => true,
            Input::Text(s) => s.trim().is_empty(),
            Input::Float(_) => false,
        }
    }

    /// Exact decimal value, or `None` when the input is absent or not numeric.
    pub(crate) fn to_decimal(&self) -> Option<BigDecimal> {
        match self {
            Input::Absent => None,
            Input::Text(s) => parse_decimal(s),
            Input::Float(f) if f.is_finite() => parse_decimal(&f.to_string()),
            Input::Float(_) => None,
        }
    }

    /// Integer digits for base-unit amounts: strings must hold an integer,
    /// floats are floored.
    pub(crate) fn to_integer_string(&self) -> Option<String> {
        let value = self.to_decimal()?;
        let value = match self {
            Input::Float(_) => value.with_scale_round(0, RoundingMode::Floor),
            _ if value.is_integer() => value.with_scale(0),
            _ => return None,
        };
        let (digits, _) = value.as_bigint_and_exponent();
        Some(digits.to_string())
    }
}

/// Widest integer part, and widest fractional part, a display value may carry.
const MAX_DIGITS: i64 = 256;

/// Parses a decimal string, rejecting values outside [`MAX_DIGITS`].
pub(crate) fn parse_decimal(text: &str) -> Option<BigDecimal> {
    let value = BigDecimal::from_str(text.trim()).ok()?;
    let (_, scale) = value.as_bigint_and_exponent();
    let integer_digits = value.digits() as i64 - scale;
    if scale > MAX_DIGITS || integer_digits > MAX_DIGITS {
        debug!(scale, integer_digits, "decimal out of display range");
        return None;
    }
    Some(value)
}

/// Renders a scaled integer (`digits * 10^-scale`) as a plain decimal string.
///
/// `digits` may carry a leading `-`. With `trim` the fractional part loses its
/// trailing zeros and an empty fraction drops the decimal point.
pub(crate) fn render_scaled(digits: &str, scale: usize, trim: bool) -> (bool, String, String) {
    let (negative, digits) = match digits.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, digits),
    };

    let padded;
    let digits = if digits.len() <= scale {
        padded = "0".repeat(scale + 1 - digits.len()) + digits;
        padded.as_str()
    } else {
        digits
    };

    let (whole, frac) = digits.split_at(digits.len() - scale);
    let frac = if trim { frac.trim_end_matches('0') } else { frac };
    let is_zero = whole.bytes().all(|b| b == b'0') && frac.bytes().all(|b| b == b'0');

    (negative && !is_zero, whole.to_string(), frac.to_string())
}
