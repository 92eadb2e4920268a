//! The `{raw, formatted}` response envelope and the per-endpoint field tables
//! that drive it.
//!
//! Formatting works on the JSON form of `data`: only fields named in a rule
//! table are replaced by display strings, everything else (including absent
//! and `null` fields) is carried over unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::dates::format_timestamp;
use super::numbers::{format_gas_with_unit, format_number, format_percentage};
use super::units::{format_cfx, format_token_amount, CFX_DECIMALS};

/// Decimals assumed when neither the item nor `addressInfo` provides them.
const DEFAULT_TOKEN_DECIMALS: u32 = 18;

/// A raw payload paired with its display form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope<R, F = Value> {
    pub raw: R,
    pub formatted: F,
}

/// Pairs `raw` with `formatted` as-is.
pub fn wrap_response<R, F>(raw: R, formatted: F) -> ResponseEnvelope<R, F> {
    ResponseEnvelope { raw, formatted }
}

/// How a single field is turned into a display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    /// Grouped number, e.g. `"1,000"`.
    Number,
    /// Drip at the Gdrip scale with unit, e.g. `"1 Gdrip"`.
    Gas,
    /// Drip as CFX without unit, e.g. `"0.5"`.
    Drip,
    /// Drip as CFX with unit, e.g. `"0.5 CFX"`.
    Cfx,
    /// Token base units scaled by the token's decimals.
    TokenAmount,
    /// `YYYY-MM-DD HH:MM:SS` in UTC.
    Timestamp,
    Percentage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: &'static str,
    pub format: FieldFormat,
}

impl FieldRule {
    pub const fn new(field: &'static str, format: FieldFormat) -> Self {
        Self { field, format }
    }
}

/// Field tables for the top-level object and for each element of its `list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatRules {
    pub top: &'static [FieldRule],
    pub item: &'static [FieldRule],
}

impl FormatRules {
    pub const fn new(top: &'static [FieldRule], item: &'static [FieldRule]) -> Self {
        Self { top, item }
    }

    /// Returns a formatted copy of `data`; `data` itself is left untouched.
    pub fn apply(&self, data: &Value) -> Value {
        let mut formatted = data.clone();
        let address_info = data.get("addressInfo");

        match &mut formatted {
            Value::Object(object) => {
                format_fields(object, self.top, address_info);
                if let Some(Value::Array(items)) = object.get_mut("list") {
                    format_items(items, self.item, address_info);
                }
            }
            Value::Array(items) => format_items(items, self.item, None),
            _ => {}
        }
        formatted
    }
}

fn format_items(items: &mut [Value], rules: &[FieldRule], address_info: Option<&Value>) {
    for item in items {
        if let Value::Object(object) = item {
            format_fields(object, rules, address_info);
        }
    }
}

fn format_fields(
    object: &mut Map<String, Value>,
    rules: &[FieldRule],
    address_info: Option<&Value>,
) {
    for rule in rules {
        let value = match object.get(rule.field) {
            None | Some(Value::Null) => continue,
            Some(value) => value,
        };
        let display = match rule.format {
            FieldFormat::Number => format_number(value),
            FieldFormat::Gas => format_gas_with_unit(value),
            FieldFormat::Drip => format_token_amount(value, CFX_DECIMALS, false),
            FieldFormat::Cfx => format_cfx(value),
            FieldFormat::TokenAmount => {
                format_token_amount(value, token_decimals(object, address_info), false)
            }
            FieldFormat::Timestamp => format_timestamp(value),
            FieldFormat::Percentage => format_percentage(value),
        };
        object.insert(rule.field.to_string(), Value::String(display));
    }
}

/// The item's own `decimals`, else `addressInfo[item.contract].token.decimals`, else 18.
fn token_decimals(item: &Map<String, Value>, address_info: Option<&Value>) -> u32 {
    let from_item = item.get("decimals").and_then(as_decimals);
    let from_info = || {
        let contract = item.get("contract")?.as_str()?;
        address_info?
            .get(contract)?
            .get("token")?
            .get("decimals")
            .and_then(as_decimals)
    };
    from_item.or_else(from_info).unwrap_or(DEFAULT_TOKEN_DECIMALS)
}

fn as_decimals(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|d| u32::try_from(d).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

// ── Rule tables ──────────────────────────────────────────────────

use FieldFormat::{Drip, Gas, Number, Timestamp, TokenAmount};

const fn rule(field: &'static str, format: FieldFormat) -> FieldRule {
    FieldRule::new(field, format)
}

/// Leaves the payload as it is.
pub const NONE: FormatRules = FormatRules::new(&[], &[]);

pub const TRANSACTIONS: FormatRules = FormatRules::new(
    &[],
    &[
        rule("timestamp", Timestamp),
        rule("gasPrice", Gas),
        rule("gasFee", Gas),
        rule("value", Drip),
    ],
);

pub const CFX_TRANSFERS: FormatRules =
    FormatRules::new(&[], &[rule("timestamp", Timestamp), rule("amount", Drip)]);

/// Fungible transfers whose amount scale comes from the token.
pub const TOKEN_TRANSFERS: FormatRules =
    FormatRules::new(&[], &[rule("timestamp", Timestamp), rule("amount", TokenAmount)]);

pub const NFT_TRANSFERS: FormatRules = FormatRules::new(&[], &[rule("timestamp", Timestamp)]);

pub const ACCOUNT_TOKENS: FormatRules = FormatRules::new(&[], &[rule("amount", TokenAmount)]);

pub const NFT_BALANCES: FormatRules =
    FormatRules::new(&[rule("total", Number)], &[rule("balance", Number)]);

pub const NFT_TOKENS: FormatRules = FormatRules::new(
    &[rule("total", Number)],
    &[rule("amount", Number), rule("mintTimestamp", Timestamp)],
);

/// Time series of counters (`/statistics/account/*`, `/statistics/tps`, holders, ...).
pub const STAT_LIST: FormatRules = FormatRules::new(
    &[rule("total", Number)],
    &[
        rule("statTime", Timestamp),
        rule("timestamp", Timestamp),
        rule("count", Number),
        rule("total", Number),
        rule("tps", Number),
        rule("holderCount", Number),
        rule("uniqueSenderCount", Number),
        rule("uniqueReceiverCount", Number),
        rule("uniqueParticipantCount", Number),
        rule("userCount", Number),
        rule("transferCount", Number),
    ],
);

/// CFX transfer statistics: counters plus a drip `amount`.
pub const TRANSFER_STATS: FormatRules = FormatRules::new(
    &[rule("total", Number)],
    &[
        rule("statTime", Timestamp),
        rule("transferCount", Number),
        rule("userCount", Number),
        rule("amount", Drip),
    ],
);

pub const TOP_GAS: FormatRules = FormatRules::new(
    &[rule("gasTotal", Gas), rule("maxTime", Timestamp)],
    &[rule("gas", Gas)],
);

/// Leaderboards ranked by CFX value.
pub const TOP_CFX: FormatRules = FormatRules::new(
    &[rule("maxTime", Timestamp), rule("valueTotal", Drip)],
    &[rule("value", Drip)],
);

/// Leaderboards ranked by a plain count.
pub const TOP_COUNT: FormatRules = FormatRules::new(
    &[rule("maxTime", Timestamp), rule("valueTotal", Number)],
    &[rule("value", Number), rule("transferCntr", Number)],
);

pub const TOP_MINER: FormatRules = FormatRules::new(
    &[rule("maxTime", Timestamp)],
    &[
        rule("blockCntr", Number),
        rule("hashRate", Number),
        rule("rewardSum", Drip),
        rule("txFeeSum", Drip),
    ],
);

pub const SUPPLY: FormatRules = FormatRules::new(
    &[
        rule("totalSupply", Drip),
        rule("totalCirculating", Drip),
        rule("totalStaking", Drip),
        rule("totalCollateral", Drip),
        rule("totalEspaceTokens", Drip),
        rule("totalIssued", Drip),
        rule("nullAddressBalance", Drip),
        rule("twoYearUnlockBalance", Drip),
        rule("fourYearUnlockBalance", Drip),
    ],
    &[],
);

/// Per-block fee and gas series.
pub const BLOCK_FEES: FormatRules = FormatRules::new(
    &[rule("total", Number)],
    &[
        rule("timestamp", Timestamp),
        rule("statTime", Timestamp),
        rule("baseFee", Gas),
        rule("avgPriorityFee", Gas),
        rule("gasUsed", Number),
        rule("count", Number),
    ],
);

pub const REWARDS: FormatRules = FormatRules::new(
    &[rule("total", Number)],
    &[
        rule("statTime", Timestamp),
        rule("timestamp", Timestamp),
        rule("reward", Drip),
        rule("totalReward", Drip),
    ],
);

pub const MINING: FormatRules = FormatRules::new(
    &[rule("total", Number)],
    &[
        rule("statTime", Timestamp),
        rule("hashRate", Number),
        rule("difficulty", Number),
        rule("blockTime", Number),
    ],
);
