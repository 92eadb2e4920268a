//! Multi-line plain-text renderings for terminals and logs.

use serde_json::Value;

use super::dates::format_timestamp;
use super::numbers::{format_gas, format_number, to_fixed};
use super::units::format_token_amount;
use super::FormatInput;
use crate::types::{AccountToken, StatItem, TopStatsResponse};

const UNKNOWN: &str = "Unknown";

/// Name, type, scaled amount, contract and (when quoted) USDT price of a token.
///
/// ```
/// use confluxscan_client::format::render_token;
/// use confluxscan_client::types::{AccountToken, Scalar};
///
/// let token = AccountToken {
///     name: Some("Fans Coin".into()),
///     symbol: Some("FC".into()),
///     decimals: Some(18),
///     amount: Some(Scalar::from("2500000000000000000")),
///     ..Default::default()
/// };
/// assert!(render_token(&token).contains("Amount: 2.5 FC"));
/// ```
pub fn render_token(token: &AccountToken) -> String {
    let symbol = token.symbol.as_deref();
    let amount = match &token.amount {
        Some(amount) => format_token_amount(amount, token.decimals.unwrap_or(18), false),
        None => "0".to_string(),
    };

    let mut lines = vec![
        format!(
            "Token: {} ({})",
            token.name.as_deref().unwrap_or(UNKNOWN),
            symbol.unwrap_or(UNKNOWN)
        ),
        format!("Type: {}", token.token_type.as_deref().unwrap_or(UNKNOWN)),
        format!("Amount: {amount} {}", symbol.unwrap_or_default())
            .trim_end()
            .to_string(),
        format!("Contract: {}", token.contract.as_deref().unwrap_or(UNKNOWN)),
    ];
    let price = token.price_in_usdt.as_deref().and_then(|p| p.as_input().to_decimal());
    if let Some(price) = price {
        lines.push(format!("Price: ${}", to_fixed(&price, 4)));
    }
    lines.join("\n")
}

/// `Time:` line followed by one `name: value` line per counter.
pub fn render_stat_item(item: &StatItem) -> String {
    let mut lines = vec![format!("Time: {}", format_timestamp(item.stat_time.as_ref()))];
    if let Some(timestamp) = &item.timestamp {
        lines.push(format!("timestamp: {}", format_timestamp(timestamp)));
    }
    if let Some(count) = &item.count {
        lines.push(format!("count: {}", format_number(count)));
    }
    for (name, value) in &item.extra {
        lines.push(format!("{name}: {}", display_value(value)));
    }
    lines.join("\n")
}

/// Totals, then one ranked block per leaderboard entry.
pub fn render_top_stats(data: &TopStatsResponse) -> String {
    if data.list.is_empty() {
        return "No data available".to_string();
    }

    let mut lines = Vec::new();
    if let Some(gas_total) = &data.gas_total {
        lines.push(format!("Total Gas Used: {}", format_gas(gas_total)));
    }
    if let Some(value_total) = &data.value_total {
        lines.push(format!("Total Value: {}", format_number(value_total)));
    }

    for (rank, item) in data.list.iter().enumerate() {
        lines.push(format!(
            "#{} {}",
            rank + 1,
            item.address.as_deref().unwrap_or(UNKNOWN)
        ));
        if let Some(gas) = &item.gas {
            lines.push(format!("Gas Used: {}", format_gas(gas)));
        }
        if let Some(value) = &item.value {
            lines.push(format!("Value: {}", format_number(value)));
        }
        if let Some(transfers) = &item.transfer_cntr {
            lines.push(format!("Transfers: {}", format_number(transfers)));
        }
    }
    lines.join("\n")
}

/// Numbers are grouped; anything else is shown verbatim.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) if s.as_input().to_decimal().is_none() => s.clone(),
        Value::Number(_) | Value::String(_) => format_number(value),
        other => other.to_string(),
    }
}
