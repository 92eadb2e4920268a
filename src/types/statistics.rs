use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{ListResponse, Scalar};
use crate::query::{IntervalType, QueryParams, SortOrder};

/// Range and paging for time-series statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsParams {
    pub min_timestamp: Option<i64>,
    pub max_timestamp: Option<i64>,
    pub sort: Option<SortOrder>,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub interval_type: Option<IntervalType>,
}

impl StatsParams {
    pub fn range(min_timestamp: i64, max_timestamp: i64) -> Self {
        Self {
            min_timestamp: Some(min_timestamp),
            max_timestamp: Some(max_timestamp),
            ..Self::default()
        }
    }

    pub fn interval(mut self, interval_type: IntervalType) -> Self {
        self.interval_type = Some(interval_type);
        self
    }

    pub fn page(mut self, skip: u32, limit: u32) -> Self {
        self.skip = Some(skip);
        self.limit = Some(limit);
        self
    }

    pub(crate) fn extend(self, query: QueryParams) -> QueryParams {
        query
            .opt("minTimestamp", self.min_timestamp)
            .opt("maxTimestamp", self.max_timestamp)
            .opt("sort", self.sort)
            .opt("skip", self.skip)
            .opt("limit", self.limit)
            .opt("intervalType", self.interval_type)
    }
}

/// One bucket of a time series. Endpoint-specific counters land in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stat_time: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<Scalar>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StatItem {
    /// Looks up a counter by its wire name, typed or not.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }
}

/// Leaderboard entry of the `/statistics/top/*` endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopStatsItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_cntr: Option<Scalar>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopStatsResponse {
    #[serde(default)]
    pub list: Vec<TopStatsItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_total: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_total: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_time: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<Scalar>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinerItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_cntr: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_rate: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reward_sum: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_fee_sum: Option<Scalar>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Circulation snapshot, every amount in drip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_supply: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_circulating: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_staking: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_collateral: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_espace_tokens: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_issued: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub null_address_balance: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub two_year_unlock_balance: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub four_year_unlock_balance: Option<Scalar>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub type StatList = ListResponse<StatItem>;
pub type TopMiners = ListResponse<MinerItem>;
