use serde::de::DeserializeOwned;
use tracing::debug;

use crate::client::{Result, ScanClient};
use crate::format::{
    BLOCK_FEES, FormatRules, MINING, REWARDS, ResponseEnvelope, STAT_LIST, SUPPLY, TOP_CFX,
    TOP_COUNT, TOP_GAS, TOP_MINER, TRANSFER_STATS,
};
use crate::query::{QueryParams, StatsSpan};
use crate::types::{StatList, StatsParams, SupplyResponse, TopMiners, TopStatsResponse};
use crate::validation::validate_timestamp_range;

/// Network-wide time series over a [`StatsParams`] range.
macro_rules! series_endpoints {
    ($($(#[$doc:meta])* $name:ident, $formatted:ident => $endpoint:literal, $rules:ident;)*) => {
        $(
            $(#[$doc])*
            pub async fn $name(&self, params: StatsParams) -> Result<StatList> {
                self.series($endpoint, QueryParams::new(), params).await
            }

            #[doc = concat!("[`", stringify!($name), "`](Self::", stringify!($name), ") with readable counters and dates.")]
            pub async fn $formatted(
                &self,
                params: StatsParams,
            ) -> Result<ResponseEnvelope<StatList>> {
                self.series_formatted($endpoint, QueryParams::new(), params, &$rules)
                    .await
            }
        )*
    };
}

/// Per-token time series; the contract is validated first.
macro_rules! token_series_endpoints {
    ($($(#[$doc:meta])* $name:ident, $formatted:ident => $endpoint:literal;)*) => {
        $(
            $(#[$doc])*
            pub async fn $name(&self, contract: &str, params: StatsParams) -> Result<StatList> {
                let query = self.contract_query(contract)?;
                self.series($endpoint, query, params).await
            }

            #[doc = concat!("[`", stringify!($name), "`](Self::", stringify!($name), ") with readable counters and dates.")]
            pub async fn $formatted(
                &self,
                contract: &str,
                params: StatsParams,
            ) -> Result<ResponseEnvelope<StatList>> {
                let query = self.contract_query(contract)?;
                self.series_formatted($endpoint, query, params, &STAT_LIST)
                    .await
            }
        )*
    };
}

/// Leaderboards over a [`StatsSpan`] window.
macro_rules! top_endpoints {
    ($($(#[$doc:meta])* $name:ident, $formatted:ident => $endpoint:literal, $rules:ident;)*) => {
        $(
            $(#[$doc])*
            pub async fn $name(&self, span: StatsSpan) -> Result<TopStatsResponse> {
                self.top($endpoint, span).await
            }

            #[doc = concat!("[`", stringify!($name), "`](Self::", stringify!($name), ") with readable totals.")]
            pub async fn $formatted(
                &self,
                span: StatsSpan,
            ) -> Result<ResponseEnvelope<TopStatsResponse>> {
                self.top_formatted($endpoint, span, &$rules).await
            }
        )*
    };
}

/// `/statistics/*` series, leaderboards and snapshots.
#[derive(Debug, Clone, Copy)]
pub struct StatisticsApi<'a> {
    client: &'a ScanClient,
}

impl<'a> StatisticsApi<'a> {
    pub(crate) fn new(client: &'a ScanClient) -> Self {
        Self { client }
    }

    // ── Snapshots ────────────────────────────────────────────────

    /// Current CFX circulation, every figure in drip.
    pub async fn supply(&self) -> Result<SupplyResponse> {
        debug!("getting supply");
        self.client
            .fetch("/statistics/supply", QueryParams::new())
            .await
    }

    /// Supply figures scaled from drip, e.g. `"1,234.5"`.
    pub async fn supply_formatted(&self) -> Result<ResponseEnvelope<SupplyResponse>> {
        debug!("getting formatted supply");
        self.client
            .fetch_formatted("/statistics/supply", QueryParams::new(), &SUPPLY)
            .await
    }

    // ── Leaderboards ─────────────────────────────────────────────

    pub async fn top_miners(&self, span: StatsSpan) -> Result<TopMiners> {
        self.top("/statistics/top/miner", span).await
    }

    pub async fn top_miners_formatted(
        &self,
        span: StatsSpan,
    ) -> Result<ResponseEnvelope<TopMiners>> {
        self.top_formatted("/statistics/top/miner", span, &TOP_MINER)
            .await
    }

    top_endpoints! {
        /// Accounts that burned the most gas.
        top_gas_used, top_gas_used_formatted => "/statistics/top/gas/used", TOP_GAS;
        top_cfx_senders, top_cfx_senders_formatted => "/statistics/top/cfx/sender", TOP_CFX;
        top_cfx_receivers, top_cfx_receivers_formatted => "/statistics/top/cfx/receiver", TOP_CFX;
        top_transaction_senders, top_transaction_senders_formatted
            => "/statistics/top/transaction/sender", TOP_COUNT;
        top_transaction_receivers, top_transaction_receivers_formatted
            => "/statistics/top/transaction/receiver", TOP_COUNT;
        /// Tokens ranked by transfer count.
        top_token_transfers, top_token_transfers_formatted
            => "/statistics/top/token/transfer", TOP_COUNT;
        top_token_senders, top_token_senders_formatted
            => "/statistics/top/token/sender", TOP_COUNT;
        top_token_receivers, top_token_receivers_formatted
            => "/statistics/top/token/receiver", TOP_COUNT;
        top_token_participants, top_token_participants_formatted
            => "/statistics/top/token/participant", TOP_COUNT;
    }

    // ── Time series ──────────────────────────────────────────────

    series_endpoints! {
        /// Hash rate, difficulty and block time.
        mining, mining_formatted => "/statistics/mining", MINING;
        account_growth, account_growth_formatted => "/statistics/account/growth", STAT_LIST;
        active_accounts, active_accounts_formatted => "/statistics/account/active", STAT_LIST;
        active_accounts_overall, active_accounts_overall_formatted
            => "/statistics/account/active/overall", STAT_LIST;
        transactions, transactions_formatted => "/statistics/transaction", STAT_LIST;
        /// Daily CFX transfer counts and volume.
        cfx_transfers, cfx_transfers_formatted => "/statistics/cfx/transfer", TRANSFER_STATS;
        token_transfers, token_transfers_formatted => "/statistics/token/transfer", STAT_LIST;
        tps, tps_formatted => "/statistics/tps", STAT_LIST;
        /// Contracts created per interval.
        contracts, contracts_formatted => "/statistics/contract", STAT_LIST;
        cfx_holders, cfx_holders_formatted => "/statistics/cfx/holder", STAT_LIST;
        block_base_fee, block_base_fee_formatted => "/statistics/block/base-fee", BLOCK_FEES;
        block_avg_priority_fee, block_avg_priority_fee_formatted
            => "/statistics/block/avg-priority-fee", BLOCK_FEES;
        block_gas_used, block_gas_used_formatted => "/statistics/block/gas-used", BLOCK_FEES;
        /// Legacy, CIP-1559 and CIP-2930 transaction counts per block.
        block_txs_by_type, block_txs_by_type_formatted
            => "/statistics/block/txs-by-type", BLOCK_FEES;
        pow_rewards, pow_rewards_formatted => "/statistics/reward/pow", REWARDS;
        pos_rewards, pos_rewards_formatted => "/statistics/reward/pos", REWARDS;
    }

    token_series_endpoints! {
        /// Holder count of one token over time.
        token_holders, token_holders_formatted => "/statistics/token/holder";
        token_unique_senders, token_unique_senders_formatted
            => "/statistics/token/unique/sender";
        token_unique_receivers, token_unique_receivers_formatted
            => "/statistics/token/unique/receiver";
        token_unique_participants, token_unique_participants_formatted
            => "/statistics/token/unique/participant";
    }

    // ── Helpers ──────────────────────────────────────────────────

    fn contract_query(&self, contract: &str) -> Result<QueryParams> {
        self.client.check_address(contract)?;
        Ok(QueryParams::new().set("contract", contract))
    }

    async fn series<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: QueryParams,
        params: StatsParams,
    ) -> Result<T> {
        let query = series_query(query, params)?;
        debug!(endpoint, "getting statistics");
        self.client.fetch(endpoint, query).await
    }

    async fn series_formatted<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: QueryParams,
        params: StatsParams,
        rules: &FormatRules,
    ) -> Result<ResponseEnvelope<T>> {
        let query = series_query(query, params)?;
        debug!(endpoint, "getting formatted statistics");
        self.client.fetch_formatted(endpoint, query, rules).await
    }

    async fn top<T: DeserializeOwned>(&self, endpoint: &str, span: StatsSpan) -> Result<T> {
        debug!(endpoint, %span, "getting leaderboard");
        self.client.fetch(endpoint, span_query(span)).await
    }

    async fn top_formatted<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        span: StatsSpan,
        rules: &FormatRules,
    ) -> Result<ResponseEnvelope<T>> {
        debug!(endpoint, %span, "getting formatted leaderboard");
        self.client
            .fetch_formatted(endpoint, span_query(span), rules)
            .await
    }
}

fn series_query(query: QueryParams, params: StatsParams) -> Result<QueryParams> {
    validate_timestamp_range(params.min_timestamp, params.max_timestamp)?;
    Ok(params.extend(query))
}

fn span_query(span: StatsSpan) -> QueryParams {
    QueryParams::new().set("spanType", span)
}
