use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{ListResponse, Scalar};
use crate::query::{QueryParams, SortOrder, TokenTypes, TransferType};

/// Filters shared by the account listing endpoints.
///
/// Unset fields are left out of the query string, so one struct serves every
/// `/account/*` listing; endpoints ignore filters they do not understand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountListParams {
    pub account: String,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub contract: Option<String>,
    pub token_id: Option<String>,
    pub start_block: Option<u64>,
    pub end_block: Option<u64>,
    pub min_timestamp: Option<i64>,
    pub max_timestamp: Option<i64>,
    pub sort: Option<SortOrder>,
    /// Only used by `/account/transfers`.
    pub cursor: Option<String>,
    /// Only used by `/account/transfers`.
    pub transfer_type: Option<TransferType>,
}

impl AccountListParams {
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            ..Self::default()
        }
    }

    pub fn page(mut self, skip: u32, limit: u32) -> Self {
        self.skip = Some(skip);
        self.limit = Some(limit);
        self
    }

    pub fn time_range(mut self, min_timestamp: i64, max_timestamp: i64) -> Self {
        self.min_timestamp = Some(min_timestamp);
        self.max_timestamp = Some(max_timestamp);
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    pub(crate) fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .set("account", &self.account)
            .opt("skip", self.skip)
            .opt("limit", self.limit)
            .opt("from", self.from.as_deref())
            .opt("to", self.to.as_deref())
            .opt("contract", self.contract.as_deref())
            .opt("tokenId", self.token_id.as_deref())
            .opt("startBlock", self.start_block)
            .opt("endBlock", self.end_block)
            .opt("minTimestamp", self.min_timestamp)
            .opt("maxTimestamp", self.max_timestamp)
            .opt("sort", self.sort)
            .opt("cursor", self.cursor.as_deref())
            .opt("transferType", self.transfer_type)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApprovalParams {
    pub account: String,
    pub token_type: Option<TokenTypes>,
    pub by_token_id: Option<bool>,
}

impl ApprovalParams {
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            ..Self::default()
        }
    }

    pub(crate) fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .set("account", &self.account)
            .opt("tokenType", self.token_type.as_ref())
            .opt("byTokenId", self.by_token_id)
    }
}

// ── Records ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountTransaction {
    pub block_number: Option<u64>,
    pub transaction_index: Option<u64>,
    pub nonce: Option<Scalar>,
    pub hash: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    /// CFX value in drip.
    pub value: Option<Scalar>,
    pub gas_price: Option<Scalar>,
    pub gas_fee: Option<Scalar>,
    pub timestamp: Option<Scalar>,
    pub status: Option<i64>,
    pub contract_created: Option<String>,
    pub method: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfxTransfer {
    pub block_number: Option<u64>,
    pub transaction_hash: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub amount: Option<Scalar>,
    pub timestamp: Option<Scalar>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A CRC20, CRC721, CRC1155 or CRC3525 transfer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenTransfer {
    pub block_number: Option<u64>,
    pub transaction_hash: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub contract: Option<String>,
    pub amount: Option<Scalar>,
    pub token_id: Option<String>,
    pub from_token_id: Option<String>,
    pub to_token_id: Option<String>,
    pub slot: Option<String>,
    pub event: Option<String>,
    pub timestamp: Option<Scalar>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One entry of the mixed `/account/transfers` feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountTransfer {
    pub epoch_number: Option<u64>,
    pub transaction_hash: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub contract: Option<String>,
    pub amount: Option<Scalar>,
    pub token_id: Option<String>,
    pub timestamp: Option<Scalar>,
    pub cursor: Option<String>,
    #[serde(rename = "type")]
    pub transfer_type: Option<String>,
    pub nonce: Option<Scalar>,
    pub method: Option<String>,
    pub method_id: Option<String>,
    pub status: Option<i64>,
    pub gas_fee: Option<Scalar>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Approval {
    /// Allowance for CRC20, the `ApprovalForAll` flag or approved token id otherwise.
    pub value: Option<String>,
    pub approval_type: Option<String>,
    pub balance: Option<String>,
    pub contract: Option<String>,
    pub spender: Option<String>,
    pub spender_name: Option<String>,
    pub token_info: Option<ApprovalToken>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalToken {
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub base32: Option<String>,
    pub icon_url: Option<String>,
    #[serde(rename = "type")]
    pub token_type: Option<String>,
    pub decimals: Option<u32>,
}

/// A token held by an account (`/account/tokens`) or looked up by contract
/// (`/token/tokeninfos`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountToken {
    pub contract: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub decimals: Option<u32>,
    #[serde(rename = "type")]
    pub token_type: Option<String>,
    pub icon_url: Option<String>,
    pub quote_url: Option<String>,
    #[serde(rename = "priceInUSDT")]
    pub price_in_usdt: Option<String>,
    pub amount: Option<Scalar>,
    /// Set by `/token/tokeninfos` for contracts it could not resolve.
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub type AccountTransactions = ListResponse<AccountTransaction>;
pub type CfxTransfers = ListResponse<CfxTransfer>;
pub type TokenTransfers = ListResponse<TokenTransfer>;
pub type AccountTransfers = ListResponse<AccountTransfer>;
pub type Approvals = ListResponse<Approval>;
pub type AccountTokens = ListResponse<AccountToken>;
pub type TokenInfos = ListResponse<AccountToken>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_params_skip_unset_filters() {
        let params = AccountListParams::new("cfx:acc")
            .page(0, 10)
            .sort(SortOrder::Asc);
        let query = params.to_query();
        assert_eq!(query.get("account"), Some("cfx:acc"));
        assert_eq!(query.get("limit"), Some("10"));
        assert_eq!(query.get("sort"), Some("ASC"));
        assert_eq!(query.get("minTimestamp"), None);
        assert_eq!(query.len(), 4);
    }

    #[test]
    fn token_deserializes_renamed_fields() {
        let token: AccountToken = serde_json::from_value(serde_json::json!({
            "contract": "cfx:token",
            "type": "CRC20",
            "priceInUSDT": "0.25",
            "amount": "1000",
            "holderCount": 7
        }))
        .unwrap();
        assert_eq!(token.token_type.as_deref(), Some("CRC20"));
        assert_eq!(token.price_in_usdt.as_deref(), Some("0.25"));
        assert_eq!(token.amount, Some(Scalar::from("1000")));
        assert_eq!(token.extra["holderCount"], 7);
    }
}
