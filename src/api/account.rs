use serde::de::DeserializeOwned;
use tracing::debug;

use super::join_list;
use crate::client::{Result, ScanClient};
use crate::format::{
    ACCOUNT_TOKENS, CFX_TRANSFERS, FormatRules, NFT_TRANSFERS, ResponseEnvelope,
    TOKEN_TRANSFERS, TRANSACTIONS,
};
use crate::query::{QueryParams, TokenTypes};
use crate::types::{
    AccountListParams, AccountTokens, AccountTransactions, AccountTransfers, ApprovalParams,
    Approvals, CfxTransfers, TokenInfos, TokenTransfers,
};
use crate::validation::{require_non_empty, validate_timestamp_range};

/// `/account/*` listings and token lookups.
///
/// The account may be given in base32 (`cfx:...`) or hex form; it only has to
/// be non-empty.
#[derive(Debug, Clone, Copy)]
pub struct AccountApi<'a> {
    client: &'a ScanClient,
}

impl<'a> AccountApi<'a> {
    pub(crate) fn new(client: &'a ScanClient) -> Self {
        Self { client }
    }

    // ── Transactions and transfers ───────────────────────────────

    pub async fn transactions(&self, params: &AccountListParams) -> Result<AccountTransactions> {
        self.list("/account/transactions", params).await
    }

    /// Transactions with timestamps, gas and CFX value made readable.
    pub async fn transactions_formatted(
        &self,
        params: &AccountListParams,
    ) -> Result<ResponseEnvelope<AccountTransactions>> {
        self.list_formatted("/account/transactions", params, &TRANSACTIONS)
            .await
    }

    pub async fn cfx_transfers(&self, params: &AccountListParams) -> Result<CfxTransfers> {
        self.list("/account/cfx/transfers", params).await
    }

    pub async fn cfx_transfers_formatted(
        &self,
        params: &AccountListParams,
    ) -> Result<ResponseEnvelope<CfxTransfers>> {
        self.list_formatted("/account/cfx/transfers", params, &CFX_TRANSFERS)
            .await
    }

    pub async fn crc20_transfers(&self, params: &AccountListParams) -> Result<TokenTransfers> {
        self.list("/account/crc20/transfers", params).await
    }

    /// Amounts are scaled by the decimals listed in the response's `addressInfo`.
    pub async fn crc20_transfers_formatted(
        &self,
        params: &AccountListParams,
    ) -> Result<ResponseEnvelope<TokenTransfers>> {
        self.list_formatted("/account/crc20/transfers", params, &TOKEN_TRANSFERS)
            .await
    }

    pub async fn crc721_transfers(&self, params: &AccountListParams) -> Result<TokenTransfers> {
        self.list("/account/crc721/transfers", params).await
    }

    pub async fn crc721_transfers_formatted(
        &self,
        params: &AccountListParams,
    ) -> Result<ResponseEnvelope<TokenTransfers>> {
        self.list_formatted("/account/crc721/transfers", params, &NFT_TRANSFERS)
            .await
    }

    pub async fn crc1155_transfers(&self, params: &AccountListParams) -> Result<TokenTransfers> {
        self.list("/account/crc1155/transfers", params).await
    }

    pub async fn crc1155_transfers_formatted(
        &self,
        params: &AccountListParams,
    ) -> Result<ResponseEnvelope<TokenTransfers>> {
        self.list_formatted("/account/crc1155/transfers", params, &NFT_TRANSFERS)
            .await
    }

    pub async fn crc3525_transfers(&self, params: &AccountListParams) -> Result<TokenTransfers> {
        self.list("/account/crc3525/transfers", params).await
    }

    pub async fn crc3525_transfers_formatted(
        &self,
        params: &AccountListParams,
    ) -> Result<ResponseEnvelope<TokenTransfers>> {
        self.list_formatted("/account/crc3525/transfers", params, &NFT_TRANSFERS)
            .await
    }

    /// Every kind of transfer in one cursor-paginated feed.
    pub async fn transfers(&self, params: &AccountListParams) -> Result<AccountTransfers> {
        self.list("/account/transfers", params).await
    }

    pub async fn transfers_formatted(
        &self,
        params: &AccountListParams,
    ) -> Result<ResponseEnvelope<AccountTransfers>> {
        self.list_formatted("/account/transfers", params, &TOKEN_TRANSFERS)
            .await
    }

    // ── Approvals and tokens ─────────────────────────────────────

    pub async fn approvals(&self, params: &ApprovalParams) -> Result<Approvals> {
        require_non_empty("account", &params.account)?;
        debug!(account = %params.account, "getting account approvals");
        self.client
            .fetch("/account/approvals", params.to_query())
            .await
    }

    /// Balances held by `account`, optionally restricted to some token types.
    pub async fn tokens(
        &self,
        account: &str,
        token_type: Option<TokenTypes>,
    ) -> Result<AccountTokens> {
        let query = tokens_query(account, token_type)?;
        debug!(account, "getting account tokens");
        self.client.fetch("/account/tokens", query).await
    }

    /// Balances with amounts scaled by each token's decimals.
    pub async fn tokens_formatted(
        &self,
        account: &str,
        token_type: Option<TokenTypes>,
    ) -> Result<ResponseEnvelope<AccountTokens>> {
        let query = tokens_query(account, token_type)?;
        debug!(account, "getting formatted account tokens");
        self.client
            .fetch_formatted("/account/tokens", query, &ACCOUNT_TOKENS)
            .await
    }

    /// Token metadata for a batch of contracts.
    pub async fn token_infos<S: AsRef<str>>(&self, contracts: &[S]) -> Result<TokenInfos> {
        let contracts = join_list(contracts);
        require_non_empty("contracts", &contracts)?;
        debug!(%contracts, "getting token infos");
        self.client
            .fetch(
                "/token/tokeninfos",
                QueryParams::new().set("contracts", contracts),
            )
            .await
    }

    // ── Helpers ──────────────────────────────────────────────────

    async fn list<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &AccountListParams,
    ) -> Result<T> {
        let query = list_query(params)?;
        debug!(endpoint, account = %params.account, "getting account listing");
        self.client.fetch(endpoint, query).await
    }

    async fn list_formatted<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &AccountListParams,
        rules: &FormatRules,
    ) -> Result<ResponseEnvelope<T>> {
        let query = list_query(params)?;
        debug!(endpoint, account = %params.account, "getting formatted account listing");
        self.client.fetch_formatted(endpoint, query, rules).await
    }
}

fn list_query(params: &AccountListParams) -> Result<QueryParams> {
    require_non_empty("account", &params.account)?;
    validate_timestamp_range(params.min_timestamp, params.max_timestamp)?;
    Ok(params.to_query())
}

fn tokens_query(account: &str, token_type: Option<TokenTypes>) -> Result<QueryParams> {
    require_non_empty("account", account)?;
    Ok(QueryParams::new()
        .set("account", account)
        .opt("tokenType", token_type))
}
