use serde::de::DeserializeOwned;
use tracing::debug;

use crate::client::{Result, ScanClient};
use crate::error::ValidationError;
use crate::format::{FormatRules, NFT_BALANCES, NFT_TOKENS, ResponseEnvelope};
use crate::query::QueryParams;
use crate::types::{NftBalances, NftListParams, NftOwners, NftToken, NftTokens};
use crate::validation::require_non_empty;

/// `/nft/*` holdings, collections and previews.
#[derive(Debug, Clone, Copy)]
pub struct NftApi<'a> {
    client: &'a ScanClient,
}

impl<'a> NftApi<'a> {
    pub(crate) fn new(client: &'a ScanClient) -> Self {
        Self { client }
    }

    /// Collections held by `params.owner`, with per-collection balances.
    pub async fn balances(&self, params: &NftListParams) -> Result<NftBalances> {
        let query = self.owner_query(params)?;
        self.fetch("/nft/balances", query).await
    }

    pub async fn balances_formatted(
        &self,
        params: &NftListParams,
    ) -> Result<ResponseEnvelope<NftBalances>> {
        let query = self.owner_query(params)?;
        self.fetch_formatted("/nft/balances", query, &NFT_BALANCES)
            .await
    }

    /// Tokens of `params.contract`, optionally held by `params.owner`.
    pub async fn tokens(&self, params: &NftListParams) -> Result<NftTokens> {
        let query = self.contract_query(params)?;
        self.fetch("/nft/tokens", query).await
    }

    pub async fn tokens_formatted(
        &self,
        params: &NftListParams,
    ) -> Result<ResponseEnvelope<NftTokens>> {
        let query = self.contract_query(params)?;
        self.fetch_formatted("/nft/tokens", query, &NFT_TOKENS)
            .await
    }

    /// Metadata of a single token.
    pub async fn preview(
        &self,
        contract: &str,
        token_id: &str,
        with_metadata: bool,
    ) -> Result<NftToken> {
        self.client.check_address(contract)?;
        require_non_empty("tokenId", token_id)?;
        let query = QueryParams::new()
            .set("contract", contract)
            .set("tokenId", token_id)
            .set("withMetadata", with_metadata);
        self.fetch("/nft/preview", query).await
    }

    /// Fungible (CRC1155) token ids of `params.contract`.
    pub async fn fungible_tokens(&self, params: &NftListParams) -> Result<NftTokens> {
        let query = self.contract_query(params)?;
        self.fetch("/nft/fungibleTokens", query).await
    }

    pub async fn fungible_tokens_formatted(
        &self,
        params: &NftListParams,
    ) -> Result<ResponseEnvelope<NftTokens>> {
        let query = self.contract_query(params)?;
        self.fetch_formatted("/nft/fungibleTokens", query, &NFT_TOKENS)
            .await
    }

    /// Holders of `params.contract`, narrowed to one token when `token_id` is set.
    pub async fn owners(&self, params: &NftListParams) -> Result<NftOwners> {
        let query = self.contract_query(params)?;
        self.fetch("/nft/owners", query).await
    }

    fn owner_query(&self, params: &NftListParams) -> Result<QueryParams> {
        let owner = params.owner.as_deref().unwrap_or_default();
        require_non_empty("owner", owner)?;
        if let Some(contract) = &params.contract {
            self.client.check_address(contract)?;
        }
        Ok(params.to_query())
    }

    fn contract_query(&self, params: &NftListParams) -> Result<QueryParams> {
        let contract = params
            .contract
            .as_deref()
            .ok_or(ValidationError::InvalidParameter {
                name: "contract",
                value: String::new(),
            })?;
        self.client.check_address(contract)?;
        Ok(params.to_query())
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: &str, query: QueryParams) -> Result<T> {
        debug!(endpoint, "getting NFT data");
        self.client.fetch(endpoint, query).await
    }

    async fn fetch_formatted<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: QueryParams,
        rules: &FormatRules,
    ) -> Result<ResponseEnvelope<T>> {
        debug!(endpoint, "getting formatted NFT data");
        self.client.fetch_formatted(endpoint, query, rules).await
    }
}
