use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{ListResponse, Scalar};
use crate::query::{QueryParams, SortOrder};

/// Filters for the `/nft/*` listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NftListParams {
    pub contract: Option<String>,
    pub owner: Option<String>,
    pub token_id: Option<String>,
    pub cursor: Option<String>,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub sort: Option<SortOrder>,
    pub with_brief: Option<bool>,
    pub with_metadata: Option<bool>,
}

impl NftListParams {
    pub fn for_owner(owner: impl Into<String>) -> Self {
        Self {
            owner: Some(owner.into()),
            ..Self::default()
        }
    }

    pub fn for_contract(contract: impl Into<String>) -> Self {
        Self {
            contract: Some(contract.into()),
            ..Self::default()
        }
    }

    pub fn page(mut self, skip: u32, limit: u32) -> Self {
        self.skip = Some(skip);
        self.limit = Some(limit);
        self
    }

    pub(crate) fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .opt("contract", self.contract.as_deref())
            .opt("owner", self.owner.as_deref())
            .opt("tokenId", self.token_id.as_deref())
            .opt("cursor", self.cursor.as_deref())
            .opt("skip", self.skip)
            .opt("limit", self.limit)
            .opt("sort", self.sort)
            .opt("withBrief", self.with_brief)
            .opt("withMetadata", self.with_metadata)
    }
}

/// NFT holdings of an owner, per collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftBalance {
    pub contract: Option<String>,
    pub name: Option<Value>,
    pub symbol: Option<String>,
    #[serde(rename = "type")]
    pub token_type: Option<String>,
    pub balance: Option<Scalar>,
    pub icon: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftToken {
    pub contract: Option<String>,
    pub token_id: Option<String>,
    pub owner: Option<String>,
    pub amount: Option<Scalar>,
    pub name: Option<Value>,
    pub description: Option<Value>,
    pub image: Option<String>,
    pub image_uri: Option<String>,
    pub mint_timestamp: Option<Scalar>,
    pub detail: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftOwner {
    pub owner: Option<String>,
    pub token_id: Option<String>,
    pub amount: Option<Scalar>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub type NftBalances = ListResponse<NftBalance>;
pub type NftTokens = ListResponse<NftToken>;
pub type NftOwners = ListResponse<NftOwner>;
