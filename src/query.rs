//! Query-string building and the enumerated parameter values the explorer accepts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Ordered query parameters for one request.
///
/// Parameters set through [`QueryParams::opt`] with `None` are never sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, name: &'static str, value: impl fmt::Display) -> Self {
        self.pairs.push((name, value.to_string()));
        self
    }

    pub fn opt<V: fmt::Display>(self, name: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(name, value),
            None => self,
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// URL-encodes the parameters, appending `apiKey` last when given.
    pub fn encode(&self, api_key: Option<&str>) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.pairs {
            serializer.append_pair(name, value);
        }
        if let Some(key) = api_key {
            serializer.append_pair("apiKey", key);
        }
        serializer.finish()
    }
}

// ---------------------------------------------------------------------------
// Parameter enums
// ---------------------------------------------------------------------------

/// Sort direction by timestamp. Sent upper-case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        })
    }
}

impl FromStr for SortOrder {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ASC" => Ok(Self::Asc),
            "DESC" => Ok(Self::Desc),
            _ => Err(ValidationError::InvalidParameter {
                name: "sort",
                value: s.to_string(),
            }),
        }
    }
}

/// Token standard filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    #[serde(rename = "CRC20")]
    Crc20,
    #[serde(rename = "CRC721")]
    Crc721,
    #[serde(rename = "CRC1155")]
    Crc1155,
    /// The chain's native currency.
    #[serde(rename = "native")]
    Native,
}

impl TokenType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Crc20 => "CRC20",
            Self::Crc721 => "CRC721",
            Self::Crc1155 => "CRC1155",
            Self::Native => "native",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            t if t.eq_ignore_ascii_case("CRC20") => Ok(Self::Crc20),
            t if t.eq_ignore_ascii_case("CRC721") => Ok(Self::Crc721),
            t if t.eq_ignore_ascii_case("CRC1155") => Ok(Self::Crc1155),
            t if t.eq_ignore_ascii_case("native") => Ok(Self::Native),
            _ => Err(ValidationError::InvalidParameter {
                name: "tokenType",
                value: s.to_string(),
            }),
        }
    }
}

/// One or more token standards, sent comma-joined (`CRC20,CRC721`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenTypes(Vec<TokenType>);

impl TokenTypes {
    pub fn as_slice(&self) -> &[TokenType] {
        &self.0
    }
}

impl From<TokenType> for TokenTypes {
    fn from(value: TokenType) -> Self {
        Self(vec![value])
    }
}

impl FromIterator<TokenType> for TokenTypes {
    fn from_iter<I: IntoIterator<Item = TokenType>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for TokenTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token_type) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(token_type.as_str())?;
        }
        Ok(())
    }
}

impl FromStr for TokenTypes {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',').map(str::parse).collect()
    }
}

/// Kind filter for the mixed `/account/transfers` feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferType {
    Transaction,
    Call,
    Create,
    #[serde(rename = "transfer_20")]
    Transfer20,
    #[serde(rename = "transfer_721")]
    Transfer721,
    #[serde(rename = "transfer_1155")]
    Transfer1155,
}

impl fmt::Display for TransferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Transaction => "transaction",
            Self::Call => "call",
            Self::Create => "create",
            Self::Transfer20 => "transfer_20",
            Self::Transfer721 => "transfer_721",
            Self::Transfer1155 => "transfer_1155",
        })
    }
}

/// Window of the leaderboard (`/statistics/top/*`) endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatsSpan {
    #[default]
    #[serde(rename = "24h")]
    Day,
    #[serde(rename = "3d")]
    ThreeDays,
    #[serde(rename = "7d")]
    Week,
}

impl fmt::Display for StatsSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Day => "24h",
            Self::ThreeDays => "3d",
            Self::Week => "7d",
        })
    }
}

/// Bucket size of time-series statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalType {
    Min,
    Hour,
    Day,
}

impl fmt::Display for IntervalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Min => "min",
            Self::Hour => "hour",
            Self::Day => "day",
        })
    }
}
