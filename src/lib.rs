//! Typed async client and display formatting for the
//! [ConfluxScan](https://confluxscan.org) Core Space explorer API.
//!
//! # Features
//!
//! - **`api` groups**: account activity, contract metadata, NFTs, network
//!   statistics and decoding utilities, reached through [`ScanClient`].
//!   Every method has a `_formatted` twin returning a [`ResponseEnvelope`] that
//!   pairs the typed payload with a readable copy (drip scaled to `"1.5"`,
//!   gas as `"2 Gdrip"`, times as `"2024-01-01 00:00:00"`).
//! - **`format` module**: the pure formatters behind the envelopes, usable on
//!   their own.
//! - **`client` feature** (enabled by default): the `reqwest`-backed
//!   [`ReqwestTransport`](transport::ReqwestTransport). Without it, bring your
//!   own [`HttpTransport`](transport::HttpTransport).
//!
//! # Quick start
//!
//! ```no_run
//! use confluxscan_client::{ScanClient, StatsSpan};
//!
//! #[tokio::main]
//! async fn main() -> confluxscan_client::client::Result<()> {
//!     let client = ScanClient::mainnet();
//!
//!     let supply = client.statistics().supply_formatted().await?;
//!     println!("Total supply: {}", supply.formatted["totalSupply"]);
//!
//!     let top = client.statistics().top_gas_used(StatsSpan::Day).await?;
//!     println!("{} accounts ranked", top.list.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod query;
pub mod transport;
pub mod types;
pub mod validation;

pub use client::{ScanClient, ScanClientBuilder};
pub use config::{ApiConfig, Network};
pub use error::{Error, FormatError, Result, ValidationError};
pub use format::{ResponseEnvelope, wrap_response};
pub use query::{IntervalType, SortOrder, StatsSpan, TokenType, TokenTypes, TransferType};
pub use validation::{AddressValidator, Base32AddressValidator};
