//! Typed payloads of the explorer API.
//!
//! Every record keeps fields it does not model in a flattened `extra` map, so
//! nothing the explorer returns is dropped on the way through.

pub mod account;
pub mod common;
pub mod contract;
pub mod nft;
pub mod statistics;
pub mod utils;

pub use account::*;
pub use common::*;
pub use contract::*;
pub use nft::*;
pub use statistics::*;
pub use utils::*;
