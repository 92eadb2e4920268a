//! Endpoint groups of the explorer API.
//!
//! Each group borrows a [`ScanClient`](crate::ScanClient) and is obtained from
//! it (`client.account()`, `client.statistics()`, ...). Methods come in pairs:
//! the plain one returns the typed payload, the `_formatted` one wraps it in a
//! [`ResponseEnvelope`](crate::format::ResponseEnvelope) next to its display form.

mod account;
mod contract;
mod nft;
mod statistics;
mod utils;

pub use account::AccountApi;
pub use contract::ContractApi;
pub use nft::NftApi;
pub use statistics::StatisticsApi;
pub use utils::UtilsApi;

/// Joins a list argument into the comma-separated form the explorer expects.
pub(crate) fn join_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| item.as_ref().trim())
        .filter(|item| !item.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}
