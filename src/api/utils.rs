use tracing::debug;

use super::join_list;
use crate::client::{Result, ScanClient};
use crate::error::ValidationError;
use crate::query::QueryParams;
use crate::types::{DecodedMethod, OneOrMany};
use crate::validation::require_non_empty;

/// `/util/*` decoding helpers.
#[derive(Debug, Clone, Copy)]
pub struct UtilsApi<'a> {
    client: &'a ScanClient,
}

impl<'a> UtilsApi<'a> {
    pub(crate) fn new(client: &'a ScanClient) -> Self {
        Self { client }
    }

    /// Decodes transactions by hash. Undecodable entries carry an `error`.
    pub async fn decode_method<S: AsRef<str>>(&self, hashes: &[S]) -> Result<Vec<DecodedMethod>> {
        let hashes = join_list(hashes);
        require_non_empty("hashes", &hashes)?;
        debug!(%hashes, "decoding methods");

        let decoded: OneOrMany<DecodedMethod> = self
            .client
            .fetch("/util/decode/method", QueryParams::new().set("hashes", hashes))
            .await?;
        Ok(decoded.into_vec())
    }

    /// Decodes raw calldata, pairing `contracts[i]` with `inputs[i]`.
    ///
    /// Both lists must be the same length with no blank entries, since the
    /// explorer pairs them by position.
    pub async fn decode_method_raw<S: AsRef<str>, I: AsRef<str>>(
        &self,
        contracts: &[S],
        inputs: &[I],
    ) -> Result<Vec<DecodedMethod>> {
        let contracts = paired_list("contracts", contracts)?;
        let inputs = paired_list("inputs", inputs)?;
        if contracts.len() != inputs.len() {
            return Err(ValidationError::MismatchedLengths {
                contracts: contracts.len(),
                inputs: inputs.len(),
            }
            .into());
        }
        let contracts = contracts.join(",");
        let inputs = inputs.join(",");
        debug!(%contracts, "decoding raw method inputs");

        let query = QueryParams::new()
            .set("contracts", contracts)
            .set("inputs", inputs);
        let decoded: OneOrMany<DecodedMethod> =
            self.client.fetch("/util/decode/method/raw", query).await?;
        Ok(decoded.into_vec())
    }
}

/// Trimmed entries of a positional list. Empty lists and blank entries are rejected.
fn paired_list<'s, S: AsRef<str>>(name: &'static str, items: &'s [S]) -> Result<Vec<&'s str>> {
    if items.is_empty() {
        require_non_empty(name, "")?;
    }
    items
        .iter()
        .map(|item| -> Result<&'s str> {
            let item = item.as_ref();
            require_non_empty(name, item)?;
            Ok(item.trim())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paired_lists_keep_positions() {
        assert_eq!(paired_list("inputs", &[" 0xa", "0xb "]).unwrap(), ["0xa", "0xb"]);

        let err = paired_list("contracts", &["cfx:a", " ", "cfx:b"]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid contracts: ' '");

        let err = paired_list::<&str>("inputs", &[]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid inputs: ''");
    }
}
