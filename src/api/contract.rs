use serde_json::Value;
use tracing::debug;

use crate::client::{Error, Result, ScanClient};
use crate::error::ValidationError;
use crate::query::QueryParams;
use crate::types::{ContractSource, OneOrMany, VerificationStatus};

/// `/contract/*` metadata and verification jobs.
#[derive(Debug, Clone, Copy)]
pub struct ContractApi<'a> {
    client: &'a ScanClient,
}

impl<'a> ContractApi<'a> {
    pub(crate) fn new(client: &'a ScanClient) -> Self {
        Self { client }
    }

    /// The verified ABI of `address`, parsed from the JSON text the explorer returns.
    ///
    /// Fails with [`Error::Api`] when the contract is not verified.
    pub async fn abi(&self, address: &str) -> Result<Value> {
        self.client.check_address(address)?;
        debug!(address, "getting contract ABI");

        let data = self
            .client
            .request("/contract/getabi", address_query(address))
            .await?;
        match data {
            Value::String(text) if !text.trim().is_empty() => Ok(serde_json::from_str(&text)?),
            Value::Array(_) | Value::Object(_) => Ok(data),
            _ => Err(Error::api(format!(
                "Contract {address} not verified or ABI not available"
            ))),
        }
    }

    /// Verified source and compiler settings of `address`.
    pub async fn source_code(&self, address: &str) -> Result<ContractSource> {
        self.client.check_address(address)?;
        debug!(address, "getting contract source code");

        let data = self
            .client
            .request("/contract/getsourcecode", address_query(address))
            .await?;
        let sources = match data {
            Value::Null => Vec::new(),
            data => serde_json::from_value::<OneOrMany<ContractSource>>(data)?.into_vec(),
        };
        sources.into_iter().next().ok_or_else(|| {
            Error::api(format!(
                "Contract {address} not verified or source code not available"
            ))
        })
    }

    /// Status of a source verification job started elsewhere.
    pub async fn check_verify_status(&self, guid: &str) -> Result<VerificationStatus> {
        let query = guid_query(guid, "checking verification status")?;
        debug!(guid, "checking verification status");
        self.client.fetch("/contract/checkverifystatus", query).await
    }

    /// Submits `address` for proxy verification, optionally pinning the
    /// implementation the proxy is expected to point at.
    pub async fn verify_proxy(
        &self,
        address: &str,
        expected_implementation: Option<&str>,
    ) -> Result<VerificationStatus> {
        self.client.check_address(address)?;
        if let Some(implementation) = expected_implementation
            && !self.client.is_valid_address(implementation)
        {
            return Err(
                ValidationError::InvalidImplementationAddress(implementation.to_string()).into(),
            );
        }
        debug!(address, ?expected_implementation, "verifying proxy contract");

        let query = address_query(address).opt("expectedimplementation", expected_implementation);
        self.client
            .fetch("/contract/verifyproxycontract", query)
            .await
    }

    pub async fn check_proxy_verification(&self, guid: &str) -> Result<VerificationStatus> {
        let query = guid_query(guid, "checking proxy verification status")?;
        debug!(guid, "checking proxy verification status");
        self.client
            .fetch("/contract/checkproxyverification", query)
            .await
    }
}

fn address_query(address: &str) -> QueryParams {
    QueryParams::new().set("address", address)
}

fn guid_query(guid: &str, context: &'static str) -> Result<QueryParams> {
    if guid.trim().is_empty() {
        return Err(ValidationError::MissingGuid(context).into());
    }
    Ok(QueryParams::new().set("guid", guid))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_guid_is_rejected() {
        let err = guid_query("", "checking verification status").unwrap_err();
        assert_eq!(
            err.to_string(),
            "GUID is required for checking verification status"
        );
        assert_eq!(
            guid_query("abc", "checking verification status")
                .unwrap()
                .get("guid"),
            Some("abc")
        );
    }
}
