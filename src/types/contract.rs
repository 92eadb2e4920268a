use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Verified source metadata returned by `/contract/getsourcecode`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContractSource {
    pub source_code: Option<String>,
    #[serde(rename = "ABI")]
    pub abi: Option<String>,
    pub contract_name: Option<String>,
    pub compiler_version: Option<String>,
    pub optimization_used: Option<String>,
    pub runs: Option<String>,
    pub constructor_arguments: Option<String>,
    #[serde(rename = "EVMVersion")]
    pub evm_version: Option<String>,
    pub library: Option<String>,
    pub license_type: Option<String>,
    pub proxy: Option<String>,
    pub implementation: Option<String>,
    pub swarm_source: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContractSource {
    /// `true` when the explorer flags the contract as a proxy.
    pub fn is_proxy(&self) -> bool {
        self.proxy.as_deref() == Some("1")
    }
}

/// Progress of a source or proxy verification job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerificationStatus {
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_uses_pascal_case_keys() {
        let source: ContractSource = serde_json::from_value(serde_json::json!({
            "SourceCode": "contract Test {}",
            "ABI": "[]",
            "ContractName": "Test",
            "EVMVersion": "default",
            "Proxy": "1",
            "Implementation": "cfx:impl"
        }))
        .unwrap();
        assert_eq!(source.contract_name.as_deref(), Some("Test"));
        assert_eq!(source.abi.as_deref(), Some("[]"));
        assert_eq!(source.evm_version.as_deref(), Some("default"));
        assert!(source.is_proxy());
    }
}
