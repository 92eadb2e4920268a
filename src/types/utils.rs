use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A decoded method signature or calldata.
///
/// `/util/decode/method` fills `hash`, `/util/decode/method/raw` fills
/// `contract` and `input`. Entries that could not be decoded carry `error`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedMethod {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decoded_data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DecodedMethod {
    pub fn is_decoded(&self) -> bool {
        self.error.is_none() && self.decoded_data.is_some()
    }
}
