//! Local input checks that run before a request is issued.

use std::sync::LazyLock;

use regress::Regex;
use tracing::debug;

use crate::error::ValidationError;

/// Decides whether a string is an acceptable address.
///
/// The client calls this before every request that takes an address, so an
/// implementation with full checksum verification can be plugged in through
/// [`ScanClientBuilder::validator`](crate::ScanClientBuilder::validator).
pub trait AddressValidator: Send + Sync {
    fn is_valid(&self, address: &str) -> bool;
}

/// Structural check of CIP-37 base32 addresses.
///
/// Accepts `cfx:`, `cfxtest:` and `net<id>:` prefixes, an optional
/// `type.<kind>:` segment and a 42-character payload from the base32
/// alphabet (no `i`, `l`, `o` or `q`). Addresses must not mix case. The
/// checksum itself is not verified.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base32AddressValidator;

static BASE32_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::with_flags(
        r"^(cfx|cfxtest|net\d+):(type\.[a-z]+:)?[abcdefghjkmnprstuvwxyz0-9]{42}$",
        "i",
    )
    .expect("address pattern is a valid regex")
});

impl AddressValidator for Base32AddressValidator {
    fn is_valid(&self, address: &str) -> bool {
        let single_case =
            address == address.to_ascii_lowercase() || address == address.to_ascii_uppercase();
        let valid = single_case && BASE32_ADDRESS.find(address).is_some();
        if !valid {
            debug!(address, "address failed structural validation");
        }
        valid
    }
}

/// Rejects a range whose lower bound lies after its upper bound.
pub fn validate_timestamp_range(
    min_timestamp: Option<i64>,
    max_timestamp: Option<i64>,
) -> Result<(), ValidationError> {
    match (min_timestamp, max_timestamp) {
        (Some(min), Some(max)) if min > max => {
            Err(ValidationError::InvalidTimestampRange { min, max })
        }
        _ => Ok(()),
    }
}

/// Rejects blank required parameters such as hash or contract lists.
pub fn require_non_empty(name: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::InvalidParameter {
            name,
            value: value.to_string(),
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTRACT: &str = "cfx:achc8nxj7r451c223m18w2dwjnmhkd6rxawrvkvsy2";

    #[test]
    fn accepts_base32_addresses() {
        let validator = Base32AddressValidator;
        assert!(validator.is_valid(CONTRACT));
        assert!(validator.is_valid("cfx:aapgmw9up7tm7dxy5pctg8442dz6x7ak4u9fzsj0fm"));
        assert!(validator.is_valid("CFX:TYPE.CONTRACT:ACHC8NXJ7R451C223M18W2DWJNMHKD6RXAWRVKVSY2"));
        assert!(validator.is_valid("net8888:achc8nxj7r451c223m18w2dwjnmhkd6rxawrvkvsy2"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        let validator = Base32AddressValidator;
        assert!(!validator.is_valid("invalid"));
        assert!(!validator.is_valid(""));
        assert!(!validator.is_valid("0x672158893ce87d812befd2209bc1b7818fe48b2a"));
        assert!(!validator.is_valid("cfx:achc8nxj7r451c223m18w2dwjnmhkd6rxawrvkvsy"));
        assert!(!validator.is_valid("eth:achc8nxj7r451c223m18w2dwjnmhkd6rxawrvkvsy2"));
        // `o` is outside the base32 alphabet
        assert!(!validator.is_valid("cfx:achc8nxj7r451c223m18w2dwjnmhkd6rxawrvkvsyo"));
        assert!(!validator.is_valid("cfx:ACHC8nxj7r451c223m18w2dwjnmhkd6rxawrvkvsy2"));
    }

    #[test]
    fn timestamp_range_must_be_ordered() {
        assert!(validate_timestamp_range(Some(1), Some(2)).is_ok());
        assert!(validate_timestamp_range(Some(2), Some(2)).is_ok());
        assert!(validate_timestamp_range(Some(5), None).is_ok());
        assert_eq!(
            validate_timestamp_range(Some(3), Some(2)),
            Err(ValidationError::InvalidTimestampRange { min: 3, max: 2 })
        );
    }

    #[test]
    fn blank_parameters_are_rejected() {
        assert!(require_non_empty("hashes", "0xabc").is_ok());
        assert_eq!(
            require_non_empty("hashes", " ").unwrap_err().to_string(),
            "Invalid hashes: ' '"
        );
    }
}
