//! Format checks for network table entries

use alloy::primitives::Address;

use crate::errors::ValidationError;
use crate::types::{NetworkConfig, NetworkKey, UNDEPLOYED};

/// Parse a raw address field: `0x` prefix plus exactly 40 hex digits.
///
/// The all-zero address parses like any other; it means "not deployed",
/// not bad data.
pub(super) fn parse_address(
    network: NetworkKey,
    field: &'static str,
    raw: &str,
) -> Result<Address, ValidationError> {
    let malformed = |reason: String| ValidationError {
        network,
        field,
        reason,
    };

    let digits = raw
        .strip_prefix("0x")
        .ok_or_else(|| malformed(format!("'{raw}' is missing the 0x prefix")))?;
    if digits.len() != 40 {
        return Err(malformed(format!(
            "expected 40 hex digits, got {}",
            digits.len()
        )));
    }
    raw.parse::<Address>()
        .map_err(|err| malformed(format!("'{raw}' is not hexadecimal: {err}")))
}

pub(super) fn check_entries(entries: &[(NetworkKey, NetworkConfig)]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for (network, config) in entries {
        if config.native_currency_label.is_empty() {
            errors.push(ValidationError {
                network: *network,
                field: "nativeCurrencyLabel",
                reason: "must not be empty".to_owned(),
            });
        }
        // The helper is consulted on every route; no network ships without it.
        if config.smart_router_helper == UNDEPLOYED {
            errors.push(ValidationError {
                network: *network,
                field: "smartRouterHelper",
                reason: "must point at a deployed helper contract".to_owned(),
            });
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::NETWORKS;
    use proptest::prelude::*;

    #[test]
    fn sentinel_address_is_valid() {
        let parsed = parse_address(
            NetworkKey::Eth,
            "stableFactory",
            "0x0000000000000000000000000000000000000000",
        )
        .unwrap();
        assert_eq!(parsed, UNDEPLOYED);
    }

    #[test]
    fn missing_prefix_is_rejected() {
        let err = parse_address(
            NetworkKey::Eth,
            "cake",
            "152649eA73beAb28c5b49B26eb48f7EAD6d4c898",
        )
        .unwrap_err();
        assert_eq!(err.network, NetworkKey::Eth);
        assert_eq!(err.field, "cake");
        assert!(err.reason.contains("0x prefix"));
    }

    #[test]
    fn wrong_length_is_rejected() {
        let err = parse_address(NetworkKey::Goerli, "WNATIVE", "0x1234").unwrap_err();
        assert!(err.reason.contains("40 hex digits"));
    }

    #[test]
    fn non_hex_digits_are_rejected() {
        let err = parse_address(
            NetworkKey::Hardhat,
            "v2Factory",
            "0xZZ2aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2",
        )
        .unwrap_err();
        assert!(err.reason.contains("not hexadecimal"));
    }

    #[test]
    fn empty_label_is_reported() {
        let mut entries: Vec<_> = NETWORKS.iter().map(|(k, c)| (k, c.clone())).collect();
        entries[0].1.native_currency_label.clear();
        let errors = check_entries(&entries);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "nativeCurrencyLabel");
        assert_eq!(errors[0].network, NetworkKey::Eth);
    }

    #[test]
    fn undeployed_helper_is_reported() {
        let mut entries: Vec<_> = NETWORKS.iter().map(|(k, c)| (k, c.clone())).collect();
        entries[2].1.smart_router_helper = UNDEPLOYED;
        let errors = check_entries(&entries);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "smartRouterHelper");
        assert_eq!(errors[0].network, NetworkKey::BscMainnet);
    }

    proptest! {
        #[test]
        fn any_40_hex_digit_string_parses(digits in "[0-9a-fA-F]{40}") {
            let raw = format!("0x{digits}");
            prop_assert!(parse_address(NetworkKey::Eth, "cake", &raw).is_ok());
        }

        #[test]
        fn wrong_length_never_parses(digits in "[0-9a-f]{0,39}") {
            let raw = format!("0x{digits}");
            prop_assert!(parse_address(NetworkKey::Eth, "cake", &raw).is_err());
        }
    }
}
