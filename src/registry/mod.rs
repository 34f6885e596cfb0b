//! Immutable lookup over the supported network table

pub mod loader;
pub mod table;
pub mod validation;

pub use table::NETWORKS;

use crate::errors::{RegistryError, RegistryResult, ValidationError};
use crate::types::{NetworkConfig, NetworkKey};

/// Read-only mapping from [`NetworkKey`] to its [`NetworkConfig`].
///
/// Built once, never mutated afterwards; entries keep the order they were
/// declared in. The shipped table lives in the process-wide [`NETWORKS`]
/// static, which covers every [`NetworkKey`] variant. Tables loaded from a
/// companion document may be partial.
#[derive(Debug, Clone)]
pub struct NetworkRegistry {
    entries: Vec<(NetworkKey, NetworkConfig)>,
}

impl NetworkRegistry {
    pub(crate) fn from_entries(entries: Vec<(NetworkKey, NetworkConfig)>) -> Self {
        Self { entries }
    }

    /// Look up the configuration for a network.
    ///
    /// Never fails against [`NETWORKS`]; fails with
    /// [`RegistryError::UnknownNetwork`] against a partial loaded table.
    pub fn get(&self, key: NetworkKey) -> RegistryResult<&NetworkConfig> {
        self.entries
            .iter()
            .find(|(entry_key, _)| *entry_key == key)
            .map(|(_, config)| config)
            .ok_or_else(|| RegistryError::unknown_network(key.as_str()))
    }

    /// Resolve an untyped network name, e.g. from an environment variable
    /// or CLI flag.
    pub fn get_by_name(&self, name: &str) -> RegistryResult<(NetworkKey, &NetworkConfig)> {
        let key: NetworkKey = name.parse()?;
        Ok((key, self.get(key)?))
    }

    pub fn has(&self, key: NetworkKey) -> bool {
        self.entries.iter().any(|(entry_key, _)| *entry_key == key)
    }

    /// Every registered network with its configuration, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (NetworkKey, &NetworkConfig)> + '_ {
        self.entries.iter().map(|(key, config)| (*key, config))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check every entry against the table invariants.
    ///
    /// Empty on success, otherwise one error per malformed field. Run at
    /// startup or in tests; malformed data here is a programmer error, not
    /// a runtime condition to recover from.
    pub fn validate(&self) -> Vec<ValidationError> {
        validation::check_entries(&self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UNDEPLOYED;
    use alloy::primitives::address;

    #[test]
    fn every_network_resolves() {
        for key in NetworkKey::ALL {
            assert!(NETWORKS.has(key));
            let config = NETWORKS.get(key).unwrap();
            assert!(!config.native_currency_label.is_empty());
        }
    }

    #[test]
    fn repeated_lookups_are_value_equal() {
        for key in NetworkKey::ALL {
            let first = NETWORKS.get(key).unwrap().clone();
            let second = NETWORKS.get(key).unwrap();
            assert_eq!(&first, second);
        }
    }

    #[test]
    fn iteration_covers_each_network_once_in_declaration_order() {
        let keys: Vec<NetworkKey> = NETWORKS.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, NetworkKey::ALL);

        let again: Vec<NetworkKey> = NETWORKS.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, again);
    }

    #[test]
    fn shipped_table_passes_validation() {
        assert_eq!(NETWORKS.validate(), vec![]);
    }

    #[test]
    fn bsc_mainnet_entry() {
        let config = NETWORKS.get(NetworkKey::BscMainnet).unwrap();
        assert_eq!(config.native_currency_label, "BNB");
        assert_eq!(
            config.stable_factory,
            address!("25a55f9f2279a54951133d503490342b50e5cd15")
        );
        assert!(config.has_stable_swap());
    }

    #[test]
    fn eth_entry_has_no_stable_swap() {
        let config = NETWORKS.get(NetworkKey::Eth).unwrap();
        assert_eq!(
            config.v2_factory,
            address!("1097053Fd2ea711dad45caCcc45EfF7548fCB362")
        );
        assert_eq!(config.stable_factory, UNDEPLOYED);
        assert_eq!(config.stable_info, UNDEPLOYED);
        assert!(!config.has_stable_swap());
    }

    #[test]
    fn hardhat_wrapped_native_is_undeployed() {
        let config = NETWORKS.get(NetworkKey::Hardhat).unwrap();
        assert_eq!(config.wrapped_native, UNDEPLOYED);
        assert!(!config.has_v2_factory());
    }

    #[test]
    fn unknown_name_fails_lookup() {
        let err = NETWORKS.get_by_name("unknownNetwork").unwrap_err();
        assert!(matches!(err, RegistryError::UnknownNetwork { .. }));
    }

    #[test]
    fn partial_table_reports_missing_network() {
        let partial = NetworkRegistry::from_entries(vec![(
            NetworkKey::Eth,
            NETWORKS.get(NetworkKey::Eth).unwrap().clone(),
        )]);
        assert!(partial.has(NetworkKey::Eth));
        assert!(!partial.has(NetworkKey::BscMainnet));
        let err = partial.get(NetworkKey::BscMainnet).unwrap_err();
        assert!(matches!(err, RegistryError::UnknownNetwork { .. }));
    }
}
