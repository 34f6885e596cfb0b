//! Supported network identifiers

use crate::errors::RegistryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A deployment target the router contracts are known on.
///
/// Closed set: adding a network is a code change, not runtime data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NetworkKey {
    Eth,
    Goerli,
    BscMainnet,
    BscTestnet,
    FtmTestnet,
    Hardhat,
}

impl NetworkKey {
    /// Every supported network, in the order the table declares them.
    pub const ALL: [NetworkKey; 6] = [
        NetworkKey::Eth,
        NetworkKey::Goerli,
        NetworkKey::BscMainnet,
        NetworkKey::BscTestnet,
        NetworkKey::FtmTestnet,
        NetworkKey::Hardhat,
    ];

    /// Canonical name, matching the keys of the companion JSON document.
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkKey::Eth => "eth",
            NetworkKey::Goerli => "goerli",
            NetworkKey::BscMainnet => "bscMainnet",
            NetworkKey::BscTestnet => "bscTestnet",
            NetworkKey::FtmTestnet => "ftmTestnet",
            NetworkKey::Hardhat => "hardhat",
        }
    }

    /// True for test or local development networks.
    pub fn is_testnet(&self) -> bool {
        matches!(
            self,
            NetworkKey::Goerli
                | NetworkKey::BscTestnet
                | NetworkKey::FtmTestnet
                | NetworkKey::Hardhat
        )
    }

    pub fn is_mainnet(&self) -> bool {
        !self.is_testnet()
    }
}

impl fmt::Display for NetworkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkKey {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| RegistryError::unknown_network(s))
    }
}
