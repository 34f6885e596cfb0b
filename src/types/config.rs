//! Per-network contract addresses and display metadata

use alloy::primitives::Address;

/// Address recorded where a contract has no deployment on a network.
///
/// A legitimate in-band value, not malformed data.
pub const UNDEPLOYED: Address = Address::ZERO;

/// Contract addresses and display metadata for one network.
///
/// Address fields other than `smart_router_helper` may hold [`UNDEPLOYED`]
/// when the contract is not deployed on that network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Wrapped native token (WETH, WBNB, ...).
    pub wrapped_native: Address,
    /// Display label for the native currency, e.g. "ETH" or "BNB".
    pub native_currency_label: String,
    /// PancakeSwap V2 factory.
    pub v2_factory: Address,
    /// Stable-swap factory.
    pub stable_factory: Address,
    /// Stable-swap info contract.
    pub stable_info: Address,
    /// CAKE token.
    pub cake: Address,
    /// Smart Router helper contract.
    pub smart_router_helper: Address,
}

impl NetworkConfig {
    /// True when a V2 factory is deployed on this network.
    pub fn has_v2_factory(&self) -> bool {
        self.v2_factory != UNDEPLOYED
    }

    /// True when the stable-swap pair of contracts is deployed.
    pub fn has_stable_swap(&self) -> bool {
        self.stable_factory != UNDEPLOYED && self.stable_info != UNDEPLOYED
    }
}
