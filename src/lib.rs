//! Static registry of Smart Router contract deployments per network
//!
//! Maps each supported network to the contract addresses the router needs
//! (wrapped native token, V2 factory, stable-swap factory/info, CAKE,
//! router helper) plus display metadata. The table is fixed at build time,
//! validated once, and read-only for the life of the process.

pub mod types;
pub mod errors;
pub mod registry;

// Re-export commonly used items
pub use errors::{RegistryError, RegistryResult, ValidationError};
pub use registry::{NETWORKS, NetworkRegistry};
pub use types::*;
