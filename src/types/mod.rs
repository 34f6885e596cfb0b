//! Core data types for the network table

pub mod config;
pub mod network;

pub use config::*;
pub use network::*;
