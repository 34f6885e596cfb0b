//! Custom error types for the registry

pub mod registry_error;

pub use registry_error::*;
