//! Custom error types for the registry

use crate::types::NetworkKey;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("unknown network '{name}' (known networks: {known})")]
    UnknownNetwork { name: String, known: String },

    #[error("network table failed validation ({} malformed fields)", .0.len())]
    Validation(Vec<ValidationError>),

    #[error("failed to read network table from {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("network table is not a valid JSON document")]
    Parse {
        #[source]
        source: serde_json::Error,
    },
}

impl RegistryError {
    pub(crate) fn unknown_network(name: &str) -> Self {
        let known = NetworkKey::ALL.map(|key| key.as_str()).join(", ");
        Self::UnknownNetwork {
            name: name.to_owned(),
            known,
        }
    }
}

/// One malformed field in a network table, named by network and field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{network}: {field}: {reason}")]
pub struct ValidationError {
    pub network: NetworkKey,
    pub field: &'static str,
    pub reason: String,
}

pub type RegistryResult<T> = Result<T, RegistryError>;
