//! Load a network table from a companion JSON document
//!
//! The document mirrors the built-in table: an object keyed by network
//! name, each value carrying the same fields as [`NetworkConfig`]. The
//! table is format-checked before the registry is handed out; a document
//! that fails validation never becomes a registry.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::{NetworkRegistry, validation};
use crate::errors::{RegistryError, RegistryResult, ValidationError};
use crate::types::{NetworkConfig, NetworkKey, UNDEPLOYED};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawNetworkConfig {
    #[serde(rename = "WNATIVE")]
    wrapped_native: String,
    #[serde(rename = "nativeCurrencyLabel")]
    native_currency_label: String,
    #[serde(rename = "v2Factory")]
    v2_factory: String,
    #[serde(rename = "stableFactory")]
    stable_factory: String,
    #[serde(rename = "stableInfo")]
    stable_info: String,
    cake: String,
    #[serde(rename = "smartRouterHelper")]
    smart_router_helper: String,
}

impl NetworkRegistry {
    /// Read and validate a network table from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> RegistryResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_owned(),
            source,
        })?;
        let registry = Self::from_json_str(&text)?;
        debug!(
            path = %path.display(),
            networks = registry.len(),
            "loaded network table"
        );
        Ok(registry)
    }

    /// Parse and validate a network table from JSON text.
    ///
    /// Entries keep the document's declaration order. Unknown network names
    /// and malformed fields are both rejected.
    pub fn from_json_str(text: &str) -> RegistryResult<Self> {
        let document: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(text).map_err(|source| RegistryError::Parse { source })?;

        let mut entries = Vec::with_capacity(document.len());
        let mut errors = Vec::new();
        for (name, value) in document {
            let key: NetworkKey = name.parse()?;
            let raw: RawNetworkConfig = serde_json::from_value(value)
                .map_err(|source| RegistryError::Parse { source })?;
            match convert(key, raw) {
                Ok(config) => entries.push((key, config)),
                Err(mut field_errors) => errors.append(&mut field_errors),
            }
        }

        let registry = Self::from_entries(entries);
        errors.extend(registry.validate());
        if !errors.is_empty() {
            return Err(RegistryError::Validation(errors));
        }
        Ok(registry)
    }
}

fn convert(key: NetworkKey, raw: RawNetworkConfig) -> Result<NetworkConfig, Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut parse = |field, value: &str| {
        validation::parse_address(key, field, value).unwrap_or_else(|err| {
            errors.push(err);
            UNDEPLOYED
        })
    };

    let wrapped_native = parse("WNATIVE", &raw.wrapped_native);
    let v2_factory = parse("v2Factory", &raw.v2_factory);
    let stable_factory = parse("stableFactory", &raw.stable_factory);
    let stable_info = parse("stableInfo", &raw.stable_info);
    let cake = parse("cake", &raw.cake);
    let smart_router_helper = parse("smartRouterHelper", &raw.smart_router_helper);
    drop(parse);

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(NetworkConfig {
        wrapped_native,
        native_currency_label: raw.native_currency_label,
        v2_factory,
        stable_factory,
        stable_info,
        cake,
        smart_router_helper,
    })
}
