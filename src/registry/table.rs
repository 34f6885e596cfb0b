//! Built-in deployment table

use alloy::primitives::address;
use lazy_static::lazy_static;

use super::NetworkRegistry;
use crate::types::{NetworkConfig, NetworkKey, UNDEPLOYED};

lazy_static! {
    /// Process-wide registry of the shipped deployment table.
    pub static ref NETWORKS: NetworkRegistry = builtin();
}

fn builtin() -> NetworkRegistry {
    NetworkRegistry::from_entries(vec![
        (
            NetworkKey::Eth,
            NetworkConfig {
                wrapped_native: address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
                native_currency_label: "ETH".to_owned(),
                v2_factory: address!("1097053Fd2ea711dad45caCcc45EfF7548fCB362"),
                stable_factory: UNDEPLOYED,
                stable_info: UNDEPLOYED,
                cake: address!("152649eA73beAb28c5b49B26eb48f7EAD6d4c898"),
                smart_router_helper: address!("dAecee3C08e953Bd5f89A5Cc90ac560413d709E3"),
            },
        ),
        (
            NetworkKey::Goerli,
            NetworkConfig {
                wrapped_native: address!("B4FBF271143F4FBf7B91A5ded31805e42b2208d6"),
                native_currency_label: "GOR".to_owned(),
                v2_factory: address!("1097053Fd2ea711dad45caCcc45EfF7548fCB362"),
                stable_factory: UNDEPLOYED,
                stable_info: UNDEPLOYED,
                cake: address!("c2C3eAbE0368a2Ea97f485b03D1098cdD7d0c081"),
                smart_router_helper: address!("dAecee3C08e953Bd5f89A5Cc90ac560413d709E3"),
            },
        ),
        (
            NetworkKey::BscMainnet,
            NetworkConfig {
                wrapped_native: address!("bb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c"),
                native_currency_label: "BNB".to_owned(),
                v2_factory: address!("cA143Ce32Fe78f1f7019d7d551a6402fC5350c73"),
                stable_factory: address!("25a55f9f2279a54951133d503490342b50e5cd15"),
                stable_info: address!("150c8AbEB487137acCC541925408e73b92F39A50"),
                cake: address!("0E09FaBB73Bd3Ade0a17ECC321fD13a19e81cE82"),
                smart_router_helper: address!("dAecee3C08e953Bd5f89A5Cc90ac560413d709E3"),
            },
        ),
        (
            NetworkKey::BscTestnet,
            NetworkConfig {
                wrapped_native: address!("ae13d989daC2f0dEbFf460aC112a837C89BAa7cd"),
                native_currency_label: "tBNB".to_owned(),
                v2_factory: address!("6725f303b657a9451d8ba641348b6761a6cc7a17"),
                stable_factory: address!("e6A00f8b819244e8Ab9Ea930e46449C2F20B6609"),
                stable_info: address!("0A548d59D04096Bc01206D58C3D63c478e1e06dB"),
                cake: address!("8d008B313C1d6C7fE2982F62d32Da7507cF43551"),
                smart_router_helper: address!("dAecee3C08e953Bd5f89A5Cc90ac560413d709E3"),
            },
        ),
        (
            NetworkKey::FtmTestnet,
            NetworkConfig {
                wrapped_native: address!("7eB9763f5eF3bFb84CE6f31b324e7619bFA1ca37"),
                native_currency_label: "tFTM".to_owned(),
                v2_factory: address!("1E2BF4F0806DC66cE5c2C1298d67C578E9FC1Ff1"),
                stable_factory: address!("17328E2AF2c6a01B6BC8f25b400ba2808b8478C9"),
                stable_info: address!("725538a02366112AE3434D0F50B82D296190C202"),
                cake: address!("bE04187288D198ed6F0d90eCAAca0fE42Dd434Fe"),
                smart_router_helper: address!("c0B50e0dcBb281084Ff10F923eB559219482A30e"),
            },
        ),
        (
            NetworkKey::Hardhat,
            NetworkConfig {
                wrapped_native: UNDEPLOYED,
                native_currency_label: "BNB".to_owned(),
                v2_factory: UNDEPLOYED,
                stable_factory: address!("6725F303b657a9451d8BA641348b6761A6CC7a17"),
                stable_info: address!("0a4922aD4400c920144adec825B8d4D814C48303"),
                cake: UNDEPLOYED,
                smart_router_helper: address!("dAecee3C08e953Bd5f89A5Cc90ac560413d709E3"),
            },
        ),
    ])
}
