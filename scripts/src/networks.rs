//! Per-network deployment parameters, keyed by chain id.

use std::{collections::BTreeMap, fs, path::Path};

use cosmwasm_std::{coin, Coin, HexBinary};
use serde::{Deserialize, Serialize};
use utils::state::NATIVE_DENOM;

use crate::error::DeployError;

pub const LOCAL_CHAIN_ID: &str = "local";

/// 500 gwei key hash, used on every network we deploy to
pub const DEFAULT_GAS_LANE: &str =
    "d89b2bf150e3b9e13446986e571fb9cab24b13cea0a43ea20a6049a85cc807cc";
pub const DEFAULT_CALLBACK_GAS_LIMIT: u32 = 500_000;
pub const DEFAULT_INTERVAL: u64 = 30;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub name: String,
    /// Local chains get a freshly deployed coordinator mock and subscription
    #[serde(default)]
    pub local: bool,
    pub entrance_fee: Coin,
    #[serde(default)]
    pub vrf_coordinator: Option<String>,
    /// 32 bytes, hex encoded
    pub gas_lane: String,
    #[serde(default)]
    pub subscription_id: Option<u64>,
    pub callback_gas_limit: u32,
    /// Seconds between two draws
    pub interval: u64,
    #[serde(default)]
    pub block_confirmations: u64,
}

impl NetworkConfig {
    pub fn gas_lane(&self) -> Result<HexBinary, DeployError> {
        let gas_lane = self.gas_lane.trim_start_matches("0x");
        HexBinary::from_hex(gas_lane).map_err(|e| DeployError::InvalidGasLane {
            gas_lane: self.gas_lane.clone(),
            reason: e.to_string(),
        })
    }
}

/// Every network the raffle knows how to deploy to
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkTable(BTreeMap<String, NetworkConfig>);

impl NetworkTable {
    pub fn new(networks: BTreeMap<String, NetworkConfig>) -> Self {
        Self(networks)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DeployError> {
        let path = path.as_ref();
        let table_error = |reason: String| DeployError::NetworkTable {
            path: path.display().to_string(),
            reason,
        };
        let content = fs::read_to_string(path).map_err(|e| table_error(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| table_error(e.to_string()))
    }

    pub fn get(&self, chain_id: &str) -> Result<&NetworkConfig, DeployError> {
        self.0
            .get(chain_id)
            .ok_or_else(|| DeployError::UnknownNetwork {
                chain_id: chain_id.to_string(),
            })
    }

    pub fn chain_ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl Default for NetworkTable {
    fn default() -> Self {
        let mut networks = BTreeMap::new();
        networks.insert(
            LOCAL_CHAIN_ID.to_string(),
            NetworkConfig {
                name: "local".to_string(),
                local: true,
                entrance_fee: coin(10_000_000, NATIVE_DENOM),
                vrf_coordinator: None,
                gas_lane: DEFAULT_GAS_LANE.to_string(),
                subscription_id: None,
                callback_gas_limit: DEFAULT_CALLBACK_GAS_LIMIT,
                interval: DEFAULT_INTERVAL,
                block_confirmations: 0,
            },
        );
        // Public networks get their coordinator and subscription from `NETWORKS_FILE`
        networks.insert(
            "elgafar-1".to_string(),
            NetworkConfig {
                name: "elgafar".to_string(),
                local: false,
                entrance_fee: coin(10_000_000, NATIVE_DENOM),
                vrf_coordinator: None,
                gas_lane: DEFAULT_GAS_LANE.to_string(),
                subscription_id: None,
                callback_gas_limit: DEFAULT_CALLBACK_GAS_LIMIT,
                interval: DEFAULT_INTERVAL,
                block_confirmations: 6,
            },
        );
        networks.insert(
            "stargaze-1".to_string(),
            NetworkConfig {
                name: "stargaze".to_string(),
                local: false,
                entrance_fee: coin(10_000_000, NATIVE_DENOM),
                vrf_coordinator: None,
                gas_lane: DEFAULT_GAS_LANE.to_string(),
                subscription_id: None,
                callback_gas_limit: DEFAULT_CALLBACK_GAS_LIMIT,
                interval: DEFAULT_INTERVAL,
                block_confirmations: 6,
            },
        );
        Self(networks)
    }
}
