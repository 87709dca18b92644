use cosmwasm_std::StdError;
use cw_orch::prelude::CwOrchError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("{0}")]
    CwOrch(#[from] CwOrchError),

    #[error("{0}")]
    Std(#[from] StdError),

    #[error("No network parameters for chain id {chain_id}")]
    UnknownNetwork { chain_id: String },

    #[error("Network {chain_id} is missing the {parameter} parameter")]
    MissingParameter {
        chain_id: String,
        parameter: &'static str,
    },

    #[error("Invalid gas lane {gas_lane}: {reason}")]
    InvalidGasLane { gas_lane: String, reason: String },

    #[error("Event attribute {key} has an unexpected value: {value}")]
    InvalidEventAttribute { key: &'static str, value: String },

    #[error("Could not read network table {path}: {reason}")]
    NetworkTable { path: String, reason: String },
}

#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("Explorer rejected the verification ({status}): {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("{path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}
