//! Source verification on a block explorer.

use raffle::msg::InstantiateMsg;
use serde::Serialize;

use crate::error::VerifyError;

pub const EXPLORER_API_URL_ENV: &str = "EXPLORER_API_URL";
pub const EXPLORER_API_KEY_ENV: &str = "EXPLORER_API_KEY";

/// What an explorer needs to match an on-chain contract with its sources
#[derive(Clone, Debug, Serialize)]
pub struct VerificationRequest<'a> {
    pub chain_id: String,
    pub address: String,
    pub code_id: u64,
    pub contract_name: String,
    pub contract_version: String,
    pub init_msg: &'a InstantiateMsg,
}

pub trait SourceVerifier {
    fn verify(&self, request: &VerificationRequest<'_>) -> Result<(), VerifyError>;
}

/// Posts verification requests to an explorer API, authenticated with an api key
pub struct ExplorerVerifier {
    client: reqwest::blocking::Client,
    api_url: String,
    api_key: String,
}

impl ExplorerVerifier {
    /// `None` unless both the api url and the api key are set
    pub fn from_env() -> Option<Self> {
        let api_url = std::env::var(EXPLORER_API_URL_ENV).ok()?;
        let api_key = std::env::var(EXPLORER_API_KEY_ENV).ok()?;
        Some(Self::new(api_url, api_key))
    }

    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }
}

impl SourceVerifier for ExplorerVerifier {
    fn verify(&self, request: &VerificationRequest<'_>) -> Result<(), VerifyError> {
        log::info!(
            "Verifying {} on {} with {}",
            request.address,
            request.chain_id,
            self.api_url
        );
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(VerifyError::Rejected {
                status: status.as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }
        Ok(())
    }
}
