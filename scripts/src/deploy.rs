//! Deploys the raffle, and the coordinator mock it draws from on local chains.

use cosmwasm_std::{Addr, Uint128};
use cw_orch::prelude::*;
use raffle::{msg::InstantiateMsg, Raffle};
use utils::state::ORACLE_FEE_DENOM;
use vrf::SUB_ID_ATTRIBUTE;
use vrf_coordinator_mock::{msg as mock_msg, VrfCoordinatorMock};

use crate::{
    error::DeployError,
    networks::NetworkConfig,
    verify::{SourceVerifier, VerificationRequest},
};

/// Flat fee of the mock coordinator, in `ulink`
pub const MOCK_BASE_FEE: u128 = 250_000;
/// `ulink` charged per unit of callback gas
pub const MOCK_GAS_PRICE: u128 = 1;
/// Funding of the subscription created on local chains
pub const SUBSCRIPTION_FUND_AMOUNT: u128 = 30_000_000;

#[derive(Clone, Debug, PartialEq)]
pub enum VerificationStatus {
    Skipped,
    Verified,
    Failed(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct DeploymentRecord {
    pub chain_id: String,
    pub address: Addr,
    pub code_id: u64,
    /// Constructor arguments the raffle was instantiated with
    pub init_msg: InstantiateMsg,
    pub verification: VerificationStatus,
}

/// Uploads and instantiates the coordinator mock, unless this chain already has one
pub fn deploy_mocks<Chain: CwEnv>(chain: Chain) -> Result<VrfCoordinatorMock<Chain>, DeployError> {
    let coordinator = VrfCoordinatorMock::new(chain);
    if let Ok(address) = coordinator.address() {
        log::info!("Coordinator mock already deployed at {address}");
        return Ok(coordinator);
    }

    log::info!("Local network detected! Deploying mocks...");
    coordinator.upload()?;
    coordinator.instantiate(
        &mock_msg::InstantiateMsg {
            base_fee: Uint128::new(MOCK_BASE_FEE),
            gas_price: Uint128::new(MOCK_GAS_PRICE),
            fee_denom: ORACLE_FEE_DENOM.to_string(),
        },
        None,
        &[],
    )?;
    log::info!("Mocks deployed at {}", coordinator.address()?);

    Ok(coordinator)
}

/// Creates a subscription owned by the chain sender and funds it. Returns the subscription id.
pub fn create_funded_subscription<Chain: CwEnv>(
    coordinator: &VrfCoordinatorMock<Chain>,
    amount: Uint128,
) -> Result<u64, DeployError> {
    let response = coordinator.execute(&mock_msg::ExecuteMsg::CreateSubscription {}, &[])?;
    let value = response.event_attr_value("wasm", SUB_ID_ATTRIBUTE)?;
    let sub_id = value
        .parse::<u64>()
        .map_err(|_| DeployError::InvalidEventAttribute {
            key: SUB_ID_ATTRIBUTE,
            value,
        })?;

    coordinator.execute(
        &mock_msg::ExecuteMsg::FundSubscription { sub_id, amount },
        &[],
    )?;
    log::info!("Subscription {sub_id} created and funded with {amount}{ORACLE_FEE_DENOM}");

    Ok(sub_id)
}

/// Deploys the raffle with the parameters of `network`.
///
/// On local networks the coordinator mock is deployed first and a fresh subscription backs the
/// raffle. On public networks the coordinator and the subscription must come from the table.
/// A failed source verification is logged and recorded, the deployment still succeeds.
pub fn deploy_raffle<Chain: CwEnv>(
    chain: Chain,
    chain_id: &str,
    network: &NetworkConfig,
    verifier: Option<&dyn SourceVerifier>,
) -> Result<DeploymentRecord, DeployError> {
    let mut local_subscription = None;
    let (vrf_coordinator, subscription_id) = if network.local {
        let coordinator = deploy_mocks(chain.clone())?;
        let sub_id =
            create_funded_subscription(&coordinator, Uint128::new(SUBSCRIPTION_FUND_AMOUNT))?;
        let address = coordinator.address()?;
        local_subscription = Some((coordinator, sub_id));
        (address.to_string(), sub_id)
    } else {
        let missing = |parameter| DeployError::MissingParameter {
            chain_id: chain_id.to_string(),
            parameter,
        };
        (
            network
                .vrf_coordinator
                .clone()
                .ok_or_else(|| missing("vrf_coordinator"))?,
            network
                .subscription_id
                .ok_or_else(|| missing("subscription_id"))?,
        )
    };

    let init_msg = InstantiateMsg {
        vrf_coordinator,
        entrance_fee: network.entrance_fee.clone(),
        gas_lane: network.gas_lane()?,
        subscription_id,
        callback_gas_limit: network.callback_gas_limit,
        interval: network.interval,
    };

    log::info!("Deploying Raffle on {chain_id}...");
    let raffle = Raffle::new(chain.clone());
    raffle.upload()?;
    raffle.instantiate(&init_msg, Some(&chain.sender_addr()), &[])?;
    let address = raffle.address()?;
    let code_id = raffle.code_id()?;
    log::info!("Raffle deployed at {address} (code id {code_id})");

    if let Some((coordinator, sub_id)) = local_subscription {
        coordinator.execute(
            &mock_msg::ExecuteMsg::AddConsumer {
                sub_id,
                consumer: address.to_string(),
            },
            &[],
        )?;
        log::info!("Raffle added as a consumer of subscription {sub_id}");
    }

    if network.block_confirmations > 0 {
        log::info!("Waiting for {} blocks", network.block_confirmations);
        chain
            .wait_blocks(network.block_confirmations)
            .map_err(Into::<CwOrchError>::into)?;
    }

    let verification = match verifier {
        Some(verifier) if !network.local => {
            let request = VerificationRequest {
                chain_id: chain_id.to_string(),
                address: address.to_string(),
                code_id,
                contract_name: raffle.id(),
                contract_version: env!("CARGO_PKG_VERSION").to_string(),
                init_msg: &init_msg,
            };
            match verifier.verify(&request) {
                Ok(()) => VerificationStatus::Verified,
                Err(e) => {
                    log::warn!("Verification of {address} failed: {e}");
                    VerificationStatus::Failed(e.to_string())
                }
            }
        }
        _ => VerificationStatus::Skipped,
    };

    Ok(DeploymentRecord {
        chain_id: chain_id.to_string(),
        address,
        code_id,
        init_msg,
        verification,
    })
}
