use cosmwasm_std::{coin, Addr, Coin, HexBinary, Uint128};
use cw_multi_test::{App, Executor};
use raffle::msg::InstantiateMsg;
use scripts::{
    deploy::{MOCK_BASE_FEE, MOCK_GAS_PRICE, SUBSCRIPTION_FUND_AMOUNT},
    networks::{DEFAULT_CALLBACK_GAS_LIMIT, DEFAULT_GAS_LANE, DEFAULT_INTERVAL},
};
use utils::state::{NATIVE_DENOM, ORACLE_FEE_DENOM};
use vrf::SUB_ID_ATTRIBUTE;
use vrf_coordinator_mock::msg::{
    ExecuteMsg as CoordinatorExecuteMsg, InstantiateMsg as CoordinatorInstantiateMsg,
};

use super::{
    contract_boxes::{contract_raffle, contract_vrf_coordinator_mock, custom_mock_app},
    helpers::event_attribute,
    msg::RaffleContracts,
    setup_accounts_and_block::setup_accounts,
};

pub const ENTRANCE_FEE: u128 = 10_000_000;
pub const INTERVAL: u64 = DEFAULT_INTERVAL;
pub const CALLBACK_GAS_LIMIT: u32 = DEFAULT_CALLBACK_GAS_LIMIT;
/// What the mock takes from the subscription for every draw
pub const REQUEST_FEE: u128 = MOCK_BASE_FEE + MOCK_GAS_PRICE * CALLBACK_GAS_LIMIT as u128;

pub fn gas_lane() -> HexBinary {
    HexBinary::from_hex(DEFAULT_GAS_LANE).unwrap()
}

pub fn raffle_instantiate_msg(coordinator: &Addr, sub_id: u64, entrance_fee: Coin) -> InstantiateMsg {
    InstantiateMsg {
        vrf_coordinator: coordinator.to_string(),
        entrance_fee,
        gas_lane: gas_lane(),
        subscription_id: sub_id,
        callback_gas_limit: CALLBACK_GAS_LIMIT,
        interval: INTERVAL,
    }
}

pub fn instantiate_coordinator(app: &mut App, owner: &Addr) -> Addr {
    let code_id = app.store_code(contract_vrf_coordinator_mock());
    app.instantiate_contract(
        code_id,
        owner.clone(),
        &CoordinatorInstantiateMsg {
            base_fee: Uint128::new(MOCK_BASE_FEE),
            gas_price: Uint128::new(MOCK_GAS_PRICE),
            fee_denom: ORACLE_FEE_DENOM.to_string(),
        },
        &[],
        "vrf-coordinator-mock",
        None,
    )
    .unwrap()
}

pub fn create_subscription(app: &mut App, owner: &Addr, coordinator: &Addr, amount: u128) -> u64 {
    let res = app
        .execute_contract(
            owner.clone(),
            coordinator.clone(),
            &CoordinatorExecuteMsg::CreateSubscription {},
            &[],
        )
        .unwrap();
    let sub_id = event_attribute(&res, "wasm", SUB_ID_ATTRIBUTE)
        .unwrap()
        .parse()
        .unwrap();
    app.execute_contract(
        owner.clone(),
        coordinator.clone(),
        &CoordinatorExecuteMsg::FundSubscription {
            sub_id,
            amount: Uint128::new(amount),
        },
        &[],
    )
    .unwrap();
    sub_id
}

pub fn add_consumer(app: &mut App, owner: &Addr, coordinator: &Addr, sub_id: u64, consumer: &Addr) {
    app.execute_contract(
        owner.clone(),
        coordinator.clone(),
        &CoordinatorExecuteMsg::AddConsumer {
            sub_id,
            consumer: consumer.to_string(),
        },
        &[],
    )
    .unwrap();
}

/// Coordinator mock, funded subscription, and a raffle registered as its consumer
pub fn proper_raffle_instantiate() -> (App, RaffleContracts) {
    raffle_instantiate_with_fee(coin(ENTRANCE_FEE, NATIVE_DENOM))
}

pub fn raffle_instantiate_with_fee(entrance_fee: Coin) -> (App, RaffleContracts) {
    let mut app = custom_mock_app();
    let (owner, _) = setup_accounts(&mut app);

    let coordinator = instantiate_coordinator(&mut app, &owner);
    let sub_id = create_subscription(&mut app, &owner, &coordinator, SUBSCRIPTION_FUND_AMOUNT);

    let raffle_code_id = app.store_code(contract_raffle());
    let raffle = app
        .instantiate_contract(
            raffle_code_id,
            owner.clone(),
            &raffle_instantiate_msg(&coordinator, sub_id, entrance_fee),
            &[],
            "raffle",
            Some(owner.to_string()),
        )
        .unwrap();
    add_consumer(&mut app, &owner, &coordinator, sub_id, &raffle);

    (
        app,
        RaffleContracts {
            raffle,
            coordinator,
            owner,
            sub_id,
        },
    )
}
