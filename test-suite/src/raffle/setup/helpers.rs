use anyhow::Error as anyhow_error;
use cosmwasm_std::{coins, Addr, Binary, Coin, Timestamp, Uint256};
use cw_multi_test::{App, AppResponse, Executor};
use raffle::{
    msg::{CheckUpkeepResponse, ExecuteMsg, QueryMsg},
    state::RaffleState,
};
use utils::state::NATIVE_DENOM;
use vrf::REQUEST_ID_ATTRIBUTE;
use vrf_coordinator_mock::msg::ExecuteMsg as CoordinatorExecuteMsg;

use crate::common_setup::{
    helpers::{event_attribute, plus_block_seconds},
    msg::RaffleContracts,
    setup_raffle::{ENTRANCE_FEE, INTERVAL},
};

pub fn enter_raffle(
    app: &mut App,
    contracts: &RaffleContracts,
    player: &Addr,
    funds: &[Coin],
) -> Result<AppResponse, anyhow_error> {
    app.execute_contract(
        player.clone(),
        contracts.raffle.clone(),
        &ExecuteMsg::EnterRaffle {},
        funds,
    )
}

/// Every player enters with exactly the entrance fee, then the interval elapses
pub fn enter_and_wait_interval(app: &mut App, contracts: &RaffleContracts, players: &[Addr]) {
    for player in players {
        enter_raffle(app, contracts, player, &coins(ENTRANCE_FEE, NATIVE_DENOM)).unwrap();
    }
    plus_block_seconds(app, INTERVAL + 1);
}

pub fn perform_upkeep(
    app: &mut App,
    contracts: &RaffleContracts,
    sender: &Addr,
) -> Result<AppResponse, anyhow_error> {
    app.execute_contract(
        sender.clone(),
        contracts.raffle.clone(),
        &ExecuteMsg::PerformUpkeep {
            perform_data: Binary::default(),
        },
        &[],
    )
}

/// Request id carried by the raffle's `requested_raffle_winner` event
pub fn requested_id(res: &AppResponse) -> u64 {
    event_attribute(res, "wasm-requested_raffle_winner", REQUEST_ID_ATTRIBUTE)
        .unwrap()
        .parse()
        .unwrap()
}

/// Anyone can ask the mock to answer a request
pub fn fulfill_random_words(
    app: &mut App,
    contracts: &RaffleContracts,
    request_id: u64,
) -> Result<AppResponse, anyhow_error> {
    app.execute_contract(
        contracts.owner.clone(),
        contracts.coordinator.clone(),
        &CoordinatorExecuteMsg::FulfillRandomWords {
            request_id,
            consumer: contracts.raffle.to_string(),
        },
        &[],
    )
}

pub fn fulfill_with_words(
    app: &mut App,
    contracts: &RaffleContracts,
    request_id: u64,
    words: Vec<Uint256>,
) -> Result<AppResponse, anyhow_error> {
    app.execute_contract(
        contracts.owner.clone(),
        contracts.coordinator.clone(),
        &CoordinatorExecuteMsg::FulfillRandomWordsWithOverride {
            request_id,
            consumer: contracts.raffle.to_string(),
            words,
        },
        &[],
    )
}

pub fn check_upkeep(app: &App, contracts: &RaffleContracts) -> bool {
    let res: CheckUpkeepResponse = app
        .wrap()
        .query_wasm_smart(
            contracts.raffle.clone(),
            &QueryMsg::CheckUpkeep {
                check_data: Binary::default(),
            },
        )
        .unwrap();
    assert!(res.perform_data.is_empty());
    res.upkeep_needed
}

pub fn raffle_state(app: &App, contracts: &RaffleContracts) -> RaffleState {
    app.wrap()
        .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::RaffleState {})
        .unwrap()
}

pub fn number_of_players(app: &App, contracts: &RaffleContracts) -> u64 {
    app.wrap()
        .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::NumberOfPlayers {})
        .unwrap()
}

pub fn player(app: &App, contracts: &RaffleContracts, index: u64) -> cosmwasm_std::StdResult<Addr> {
    app.wrap()
        .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::Player { index })
}

pub fn recent_winner(app: &App, contracts: &RaffleContracts) -> Option<Addr> {
    app.wrap()
        .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::RecentWinner {})
        .unwrap()
}

pub fn latest_timestamp(app: &App, contracts: &RaffleContracts) -> Timestamp {
    app.wrap()
        .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::LatestTimestamp {})
        .unwrap()
}

pub fn pending_request(app: &App, contracts: &RaffleContracts) -> Option<u64> {
    app.wrap()
        .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::PendingRequest {})
        .unwrap()
}

pub fn native_balance(app: &App, address: &Addr) -> u128 {
    app.wrap()
        .query_balance(address, NATIVE_DENOM)
        .unwrap()
        .amount
        .u128()
}
