#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response, StdResult,
};
use cw2::set_contract_version;

use crate::{
    error::ContractError,
    execute::{
        execute_enter_raffle, execute_fulfill_random_words, execute_perform_upkeep,
        handle_payout_reply, handle_randomness_request_reply,
    },
    msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg},
    query::{
        query_check_upkeep, query_config, query_entrance_fee, query_interval,
        query_latest_timestamp, query_number_of_players, query_pending_request, query_player,
        query_raffle_state, query_recent_winner,
    },
    state::{
        Config, RaffleState, CONFIG, LAST_TIMESTAMP, NUM_WORDS, RAFFLE_STATE,
        REQUEST_CONFIRMATIONS,
    },
};

pub const REQUEST_RANDOMNESS_REPLY_ID: u64 = 1;
pub const PAYOUT_REPLY_ID: u64 = 2;

const GAS_LANE_LEN: usize = 32;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let vrf_coordinator = deps.api.addr_validate(&msg.vrf_coordinator)?;

    if msg.gas_lane.len() != GAS_LANE_LEN {
        return Err(ContractError::InvalidGasLane {
            len: msg.gas_lane.len(),
        });
    }

    let config = Config {
        vrf_coordinator,
        entrance_fee: msg.entrance_fee,
        gas_lane: msg.gas_lane,
        subscription_id: msg.subscription_id,
        callback_gas_limit: msg.callback_gas_limit,
        interval: msg.interval,
    };

    CONFIG.save(deps.storage, &config)?;
    RAFFLE_STATE.save(deps.storage, &RaffleState::Open)?;
    LAST_TIMESTAMP.save(deps.storage, &env.block.time)?;
    set_contract_version(
        deps.storage,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    )?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("vrf_coordinator", config.vrf_coordinator)
        .add_attribute("entrance_fee", config.entrance_fee.to_string())
        .add_attribute("interval", config.interval.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::EnterRaffle {} => execute_enter_raffle(deps, env, info),
        ExecuteMsg::PerformUpkeep { perform_data } => {
            execute_perform_upkeep(deps, env, perform_data)
        }
        ExecuteMsg::FulfillRandomWords {
            request_id,
            random_words,
        } => execute_fulfill_random_words(deps, env, info, request_id, random_words),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::CheckUpkeep { check_data } => {
            to_json_binary(&query_check_upkeep(deps, env, check_data)?)
        }
        QueryMsg::EntranceFee {} => to_json_binary(&query_entrance_fee(deps)?),
        QueryMsg::RaffleState {} => to_json_binary(&query_raffle_state(deps)?),
        QueryMsg::Player { index } => to_json_binary(&query_player(deps, index)?),
        QueryMsg::NumberOfPlayers {} => to_json_binary(&query_number_of_players(deps)?),
        QueryMsg::RecentWinner {} => to_json_binary(&query_recent_winner(deps)?),
        QueryMsg::LatestTimestamp {} => to_json_binary(&query_latest_timestamp(deps)?),
        QueryMsg::Interval {} => to_json_binary(&query_interval(deps)?),
        QueryMsg::NumWords {} => to_json_binary(&NUM_WORDS),
        QueryMsg::RequestConfirmations {} => to_json_binary(&REQUEST_CONFIRMATIONS),
        QueryMsg::PendingRequest {} => to_json_binary(&query_pending_request(deps)?),
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        REQUEST_RANDOMNESS_REPLY_ID => handle_randomness_request_reply(deps, env, msg),
        PAYOUT_REPLY_ID => handle_payout_reply(msg),
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> StdResult<Response> {
    set_contract_version(
        deps.storage,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    )?;
    Ok(Response::default())
}
