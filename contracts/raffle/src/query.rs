use cosmwasm_std::{Addr, Binary, Coin, Deps, Env, StdError, StdResult, Timestamp};

use crate::{
    msg::{CheckUpkeepResponse, ConfigResponse},
    state::{
        RaffleState, CONFIG, LAST_TIMESTAMP, PENDING_REQUEST, PLAYERS, RAFFLE_STATE,
        RECENT_WINNER,
    },
    utils::get_upkeep_status,
};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        vrf_coordinator: config.vrf_coordinator,
        entrance_fee: config.entrance_fee,
        gas_lane: config.gas_lane,
        subscription_id: config.subscription_id,
        callback_gas_limit: config.callback_gas_limit,
        interval: config.interval,
    })
}

/// `perform_data` is always empty, `check_data` is ignored
pub fn query_check_upkeep(
    deps: Deps,
    env: Env,
    _check_data: Binary,
) -> StdResult<CheckUpkeepResponse> {
    let status = get_upkeep_status(deps, &env)?;
    Ok(CheckUpkeepResponse {
        upkeep_needed: status.is_needed(),
        perform_data: Binary::default(),
    })
}

pub fn query_entrance_fee(deps: Deps) -> StdResult<Coin> {
    Ok(CONFIG.load(deps.storage)?.entrance_fee)
}

pub fn query_raffle_state(deps: Deps) -> StdResult<RaffleState> {
    RAFFLE_STATE.load(deps.storage)
}

pub fn query_player(deps: Deps, index: u64) -> StdResult<Addr> {
    let out_of_range = || StdError::generic_err(format!("No player at index {index}"));
    let position = u32::try_from(index).map_err(|_| out_of_range())?;
    PLAYERS.get(deps.storage, position)?.ok_or_else(out_of_range)
}

pub fn query_number_of_players(deps: Deps) -> StdResult<u64> {
    Ok(PLAYERS.len(deps.storage)?.into())
}

pub fn query_recent_winner(deps: Deps) -> StdResult<Option<Addr>> {
    RECENT_WINNER.may_load(deps.storage)
}

pub fn query_latest_timestamp(deps: Deps) -> StdResult<Timestamp> {
    LAST_TIMESTAMP.load(deps.storage)
}

pub fn query_interval(deps: Deps) -> StdResult<u64> {
    Ok(CONFIG.load(deps.storage)?.interval)
}

pub fn query_pending_request(deps: Deps) -> StdResult<Option<u64>> {
    PENDING_REQUEST.may_load(deps.storage)
}
