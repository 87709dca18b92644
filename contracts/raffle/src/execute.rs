use cosmwasm_std::{
    coins, BankMsg, Binary, DepsMut, Env, Event, MessageInfo, Reply, Response, StdError, SubMsg,
    Uint256,
};
use utils::payment::paid_amount;
use vrf::REQUEST_ID_ATTRIBUTE;

use crate::{
    contract::PAYOUT_REPLY_ID,
    contract::REQUEST_RANDOMNESS_REPLY_ID,
    error::ContractError,
    state::{
        RaffleState, CONFIG, LAST_TIMESTAMP, PENDING_REQUEST, PLAYERS, RAFFLE_STATE,
        RECENT_WINNER,
    },
    utils::{get_randomness_request, get_upkeep_status, get_winner_index},
};

pub fn execute_enter_raffle(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let sent = paid_amount(&info, &config.entrance_fee.denom)?;
    if sent < config.entrance_fee.amount {
        return Err(ContractError::NotEnoughValue {
            sent,
            required: config.entrance_fee.amount,
        });
    }
    if RAFFLE_STATE.load(deps.storage)? != RaffleState::Open {
        return Err(ContractError::NotOpen);
    }

    PLAYERS.push_back(deps.storage, &info.sender)?;

    Ok(Response::new()
        .add_event(Event::new("raffle_enter").add_attribute("player", info.sender.as_str()))
        .add_attribute("action", "enter_raffle")
        .add_attribute("player", info.sender))
}

/// Closes the round and asks the coordinator for a random word.
/// The request id only comes back in the reply, see [`handle_randomness_request_reply`].
pub fn execute_perform_upkeep(
    deps: DepsMut,
    env: Env,
    _perform_data: Binary,
) -> Result<Response, ContractError> {
    let status = get_upkeep_status(deps.as_ref(), &env)?;
    if !status.is_needed() {
        return Err(status.into_error());
    }

    let config = CONFIG.load(deps.storage)?;
    RAFFLE_STATE.save(deps.storage, &RaffleState::Calculating)?;

    let request = get_randomness_request(&config)?;

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_success(
            request,
            REQUEST_RANDOMNESS_REPLY_ID,
        ))
        .add_attribute("action", "perform_upkeep")
        .add_attribute("players", status.players.to_string())
        .add_attribute("balance", status.balance))
}

pub fn handle_randomness_request_reply(
    deps: DepsMut,
    _env: Env,
    msg: Reply,
) -> Result<Response, ContractError> {
    let response = msg.result.into_result().map_err(StdError::generic_err)?;

    let request_id = response
        .events
        .iter()
        .filter(|e| e.ty == "wasm")
        .flat_map(|e| e.attributes.iter())
        .find(|attr| attr.key == REQUEST_ID_ATTRIBUTE)
        .ok_or(ContractError::NoRequestIdReturned)?
        .value
        .parse::<u64>()
        .map_err(|_| ContractError::NoRequestIdReturned)?;

    PENDING_REQUEST.save(deps.storage, &request_id)?;

    Ok(Response::new().add_event(
        Event::new("requested_raffle_winner")
            .add_attribute(REQUEST_ID_ATTRIBUTE, request_id.to_string()),
    ))
}

/// Picks the winner with the coordinator's randomness, pays out the whole pot and opens a new round.
pub fn execute_fulfill_random_words(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    request_id: u64,
    random_words: Vec<Uint256>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if info.sender != config.vrf_coordinator {
        return Err(ContractError::OnlyCoordinatorCanFulfill {
            sender: info.sender,
            coordinator: config.vrf_coordinator,
        });
    }

    // Only the request issued for the round being drawn can settle it
    if PENDING_REQUEST.may_load(deps.storage)? != Some(request_id) {
        return Err(ContractError::NonexistentRequest { request_id });
    }

    let random_word = random_words
        .first()
        .copied()
        .ok_or(ContractError::InvalidRandomness)?;

    let players = PLAYERS.len(deps.storage)?;
    let winner_index = get_winner_index(random_word, players)?;
    let winner = PLAYERS
        .get(deps.storage, winner_index)?
        .ok_or_else(|| StdError::generic_err(format!("Missing player {winner_index}")))?;

    let prize = deps
        .querier
        .query_balance(&env.contract.address, &config.entrance_fee.denom)?;

    // New round
    while PLAYERS.pop_back(deps.storage)?.is_some() {}
    PENDING_REQUEST.remove(deps.storage);
    RECENT_WINNER.save(deps.storage, &winner)?;
    LAST_TIMESTAMP.save(deps.storage, &env.block.time)?;
    RAFFLE_STATE.save(deps.storage, &RaffleState::Open)?;

    let mut response = Response::new();
    if !prize.amount.is_zero() {
        response = response.add_submessage(SubMsg::reply_on_error(
            BankMsg::Send {
                to_address: winner.to_string(),
                amount: coins(prize.amount.u128(), prize.denom.clone()),
            },
            PAYOUT_REPLY_ID,
        ));
    }

    Ok(response
        .add_event(
            Event::new("winner_picked")
                .add_attribute("winner", winner.as_str())
                .add_attribute("amount", prize.to_string()),
        )
        .add_attribute("action", "fulfill_random_words")
        .add_attribute(REQUEST_ID_ATTRIBUTE, request_id.to_string())
        .add_attribute("winner", winner))
}

/// Only reached when the payout failed. Failing here reverts the whole draw.
pub fn handle_payout_reply(msg: Reply) -> Result<Response, ContractError> {
    let reason = match msg.result.into_result() {
        Ok(_) => "payout reply received without an error".to_string(),
        Err(err) => err,
    };
    Err(ContractError::TransferFailed { reason })
}
