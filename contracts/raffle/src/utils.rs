use cosmwasm_std::{to_json_binary, Deps, Env, StdError, StdResult, Uint128, Uint256, WasmMsg};
use vrf::CoordinatorExecuteMsg;

use crate::{
    error::ContractError,
    state::{
        Config, RaffleState, CONFIG, LAST_TIMESTAMP, NUM_WORDS, PLAYERS, RAFFLE_STATE,
        REQUEST_CONFIRMATIONS,
    },
};

/// Everything the upkeep decision depends on, read in one go
#[derive(Clone, Copy)]
pub struct UpkeepStatus {
    pub state: RaffleState,
    pub time_passed: bool,
    pub players: u32,
    pub balance: Uint128,
}

impl UpkeepStatus {
    pub fn is_needed(&self) -> bool {
        self.state == RaffleState::Open
            && self.time_passed
            && self.players > 0
            && !self.balance.is_zero()
    }

    pub fn into_error(self) -> ContractError {
        ContractError::UpkeepNotNeeded {
            balance: self.balance,
            players: self.players,
            state: self.state,
        }
    }
}

pub fn get_upkeep_status(deps: Deps, env: &Env) -> StdResult<UpkeepStatus> {
    let config = CONFIG.load(deps.storage)?;
    let last_timestamp = LAST_TIMESTAMP.load(deps.storage)?;
    let elapsed = env.block.time.seconds().saturating_sub(last_timestamp.seconds());

    Ok(UpkeepStatus {
        state: RAFFLE_STATE.load(deps.storage)?,
        time_passed: elapsed >= config.interval,
        players: PLAYERS.len(deps.storage)?,
        balance: deps
            .querier
            .query_balance(&env.contract.address, &config.entrance_fee.denom)?
            .amount,
    })
}

pub fn get_randomness_request(config: &Config) -> StdResult<WasmMsg> {
    Ok(WasmMsg::Execute {
        contract_addr: config.vrf_coordinator.to_string(),
        msg: to_json_binary(&CoordinatorExecuteMsg::RequestRandomWords {
            key_hash: config.gas_lane.clone(),
            sub_id: config.subscription_id,
            request_confirmations: REQUEST_CONFIRMATIONS,
            callback_gas_limit: config.callback_gas_limit,
            num_words: NUM_WORDS,
        })?,
        funds: vec![],
    })
}

/// Index of the winning entry: `random_word mod players`.
/// Slightly favours low indexes when the word space isn't a multiple of `players`,
/// which is negligible for 256-bit words.
pub fn get_winner_index(random_word: Uint256, players: u32) -> StdResult<u32> {
    if players == 0 {
        return Err(StdError::generic_err("No players to pick a winner from"));
    }
    let index = Uint128::try_from(random_word % Uint256::from(players))?;
    // index < players, so it always fits
    Ok(index.u128() as u32)
}
