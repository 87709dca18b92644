//! Waiting on the raffle's `winner_picked` event.
//!
//! The watch is registered before the transaction that should trigger the draw, fed the
//! responses of the transactions executed afterwards, and resolved once.

use cosmwasm_std::{Addr, Uint128};
use cw_multi_test::{App, AppResponse};
use thiserror::Error;

pub const WINNER_PICKED_EVENT: &str = "wasm-winner_picked";
const CONTRACT_ATTR: &str = "_contract_address";

#[derive(Error, Debug, PartialEq)]
pub enum WatchError {
    #[error("winner_picked was never emitted")]
    NeverFired,

    #[error("winner_picked was not emitted before block {deadline}")]
    TimedOut { deadline: u64 },

    #[error("winner_picked was emitted with unexpected data: {0}")]
    UnexpectedData(String),

    #[error("winner_picked was emitted more than once")]
    FiredTwice,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WinnerPicked {
    pub winner: Addr,
    pub amount: Uint128,
    pub denom: String,
}

pub struct WinnerPickedWatch {
    raffle: Addr,
    deadline: u64,
    outcome: Option<Result<WinnerPicked, WatchError>>,
}

impl WinnerPickedWatch {
    /// Watches `raffle` from the current block up to `timeout_blocks` blocks later
    pub fn register(app: &App, raffle: &Addr, timeout_blocks: u64) -> Self {
        Self {
            raffle: raffle.clone(),
            deadline: app.block_info().height + timeout_blocks,
            outcome: None,
        }
    }

    /// Feeds the events of a transaction that was just executed
    pub fn observe(&mut self, app: &App, response: &AppResponse) {
        if matches!(self.outcome, Some(Err(_))) {
            return;
        }
        if self.outcome.is_none() && app.block_info().height > self.deadline {
            self.outcome = Some(Err(WatchError::TimedOut {
                deadline: self.deadline,
            }));
            return;
        }

        let fired: Vec<_> = response
            .events
            .iter()
            .filter(|e| self.is_winner_picked(e))
            .collect();
        for event in fired {
            self.outcome = Some(match self.outcome {
                Some(_) => Err(WatchError::FiredTwice),
                None => parse_winner_picked(event),
            });
            if matches!(self.outcome, Some(Err(_))) {
                return;
            }
        }
    }

    pub fn wait(self, app: &App) -> Result<WinnerPicked, WatchError> {
        match self.outcome {
            Some(outcome) => outcome,
            None if app.block_info().height > self.deadline => Err(WatchError::TimedOut {
                deadline: self.deadline,
            }),
            None => Err(WatchError::NeverFired),
        }
    }

    fn is_winner_picked(&self, event: &cosmwasm_std::Event) -> bool {
        event.ty == WINNER_PICKED_EVENT
            && event
                .attributes
                .iter()
                .any(|a| a.key == CONTRACT_ATTR && a.value == self.raffle.as_str())
    }
}

fn parse_winner_picked(event: &cosmwasm_std::Event) -> Result<WinnerPicked, WatchError> {
    let attribute = |key: &str| {
        event
            .attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
            .ok_or_else(|| WatchError::UnexpectedData(format!("missing {key}")))
    };

    let winner = Addr::unchecked(attribute("winner")?);
    let amount = attribute("amount")?;
    let split = amount
        .find(|c: char| !c.is_ascii_digit())
        .filter(|&i| i > 0)
        .ok_or_else(|| WatchError::UnexpectedData(format!("amount {amount}")))?;
    let (value, denom) = amount.split_at(split);

    Ok(WinnerPicked {
        winner,
        amount: value
            .parse::<u128>()
            .map_err(|e| WatchError::UnexpectedData(e.to_string()))?
            .into(),
        denom: denom.to_string(),
    })
}
