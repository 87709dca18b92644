use thiserror::Error;

use cosmwasm_std::{Addr, StdError, Uint128};

use crate::state::RaffleState;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Not enough value entered: sent {sent}, the entrance fee is {required}")]
    NotEnoughValue { sent: Uint128, required: Uint128 },

    #[error("The raffle is not open")]
    NotOpen,

    #[error("Upkeep not needed. Balance : {balance}, players : {players}, state : {state:?}")]
    UpkeepNotNeeded {
        balance: Uint128,
        players: u32,
        state: RaffleState,
    },

    #[error("nonexistent request")]
    NonexistentRequest { request_id: u64 },

    // Anyone else could hand in a value of their choosing and pick the winner
    #[error("Only the coordinator {coordinator} can fulfill, got {sender}")]
    OnlyCoordinatorCanFulfill { sender: Addr, coordinator: Addr },

    #[error("Received invalid randomness")]
    InvalidRandomness,

    #[error("The gas lane must be 32 bytes long, got {len}")]
    InvalidGasLane { len: usize },

    #[error("The coordinator did not return a request id")]
    NoRequestIdReturned,

    #[error("Transfer to the winner failed: {reason}")]
    TransferFailed { reason: String },

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },
}
