use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Invalid subscription")]
    InvalidSubscription,

    #[error("Only the subscription owner can do this")]
    MustBeSubOwner,

    #[error("Consumer {consumer} is not registered on subscription {sub_id}")]
    InvalidConsumer { sub_id: u64, consumer: String },

    #[error("Insufficient balance: subscription holds {balance}, request costs {fee}")]
    InsufficientBalance { balance: Uint128, fee: Uint128 },

    #[error("Requested {num_words} words, at least one is needed")]
    InvalidNumWords { num_words: u32 },

    #[error("nonexistent request")]
    NonexistentRequest,

    #[error("Expected {expected} words, {received} were provided")]
    InvalidRandomWords { expected: u32, received: usize },
}
