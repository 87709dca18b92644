//! Messages spoken between a VRF coordinator and its consumers.
//!
//! A consumer only ever sends [`CoordinatorExecuteMsg::RequestRandomWords`] and only ever
//! receives [`ConsumerExecuteMsg::FulfillRandomWords`]. Any coordinator that speaks these
//! messages (the local mock or a network deployment) can back a consumer contract.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, HexBinary, Uint128, Uint256};

/// Attribute on the coordinator's `wasm` event carrying a freshly issued request id.
pub const REQUEST_ID_ATTRIBUTE: &str = "request_id";
/// Attribute on the coordinator's `wasm` event carrying a freshly created subscription id.
pub const SUB_ID_ATTRIBUTE: &str = "sub_id";

#[cw_serde]
pub enum CoordinatorExecuteMsg {
    RequestRandomWords {
        /// Gas lane the request is billed on
        key_hash: HexBinary,
        sub_id: u64,
        request_confirmations: u16,
        callback_gas_limit: u32,
        num_words: u32,
    },
}

#[cw_serde]
pub enum ConsumerExecuteMsg {
    FulfillRandomWords {
        request_id: u64,
        random_words: Vec<Uint256>,
    },
}

#[cw_serde]
pub struct Subscription {
    pub owner: Addr,
    pub balance: Uint128,
    pub req_count: u64,
    pub consumers: Vec<Addr>,
}

#[cw_serde]
pub struct RandomWordsRequest {
    pub sub_id: u64,
    pub consumer: Addr,
    pub key_hash: HexBinary,
    pub request_confirmations: u16,
    pub callback_gas_limit: u32,
    pub num_words: u32,
}

#[cw_serde]
pub struct RequestRandomWordsResponse {
    pub request_id: u64,
}
