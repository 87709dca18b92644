use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin, HexBinary, Timestamp};
use cw_storage_plus::{Deque, Item};

/// Block confirmations the coordinator waits before answering
pub const REQUEST_CONFIRMATIONS: u16 = 3;
/// Random words requested per round, only the first one is used
pub const NUM_WORDS: u32 = 1;

pub const CONFIG: Item<Config> = Item::new("config");
pub const RAFFLE_STATE: Item<RaffleState> = Item::new("raffle_state");
/// Entrants of the current round, in entry order
pub const PLAYERS: Deque<Addr> = Deque::new("players");
pub const LAST_TIMESTAMP: Item<Timestamp> = Item::new("last_timestamp");
pub const RECENT_WINNER: Item<Addr> = Item::new("recent_winner");
/// Request id handed out by the coordinator for the round being drawn
pub const PENDING_REQUEST: Item<u64> = Item::new("pending_request");

#[cw_serde]
pub struct Config {
    /// Only this address may deliver randomness
    pub vrf_coordinator: Addr,
    pub entrance_fee: Coin,
    /// Gas lane (key hash) randomness requests are billed on
    pub gas_lane: HexBinary,
    pub subscription_id: u64,
    pub callback_gas_limit: u32,
    /// Minimum number of seconds between two draws
    pub interval: u64,
}

#[cw_serde]
#[derive(Copy)]
pub enum RaffleState {
    Open,
    Calculating,
}
