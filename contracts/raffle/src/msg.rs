use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Coin, HexBinary, Timestamp, Uint256};

use crate::state::RaffleState;

/// Constructor arguments, in the order deployments assemble them
#[cw_serde]
pub struct InstantiateMsg {
    pub vrf_coordinator: String,
    pub entrance_fee: Coin,
    pub gas_lane: HexBinary,
    pub subscription_id: u64,
    pub callback_gas_limit: u32,
    pub interval: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Pay at least the entrance fee to join the current round
    EnterRaffle {},
    /// Closes the round and asks the coordinator for randomness. Anyone can call it once
    /// `CheckUpkeep` says it is due.
    PerformUpkeep { perform_data: Binary },
    /// Callback from the coordinator, see [`vrf::ConsumerExecuteMsg`]
    FulfillRandomWords {
        request_id: u64,
        random_words: Vec<Uint256>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(CheckUpkeepResponse)]
    CheckUpkeep { check_data: Binary },
    #[returns(Coin)]
    EntranceFee {},
    #[returns(RaffleState)]
    RaffleState {},
    #[returns(Addr)]
    Player { index: u64 },
    #[returns(u64)]
    NumberOfPlayers {},
    #[returns(Option<Addr>)]
    RecentWinner {},
    #[returns(Timestamp)]
    LatestTimestamp {},
    #[returns(u64)]
    Interval {},
    #[returns(u32)]
    NumWords {},
    #[returns(u16)]
    RequestConfirmations {},
    #[returns(Option<u64>)]
    PendingRequest {},
    #[returns(ConfigResponse)]
    Config {},
}

#[cw_serde]
pub struct CheckUpkeepResponse {
    pub upkeep_needed: bool,
    pub perform_data: Binary,
}

#[cw_serde]
pub struct ConfigResponse {
    pub vrf_coordinator: Addr,
    pub entrance_fee: Coin,
    pub gas_lane: HexBinary,
    pub subscription_id: u64,
    pub callback_gas_limit: u32,
    pub interval: u64,
}

#[cw_serde]
pub struct MigrateMsg {}
