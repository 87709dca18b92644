use std::env;

use cosmwasm_std::{Addr, Binary, Coin, Timestamp};
use cw_orch::prelude::*;
use raffle::{
    msg::{CheckUpkeepResponse, QueryMsg},
    state::RaffleState,
    Raffle,
};
use scripts::{daemon, CHAIN_ID_ENV};

pub fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let chain_id = env::var(CHAIN_ID_ENV)?;
    let raffle = Raffle::new(daemon(&chain_id)?);

    let state: RaffleState = raffle.query(&QueryMsg::RaffleState {})?;
    let entrance_fee: Coin = raffle.query(&QueryMsg::EntranceFee {})?;
    let players: u64 = raffle.query(&QueryMsg::NumberOfPlayers {})?;
    let last_draw: Timestamp = raffle.query(&QueryMsg::LatestTimestamp {})?;
    let recent_winner: Option<Addr> = raffle.query(&QueryMsg::RecentWinner {})?;
    let pending_request: Option<u64> = raffle.query(&QueryMsg::PendingRequest {})?;
    let upkeep: CheckUpkeepResponse = raffle.query(&QueryMsg::CheckUpkeep {
        check_data: Binary::default(),
    })?;

    log::info!("Raffle {} on {chain_id}", raffle.address()?);
    log::info!("State: {state:?}, entrance fee: {entrance_fee}, players: {players}");
    log::info!("Last draw at {last_draw}, recent winner: {recent_winner:?}");
    log::info!(
        "Pending request: {pending_request:?}, upkeep needed: {}",
        upkeep.upkeep_needed
    );

    Ok(())
}
