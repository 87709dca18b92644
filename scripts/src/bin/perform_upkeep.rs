use std::env;

use cosmwasm_std::Binary;
use cw_orch::prelude::*;
use raffle::{
    msg::{CheckUpkeepResponse, ExecuteMsg, QueryMsg},
    Raffle,
};
use scripts::{daemon, CHAIN_ID_ENV};

/// Keeper run: closes the round if it is due
pub fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let chain_id = env::var(CHAIN_ID_ENV)?;
    let raffle = Raffle::new(daemon(&chain_id)?);

    let upkeep: CheckUpkeepResponse = raffle.query(&QueryMsg::CheckUpkeep {
        check_data: Binary::default(),
    })?;
    if !upkeep.upkeep_needed {
        log::info!("Upkeep not needed");
        return Ok(());
    }

    let response = raffle.execute(
        &ExecuteMsg::PerformUpkeep {
            perform_data: upkeep.perform_data,
        },
        &[],
    )?;
    let request_id = response.event_attr_value("wasm-requested_raffle_winner", "request_id")?;
    log::info!("Winner requested, request id {request_id}");

    Ok(())
}
