use std::env;

use cw_orch::prelude::*;
use raffle::Raffle;
use scripts::{daemon, frontend::FrontendExporter, CHAIN_ID_ENV};

/// Exports the raffle already deployed on `RAFFLE_CHAIN_ID`, regardless of `UPDATE_FRONTEND`
pub fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let chain_id = env::var(CHAIN_ID_ENV)?;
    let raffle = Raffle::new(daemon(&chain_id)?);

    let exporter = FrontendExporter::in_dir(FrontendExporter::dir_from_env());
    exporter.export(&chain_id, raffle.address()?.as_str())?;

    Ok(())
}
