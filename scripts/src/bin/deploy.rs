use std::env;

use cw_orch::prelude::Mock;
use scripts::{
    daemon,
    deploy::deploy_raffle,
    frontend::FrontendExporter,
    networks::{NetworkTable, LOCAL_CHAIN_ID},
    verify::{ExplorerVerifier, SourceVerifier},
    CHAIN_ID_ENV, NETWORKS_FILE_ENV,
};

pub fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let networks = match env::var(NETWORKS_FILE_ENV) {
        Ok(path) => NetworkTable::from_json_file(path)?,
        Err(_) => NetworkTable::default(),
    };
    let chain_id = env::var(CHAIN_ID_ENV).unwrap_or_else(|_| LOCAL_CHAIN_ID.to_string());
    let network = networks.get(&chain_id)?;

    let record = if network.local {
        deploy_raffle(Mock::new("deployer"), &chain_id, network, None)?
    } else {
        let verifier = ExplorerVerifier::from_env();
        deploy_raffle(
            daemon(&chain_id)?,
            &chain_id,
            network,
            verifier.as_ref().map(|v| v as &dyn SourceVerifier),
        )?
    };
    log::info!(
        "Raffle {} deployed on {} (verification: {:?})",
        record.address,
        record.chain_id,
        record.verification
    );

    if let Some(exporter) = FrontendExporter::from_env() {
        exporter.export(&record.chain_id, record.address.as_str())?;
    }

    Ok(())
}
