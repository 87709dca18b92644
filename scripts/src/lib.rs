use cw_orch::{
    daemon::Daemon,
    environment::{ChainInfo, ChainKind, NetworkInfo},
};

pub mod deploy;
pub mod error;
pub mod frontend;
pub mod networks;
pub mod verify;

pub const STARGAZE_NETWORK: NetworkInfo = NetworkInfo {
    chain_name: "stargaze",
    pub_address_prefix: "stars",
    coin_type: 118u32,
};

/// https://github.com/cosmos/chain-registry/blob/master/testnets/stargazetestnet/chain.json
pub const ELGAFAR_1: ChainInfo = ChainInfo {
    kind: ChainKind::Testnet,
    chain_id: "elgafar-1",
    gas_denom: "ustars",
    gas_price: 0.04,
    grpc_urls: &["http://grpc-1.elgafar-1.stargaze-apis.com:26660"],
    network_info: STARGAZE_NETWORK,
    lcd_url: None,
    fcd_url: None,
};

/// https://github.com/cosmos/chain-registry/blob/master/stargaze/chain.json
pub const STARGAZE_1: ChainInfo = ChainInfo {
    kind: ChainKind::Mainnet,
    chain_id: "stargaze-1",
    gas_denom: "ustars",
    gas_price: 1.1,
    grpc_urls: &["http://stargaze-grpc.polkachu.com:13790"],
    network_info: STARGAZE_NETWORK,
    lcd_url: None,
    fcd_url: None,
};

/// Env var selecting the chain id scripts run against. Unset means a local `Mock` chain.
pub const CHAIN_ID_ENV: &str = "RAFFLE_CHAIN_ID";
/// Env var pointing at a JSON network table replacing the built-in one
pub const NETWORKS_FILE_ENV: &str = "NETWORKS_FILE";

/// Daemon chain info for a public chain id
pub fn chain_info(chain_id: &str) -> Option<ChainInfo> {
    match chain_id {
        "elgafar-1" => Some(ELGAFAR_1),
        "stargaze-1" => Some(STARGAZE_1),
        _ => None,
    }
}

/// Connects to a public chain with the mnemonic from the environment
pub fn daemon(chain_id: &str) -> anyhow::Result<Daemon> {
    let chain = chain_info(chain_id)
        .ok_or_else(|| anyhow::anyhow!("No daemon configuration for chain id {chain_id}"))?;
    Ok(Daemon::builder(chain).build()?)
}
