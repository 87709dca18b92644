use cosmwasm_schema::cw_serde;
use cosmwasm_std::{StdResult, Uint128, Uint256};
use cw_storage_plus::{Item, Map};
use sha2::{Digest, Sha256};
use vrf::{RandomWordsRequest, Subscription};

pub const CONFIG: Item<Config> = Item::new("config");
pub const SUBSCRIPTIONS: Map<u64, Subscription> = Map::new("subscriptions");
pub const REQUESTS: Map<u64, RandomWordsRequest> = Map::new("requests");

#[cw_serde]
pub struct Config {
    pub base_fee: Uint128,
    pub gas_price: Uint128,
    pub fee_denom: String,
    /// Last subscription id handed out, 0 before the first one
    pub current_sub_id: u64,
    pub next_request_id: u64,
}

impl Config {
    /// Price of one request, charged against the subscription when it is made
    pub fn request_fee(&self, callback_gas_limit: u32) -> StdResult<Uint128> {
        let gas_cost = self.gas_price.checked_mul(callback_gas_limit.into())?;
        Ok(self.base_fee.checked_add(gas_cost)?)
    }
}

/// Deterministic stand-in for verified randomness: sha256(request_id || index)
pub fn derive_random_words(request_id: u64, num_words: u32) -> Vec<Uint256> {
    (0..num_words)
        .map(|index| {
            let digest: [u8; 32] = Sha256::new()
                .chain_update(request_id.to_be_bytes())
                .chain_update(index.to_be_bytes())
                .finalize()
                .into();
            Uint256::from_be_bytes(digest)
        })
        .collect()
}
