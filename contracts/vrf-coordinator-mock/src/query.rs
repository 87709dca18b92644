use cosmwasm_std::{Deps, StdError, StdResult};
use vrf::{RandomWordsRequest, Subscription};

use crate::{
    msg::ConfigResponse,
    state::{CONFIG, REQUESTS, SUBSCRIPTIONS},
};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        base_fee: config.base_fee,
        gas_price: config.gas_price,
        fee_denom: config.fee_denom,
        current_sub_id: config.current_sub_id,
        next_request_id: config.next_request_id,
    })
}

pub fn query_subscription(deps: Deps, sub_id: u64) -> StdResult<Subscription> {
    SUBSCRIPTIONS
        .may_load(deps.storage, sub_id)?
        .ok_or_else(|| StdError::generic_err(format!("Subscription {sub_id} does not exist")))
}

/// Pending requests only, fulfilled ones are pruned
pub fn query_request(deps: Deps, request_id: u64) -> StdResult<Option<RandomWordsRequest>> {
    REQUESTS.may_load(deps.storage, request_id)
}
