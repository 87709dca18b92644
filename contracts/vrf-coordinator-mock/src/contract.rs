#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;

use crate::{
    error::ContractError,
    execute::{
        execute_add_consumer, execute_cancel_subscription, execute_create_subscription,
        execute_fulfill_random_words, execute_fund_subscription, execute_remove_consumer,
        execute_request_random_words,
    },
    msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg},
    query::{query_config, query_request, query_subscription},
    state::{Config, CONFIG},
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    CONFIG.save(
        deps.storage,
        &Config {
            base_fee: msg.base_fee,
            gas_price: msg.gas_price,
            fee_denom: msg.fee_denom,
            current_sub_id: 0,
            next_request_id: 1,
        },
    )?;
    set_contract_version(
        deps.storage,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    )?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("base_fee", msg.base_fee)
        .add_attribute("gas_price", msg.gas_price))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CreateSubscription {} => execute_create_subscription(deps, info),
        ExecuteMsg::FundSubscription { sub_id, amount } => {
            execute_fund_subscription(deps, sub_id, amount)
        }
        ExecuteMsg::AddConsumer { sub_id, consumer } => {
            execute_add_consumer(deps, info, sub_id, consumer)
        }
        ExecuteMsg::RemoveConsumer { sub_id, consumer } => {
            execute_remove_consumer(deps, info, sub_id, consumer)
        }
        ExecuteMsg::CancelSubscription { sub_id } => {
            execute_cancel_subscription(deps, info, sub_id)
        }
        ExecuteMsg::RequestRandomWords {
            key_hash,
            sub_id,
            request_confirmations,
            callback_gas_limit,
            num_words,
        } => execute_request_random_words(
            deps,
            info,
            key_hash,
            sub_id,
            request_confirmations,
            callback_gas_limit,
            num_words,
        ),
        ExecuteMsg::FulfillRandomWords {
            request_id,
            consumer,
        } => execute_fulfill_random_words(deps, request_id, consumer, None),
        ExecuteMsg::FulfillRandomWordsWithOverride {
            request_id,
            consumer,
            words,
        } => execute_fulfill_random_words(deps, request_id, consumer, Some(words)),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Subscription { sub_id } => to_json_binary(&query_subscription(deps, sub_id)?),
        QueryMsg::Request { request_id } => to_json_binary(&query_request(deps, request_id)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> StdResult<Response> {
    set_contract_version(
        deps.storage,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    )?;
    Ok(Response::default())
}
