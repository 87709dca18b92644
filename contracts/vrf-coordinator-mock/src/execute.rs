use cosmwasm_std::{
    ensure, ensure_eq, to_json_binary, Addr, DepsMut, Event, HexBinary, MessageInfo,
    Response, StdError, Storage, Uint128, Uint256, WasmMsg,
};
use vrf::{
    ConsumerExecuteMsg, RandomWordsRequest, RequestRandomWordsResponse, Subscription,
    REQUEST_ID_ATTRIBUTE, SUB_ID_ATTRIBUTE,
};

use crate::{
    error::ContractError,
    state::{derive_random_words, CONFIG, REQUESTS, SUBSCRIPTIONS},
};

pub fn execute_create_subscription(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.update(deps.storage, |mut c| -> Result<_, ContractError> {
        c.current_sub_id += 1;
        Ok(c)
    })?;
    let sub_id = config.current_sub_id;

    SUBSCRIPTIONS.save(
        deps.storage,
        sub_id,
        &Subscription {
            owner: info.sender.clone(),
            balance: Uint128::zero(),
            req_count: 0,
            consumers: vec![],
        },
    )?;

    Ok(Response::new()
        .set_data(to_json_binary(&sub_id)?)
        .add_attribute("action", "create_subscription")
        .add_attribute(SUB_ID_ATTRIBUTE, sub_id.to_string())
        .add_attribute("owner", info.sender))
}

/// The mock trusts the amount: no fee tokens actually change hands
pub fn execute_fund_subscription(
    deps: DepsMut,
    sub_id: u64,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let mut subscription = SUBSCRIPTIONS
        .may_load(deps.storage, sub_id)?
        .ok_or(ContractError::InvalidSubscription)?;

    let old_balance = subscription.balance;
    subscription.balance = subscription
        .balance
        .checked_add(amount)
        .map_err(StdError::from)?;
    SUBSCRIPTIONS.save(deps.storage, sub_id, &subscription)?;

    Ok(Response::new()
        .add_attribute("action", "fund_subscription")
        .add_attribute(SUB_ID_ATTRIBUTE, sub_id.to_string())
        .add_attribute("old_balance", old_balance)
        .add_attribute("new_balance", subscription.balance))
}

pub fn execute_add_consumer(
    deps: DepsMut,
    info: MessageInfo,
    sub_id: u64,
    consumer: String,
) -> Result<Response, ContractError> {
    let mut subscription = load_owned_subscription(deps.storage, &info.sender, sub_id)?;
    let consumer = deps.api.addr_validate(&consumer)?;

    // Adding an existing consumer is a no-op
    if !subscription.consumers.contains(&consumer) {
        subscription.consumers.push(consumer.clone());
        SUBSCRIPTIONS.save(deps.storage, sub_id, &subscription)?;
    }

    Ok(Response::new()
        .add_attribute("action", "add_consumer")
        .add_attribute(SUB_ID_ATTRIBUTE, sub_id.to_string())
        .add_attribute("consumer", consumer))
}

pub fn execute_remove_consumer(
    deps: DepsMut,
    info: MessageInfo,
    sub_id: u64,
    consumer: String,
) -> Result<Response, ContractError> {
    let mut subscription = load_owned_subscription(deps.storage, &info.sender, sub_id)?;
    let consumer = deps.api.addr_validate(&consumer)?;

    let before = subscription.consumers.len();
    subscription.consumers.retain(|c| *c != consumer);
    if subscription.consumers.len() == before {
        return Err(ContractError::InvalidConsumer {
            sub_id,
            consumer: consumer.to_string(),
        });
    }
    SUBSCRIPTIONS.save(deps.storage, sub_id, &subscription)?;

    Ok(Response::new()
        .add_attribute("action", "remove_consumer")
        .add_attribute(SUB_ID_ATTRIBUTE, sub_id.to_string())
        .add_attribute("consumer", consumer))
}

pub fn execute_cancel_subscription(
    deps: DepsMut,
    info: MessageInfo,
    sub_id: u64,
) -> Result<Response, ContractError> {
    let subscription = load_owned_subscription(deps.storage, &info.sender, sub_id)?;
    SUBSCRIPTIONS.remove(deps.storage, sub_id);

    Ok(Response::new()
        .add_attribute("action", "cancel_subscription")
        .add_attribute(SUB_ID_ATTRIBUTE, sub_id.to_string())
        .add_attribute("returned_amount", subscription.balance))
}

pub fn execute_request_random_words(
    deps: DepsMut,
    info: MessageInfo,
    key_hash: HexBinary,
    sub_id: u64,
    request_confirmations: u16,
    callback_gas_limit: u32,
    num_words: u32,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    let mut subscription = SUBSCRIPTIONS
        .may_load(deps.storage, sub_id)?
        .ok_or(ContractError::InvalidSubscription)?;

    ensure!(
        subscription.consumers.contains(&info.sender),
        ContractError::InvalidConsumer {
            sub_id,
            consumer: info.sender.to_string(),
        }
    );
    ensure!(num_words > 0, ContractError::InvalidNumWords { num_words });

    let fee = config.request_fee(callback_gas_limit)?;
    if subscription.balance < fee {
        return Err(ContractError::InsufficientBalance {
            balance: subscription.balance,
            fee,
        });
    }
    subscription.balance -= fee;
    subscription.req_count += 1;
    SUBSCRIPTIONS.save(deps.storage, sub_id, &subscription)?;

    let request_id = config.next_request_id;
    config.next_request_id += 1;
    CONFIG.save(deps.storage, &config)?;

    let key_hash_hex = key_hash.to_hex();
    REQUESTS.save(
        deps.storage,
        request_id,
        &RandomWordsRequest {
            sub_id,
            consumer: info.sender.clone(),
            key_hash,
            request_confirmations,
            callback_gas_limit,
            num_words,
        },
    )?;

    Ok(Response::new()
        .set_data(to_json_binary(&RequestRandomWordsResponse { request_id })?)
        .add_event(
            Event::new("random_words_requested")
                .add_attribute(REQUEST_ID_ATTRIBUTE, request_id.to_string())
                .add_attribute("key_hash", key_hash_hex),
        )
        .add_attribute("action", "request_random_words")
        .add_attribute(REQUEST_ID_ATTRIBUTE, request_id.to_string())
        .add_attribute(SUB_ID_ATTRIBUTE, sub_id.to_string())
        .add_attribute("consumer", info.sender)
        .add_attribute("fee", fee))
}

/// Answers a pending request by calling back the consumer that issued it.
/// The request is consumed: fulfilling it twice fails with `NonexistentRequest`.
pub fn execute_fulfill_random_words(
    deps: DepsMut,
    request_id: u64,
    consumer: String,
    words: Option<Vec<Uint256>>,
) -> Result<Response, ContractError> {
    let consumer = deps.api.addr_validate(&consumer)?;
    let request = REQUESTS
        .may_load(deps.storage, request_id)?
        .ok_or(ContractError::NonexistentRequest)?;
    ensure_eq!(request.consumer, consumer, ContractError::NonexistentRequest);

    let random_words = match words {
        Some(words) => {
            ensure_eq!(
                words.len(),
                request.num_words as usize,
                ContractError::InvalidRandomWords {
                    expected: request.num_words,
                    received: words.len(),
                }
            );
            words
        }
        None => derive_random_words(request_id, request.num_words),
    };

    REQUESTS.remove(deps.storage, request_id);

    let callback = WasmMsg::Execute {
        contract_addr: consumer.to_string(),
        msg: to_json_binary(&ConsumerExecuteMsg::FulfillRandomWords {
            request_id,
            random_words,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(callback)
        .add_event(
            Event::new("random_words_fulfilled")
                .add_attribute(REQUEST_ID_ATTRIBUTE, request_id.to_string())
                .add_attribute("consumer", consumer),
        )
        .add_attribute("action", "fulfill_random_words"))
}

fn load_owned_subscription(
    storage: &dyn Storage,
    sender: &Addr,
    sub_id: u64,
) -> Result<Subscription, ContractError> {
    let subscription = SUBSCRIPTIONS
        .may_load(storage, sub_id)?
        .ok_or(ContractError::InvalidSubscription)?;
    ensure_eq!(&subscription.owner, sender, ContractError::MustBeSubOwner);
    Ok(subscription)
}
