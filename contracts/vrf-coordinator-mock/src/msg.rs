use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{HexBinary, Uint128, Uint256};
use vrf::{RandomWordsRequest, Subscription};

#[cw_serde]
pub struct InstantiateMsg {
    /// Flat fee charged on every request
    pub base_fee: Uint128,
    /// Fee charged per unit of callback gas
    pub gas_price: Uint128,
    pub fee_denom: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    CreateSubscription {},
    FundSubscription {
        sub_id: u64,
        amount: Uint128,
    },
    AddConsumer {
        sub_id: u64,
        consumer: String,
    },
    RemoveConsumer {
        sub_id: u64,
        consumer: String,
    },
    CancelSubscription {
        sub_id: u64,
    },
    /// Same shape as [`vrf::CoordinatorExecuteMsg::RequestRandomWords`]
    RequestRandomWords {
        key_hash: HexBinary,
        sub_id: u64,
        request_confirmations: u16,
        callback_gas_limit: u32,
        num_words: u32,
    },
    FulfillRandomWords {
        request_id: u64,
        consumer: String,
    },
    FulfillRandomWordsWithOverride {
        request_id: u64,
        consumer: String,
        words: Vec<Uint256>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(Subscription)]
    Subscription { sub_id: u64 },
    #[returns(Option<RandomWordsRequest>)]
    Request { request_id: u64 },
}

#[cw_serde]
pub struct ConfigResponse {
    pub base_fee: Uint128,
    pub gas_price: Uint128,
    pub fee_denom: String,
    pub current_sub_id: u64,
    pub next_request_id: u64,
}

#[cw_serde]
pub struct MigrateMsg {}
