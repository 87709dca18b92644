#[cfg(test)]
mod tests {
    use cosmwasm_std::{Addr, StdError, Uint128, Uint256};
    use cw_multi_test::{App, AppResponse, Executor};
    use utils::state::ORACLE_FEE_DENOM;
    use vrf::{RandomWordsRequest, REQUEST_ID_ATTRIBUTE};
    use vrf_coordinator_mock::{
        error::ContractError,
        msg::{ExecuteMsg, InstantiateMsg, QueryMsg},
    };

    use crate::common_setup::{
        contract_boxes::{contract_vrf_coordinator_mock, custom_mock_app},
        helpers::{assert_error, event_attribute},
        setup_accounts_and_block::setup_accounts,
        setup_raffle::{
            add_consumer, create_subscription, gas_lane, instantiate_coordinator,
            CALLBACK_GAS_LIMIT, REQUEST_FEE,
        },
    };

    fn request_random_words(
        app: &mut App,
        coordinator: &Addr,
        consumer: &Addr,
        sub_id: u64,
        num_words: u32,
    ) -> anyhow::Result<AppResponse> {
        app.execute_contract(
            consumer.clone(),
            coordinator.clone(),
            &ExecuteMsg::RequestRandomWords {
                key_hash: gas_lane(),
                sub_id,
                request_confirmations: 3,
                callback_gas_limit: CALLBACK_GAS_LIMIT,
                num_words,
            },
            &[],
        )
    }

    #[test]
    fn only_registered_consumers_can_request() {
        let mut app = custom_mock_app();
        let (owner, keeper) = setup_accounts(&mut app);
        let coordinator = instantiate_coordinator(&mut app, &owner);
        let sub_id = create_subscription(&mut app, &owner, &coordinator, REQUEST_FEE * 10);

        let res = request_random_words(&mut app, &coordinator, &keeper, sub_id, 1);
        assert_error(
            res,
            ContractError::InvalidConsumer {
                sub_id,
                consumer: keeper.to_string(),
            }
            .to_string(),
        );

        let res = request_random_words(&mut app, &coordinator, &keeper, sub_id + 1, 1);
        assert_error(res, ContractError::InvalidSubscription.to_string());

        add_consumer(&mut app, &owner, &coordinator, sub_id, &keeper);
        let res = request_random_words(&mut app, &coordinator, &keeper, sub_id, 0);
        assert_error(
            res,
            ContractError::InvalidNumWords { num_words: 0 }.to_string(),
        );

        let res = request_random_words(&mut app, &coordinator, &keeper, sub_id, 2).unwrap();
        assert_eq!(
            event_attribute(&res, "wasm", REQUEST_ID_ATTRIBUTE),
            Some("1".to_string())
        );
        let request: Option<RandomWordsRequest> = app
            .wrap()
            .query_wasm_smart(coordinator.clone(), &QueryMsg::Request { request_id: 1 })
            .unwrap();
        assert_eq!(request.unwrap().num_words, 2);
    }

    #[test]
    fn requests_are_charged_to_the_subscription() {
        let mut app = custom_mock_app();
        let (owner, keeper) = setup_accounts(&mut app);
        let coordinator = instantiate_coordinator(&mut app, &owner);
        let sub_id = create_subscription(&mut app, &owner, &coordinator, REQUEST_FEE + 1);
        add_consumer(&mut app, &owner, &coordinator, sub_id, &keeper);

        request_random_words(&mut app, &coordinator, &keeper, sub_id, 1).unwrap();
        let res = request_random_words(&mut app, &coordinator, &keeper, sub_id, 1);
        assert_error(
            res,
            ContractError::InsufficientBalance {
                balance: Uint128::one(),
                fee: Uint128::new(REQUEST_FEE),
            }
            .to_string(),
        );
    }

    #[test]
    fn unpayable_request_fee_fails() {
        let mut app = custom_mock_app();
        let (owner, keeper) = setup_accounts(&mut app);
        let code_id = app.store_code(contract_vrf_coordinator_mock());
        let coordinator = app
            .instantiate_contract(
                code_id,
                owner.clone(),
                &InstantiateMsg {
                    base_fee: Uint128::one(),
                    gas_price: Uint128::MAX,
                    fee_denom: ORACLE_FEE_DENOM.to_string(),
                },
                &[],
                "vrf-coordinator-mock",
                None,
            )
            .unwrap();
        let sub_id = create_subscription(&mut app, &owner, &coordinator, REQUEST_FEE);
        add_consumer(&mut app, &owner, &coordinator, sub_id, &keeper);

        let res = request_random_words(&mut app, &coordinator, &keeper, sub_id, 1);
        let overflow = Uint128::MAX
            .checked_mul(Uint128::from(CALLBACK_GAS_LIMIT))
            .unwrap_err();
        assert_error(
            res,
            ContractError::Std(StdError::from(overflow)).to_string(),
        );
        let request: Option<RandomWordsRequest> = app
            .wrap()
            .query_wasm_smart(coordinator.clone(), &QueryMsg::Request { request_id: 1 })
            .unwrap();
        assert!(request.is_none());
    }

    #[test]
    fn override_needs_the_requested_number_of_words() {
        let mut app = custom_mock_app();
        let (owner, keeper) = setup_accounts(&mut app);
        let coordinator = instantiate_coordinator(&mut app, &owner);
        let sub_id = create_subscription(&mut app, &owner, &coordinator, REQUEST_FEE);
        add_consumer(&mut app, &owner, &coordinator, sub_id, &keeper);
        request_random_words(&mut app, &coordinator, &keeper, sub_id, 2).unwrap();

        let res = app.execute_contract(
            owner.clone(),
            coordinator.clone(),
            &ExecuteMsg::FulfillRandomWordsWithOverride {
                request_id: 1,
                consumer: keeper.to_string(),
                words: vec![Uint256::one()],
            },
            &[],
        );
        assert_error(
            res,
            ContractError::InvalidRandomWords {
                expected: 2,
                received: 1,
            }
            .to_string(),
        );

        // Fulfilling for another consumer than the requester
        let res = app.execute_contract(
            owner.clone(),
            coordinator.clone(),
            &ExecuteMsg::FulfillRandomWords {
                request_id: 1,
                consumer: owner.to_string(),
            },
            &[],
        );
        assert_error(res, ContractError::NonexistentRequest.to_string());
    }
}
