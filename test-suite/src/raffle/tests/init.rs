#[cfg(test)]
mod tests {
    use cosmwasm_std::{coin, coins, Addr, Coin, HexBinary, Timestamp};
    use cw_multi_test::{App, Executor};
    use raffle::{
        error::ContractError,
        msg::{ConfigResponse, QueryMsg},
        state::{RaffleState, NUM_WORDS, REQUEST_CONFIRMATIONS},
    };
    use utils::state::NATIVE_DENOM;

    use crate::{
        common_setup::{
            contract_boxes::{contract_raffle, custom_mock_app},
            helpers::assert_error,
            setup_accounts_and_block::{setup_accounts, setup_raffle_participants},
            setup_raffle::{
                gas_lane, proper_raffle_instantiate, raffle_instantiate_msg, CALLBACK_GAS_LIMIT,
                ENTRANCE_FEE, INTERVAL,
            },
        },
        raffle::setup::helpers::{
            enter_and_wait_interval, enter_raffle, fulfill_random_words, latest_timestamp,
            number_of_players, pending_request, perform_upkeep, player, raffle_state,
            recent_winner, requested_id,
        },
    };

    #[test]
    fn initializes_the_raffle_correctly() {
        let (app, contracts) = proper_raffle_instantiate();

        assert_eq!(raffle_state(&app, &contracts), RaffleState::Open);
        assert_eq!(number_of_players(&app, &contracts), 0);
        assert_eq!(recent_winner(&app, &contracts), None);
        assert_eq!(pending_request(&app, &contracts), None);
        assert_eq!(latest_timestamp(&app, &contracts), app.block_info().time);

        let interval: u64 = app
            .wrap()
            .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::Interval {})
            .unwrap();
        assert_eq!(interval, INTERVAL);

        let entrance_fee: Coin = app
            .wrap()
            .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::EntranceFee {})
            .unwrap();
        assert_eq!(entrance_fee, coin(ENTRANCE_FEE, NATIVE_DENOM));

        let num_words: u32 = app
            .wrap()
            .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::NumWords {})
            .unwrap();
        assert_eq!(num_words, NUM_WORDS);
        let confirmations: u16 = app
            .wrap()
            .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::RequestConfirmations {})
            .unwrap();
        assert_eq!(confirmations, REQUEST_CONFIRMATIONS);

        let config: ConfigResponse = app
            .wrap()
            .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::Config {})
            .unwrap();
        assert_eq!(
            config,
            ConfigResponse {
                vrf_coordinator: contracts.coordinator.clone(),
                entrance_fee: coin(ENTRANCE_FEE, NATIVE_DENOM),
                gas_lane: gas_lane(),
                subscription_id: contracts.sub_id,
                callback_gas_limit: CALLBACK_GAS_LIMIT,
                interval: INTERVAL,
            }
        );
    }

    #[test]
    fn reads_are_idempotent() {
        let (mut app, contracts) = proper_raffle_instantiate();
        let players = setup_raffle_participants(&mut app, 2);

        // One full round, then a fresh entrant
        enter_and_wait_interval(&mut app, &contracts, &players[..1]);
        let res = perform_upkeep(&mut app, &contracts, &players[0]).unwrap();
        fulfill_random_words(&mut app, &contracts, requested_id(&res)).unwrap();
        enter_raffle(
            &mut app,
            &contracts,
            &players[1],
            &coins(ENTRANCE_FEE, NATIVE_DENOM),
        )
        .unwrap();

        let reads = |app: &App| {
            (
                raffle_state(app, &contracts),
                player(app, &contracts, 0).unwrap(),
                recent_winner(app, &contracts),
                number_of_players(app, &contracts),
                latest_timestamp(app, &contracts),
            )
        };
        let first: (RaffleState, Addr, Option<Addr>, u64, Timestamp) = reads(&app);
        assert_eq!(first, reads(&app));
        assert_eq!(first.0, RaffleState::Open);
        assert_eq!(first.1, players[1]);
        assert_eq!(first.2, Some(players[0].clone()));
    }

    #[test]
    fn rejects_a_gas_lane_that_is_not_32_bytes() {
        let mut app = custom_mock_app();
        let (owner, _) = setup_accounts(&mut app);
        let coordinator = app.api().addr_make("coordinator");
        let code_id = app.store_code(contract_raffle());

        let mut msg = raffle_instantiate_msg(&coordinator, 1, coin(ENTRANCE_FEE, NATIVE_DENOM));
        msg.gas_lane = HexBinary::from(vec![7u8; 16]);
        let err = app
            .instantiate_contract(code_id, owner, &msg, &[], "raffle", None)
            .unwrap_err();
        assert_error(Err(err), ContractError::InvalidGasLane { len: 16 }.to_string());
    }

    #[test]
    fn rejects_an_invalid_coordinator_address() {
        let mut app = custom_mock_app();
        let (owner, _) = setup_accounts(&mut app);
        let code_id = app.store_code(contract_raffle());

        let mut msg = raffle_instantiate_msg(
            &app.api().addr_make("coordinator"),
            1,
            coin(ENTRANCE_FEE, NATIVE_DENOM),
        );
        msg.vrf_coordinator = "not a coordinator".to_string();
        app.instantiate_contract(code_id, owner, &msg, &[], "raffle", None)
            .unwrap_err();
    }
}
