#[cfg(test)]
mod tests {
    use cosmwasm_std::{coin, coins, Uint128};
    use raffle::error::ContractError;
    use utils::state::NATIVE_DENOM;

    use crate::{
        common_setup::{
            helpers::{assert_error, event_attribute, plus_block_seconds},
            setup_accounts_and_block::setup_raffle_participants,
            setup_raffle::{proper_raffle_instantiate, ENTRANCE_FEE, INTERVAL},
        },
        raffle::setup::helpers::{
            enter_raffle, native_balance, number_of_players, perform_upkeep, player,
        },
    };

    #[test]
    fn reverts_when_you_dont_pay_enough() {
        let (mut app, contracts) = proper_raffle_instantiate();
        let players = setup_raffle_participants(&mut app, 1);

        let res = enter_raffle(&mut app, &contracts, &players[0], &[]);
        assert_error(
            res,
            ContractError::NotEnoughValue {
                sent: Uint128::zero(),
                required: Uint128::new(ENTRANCE_FEE),
            }
            .to_string(),
        );

        let res = enter_raffle(
            &mut app,
            &contracts,
            &players[0],
            &coins(ENTRANCE_FEE - 1, NATIVE_DENOM),
        );
        assert_error(
            res,
            ContractError::NotEnoughValue {
                sent: Uint128::new(ENTRANCE_FEE - 1),
                required: Uint128::new(ENTRANCE_FEE),
            }
            .to_string(),
        );
        assert_eq!(number_of_players(&app, &contracts), 0);
    }

    #[test]
    fn rejects_other_denoms() {
        let (mut app, contracts) = proper_raffle_instantiate();
        let players = setup_raffle_participants(&mut app, 1);
        app.sudo(cw_multi_test::SudoMsg::Bank(cw_multi_test::BankSudo::Mint {
            to_address: players[0].to_string(),
            amount: coins(ENTRANCE_FEE, "uatom"),
        }))
        .unwrap();

        enter_raffle(
            &mut app,
            &contracts,
            &players[0],
            &[coin(ENTRANCE_FEE, NATIVE_DENOM), coin(ENTRANCE_FEE, "uatom")],
        )
        .unwrap_err();
        assert_eq!(number_of_players(&app, &contracts), 0);
    }

    #[test]
    fn records_players_when_they_enter() {
        let (mut app, contracts) = proper_raffle_instantiate();
        let players = setup_raffle_participants(&mut app, 2);

        enter_raffle(
            &mut app,
            &contracts,
            &players[0],
            &coins(ENTRANCE_FEE, NATIVE_DENOM),
        )
        .unwrap();
        // Paying more than the fee is accepted
        enter_raffle(
            &mut app,
            &contracts,
            &players[1],
            &coins(ENTRANCE_FEE * 3, NATIVE_DENOM),
        )
        .unwrap();

        assert_eq!(number_of_players(&app, &contracts), 2);
        assert_eq!(player(&app, &contracts, 0).unwrap(), players[0]);
        assert_eq!(player(&app, &contracts, 1).unwrap(), players[1]);
        player(&app, &contracts, 2).unwrap_err();
        assert_eq!(
            native_balance(&app, &contracts.raffle),
            ENTRANCE_FEE * 4
        );
    }

    #[test]
    fn the_same_player_can_enter_twice() {
        let (mut app, contracts) = proper_raffle_instantiate();
        let players = setup_raffle_participants(&mut app, 1);

        for _ in 0..2 {
            enter_raffle(
                &mut app,
                &contracts,
                &players[0],
                &coins(ENTRANCE_FEE, NATIVE_DENOM),
            )
            .unwrap();
        }
        assert_eq!(number_of_players(&app, &contracts), 2);
        assert_eq!(player(&app, &contracts, 1).unwrap(), players[0]);
    }

    #[test]
    fn emits_event_on_enter() {
        let (mut app, contracts) = proper_raffle_instantiate();
        let players = setup_raffle_participants(&mut app, 1);

        let res = enter_raffle(
            &mut app,
            &contracts,
            &players[0],
            &coins(ENTRANCE_FEE, NATIVE_DENOM),
        )
        .unwrap();
        assert_eq!(
            event_attribute(&res, "wasm-raffle_enter", "player"),
            Some(players[0].to_string())
        );
    }

    #[test]
    fn doesnt_allow_entrance_while_calculating() {
        let (mut app, contracts) = proper_raffle_instantiate();
        let players = setup_raffle_participants(&mut app, 2);

        enter_raffle(
            &mut app,
            &contracts,
            &players[0],
            &coins(ENTRANCE_FEE, NATIVE_DENOM),
        )
        .unwrap();
        plus_block_seconds(&mut app, INTERVAL + 1);
        perform_upkeep(&mut app, &contracts, &players[0]).unwrap();

        let res = enter_raffle(
            &mut app,
            &contracts,
            &players[1],
            &coins(ENTRANCE_FEE, NATIVE_DENOM),
        );
        assert_error(res, ContractError::NotOpen.to_string());

        // The payment is checked first
        let res = enter_raffle(&mut app, &contracts, &players[1], &[]);
        assert_error(
            res,
            ContractError::NotEnoughValue {
                sent: Uint128::zero(),
                required: Uint128::new(ENTRANCE_FEE),
            }
            .to_string(),
        );
        assert_eq!(number_of_players(&app, &contracts), 1);
    }
}
