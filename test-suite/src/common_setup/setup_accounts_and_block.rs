use cosmwasm_std::{coin, Addr};
use cw_multi_test::{App, BankSudo, SudoMsg};
use utils::state::NATIVE_DENOM;

pub const INITIAL_BALANCE: u128 = 100_000_000_000;

fn mint(app: &mut App, to: &Addr) {
    app.sudo(SudoMsg::Bank(BankSudo::Mint {
        to_address: to.to_string(),
        amount: vec![coin(INITIAL_BALANCE, NATIVE_DENOM)],
    }))
    .unwrap();
}

/// The deployer, who owns the subscription, and a keeper that only ever calls upkeep
pub fn setup_accounts(app: &mut App) -> (Addr, Addr) {
    let owner = app.api().addr_make("owner");
    let keeper = app.api().addr_make("keeper");
    mint(app, &owner);
    mint(app, &keeper);
    (owner, keeper)
}

pub fn setup_raffle_participants(app: &mut App, count: usize) -> Vec<Addr> {
    (1..=count)
        .map(|i| {
            let player = app.api().addr_make(&format!("player-{i}"));
            mint(app, &player);
            player
        })
        .collect()
}
