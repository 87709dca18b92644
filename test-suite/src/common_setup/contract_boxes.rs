use cosmwasm_std::Empty;
use cw_multi_test::{App, Contract, ContractWrapper};

pub fn custom_mock_app() -> App {
    App::default()
}

pub fn contract_raffle() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        raffle::contract::execute,
        raffle::contract::instantiate,
        raffle::contract::query,
    )
    .with_reply(raffle::contract::reply)
    .with_migrate(raffle::contract::migrate);
    Box::new(contract)
}

pub fn contract_vrf_coordinator_mock() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        vrf_coordinator_mock::contract::execute,
        vrf_coordinator_mock::contract::instantiate,
        vrf_coordinator_mock::contract::query,
    )
    .with_migrate(vrf_coordinator_mock::contract::migrate);
    Box::new(contract)
}
