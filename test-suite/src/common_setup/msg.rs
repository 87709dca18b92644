use cosmwasm_std::Addr;

pub struct RaffleContracts {
    pub raffle: Addr,
    pub coordinator: Addr,
    /// Owner of the subscription and admin of both contracts
    pub owner: Addr,
    pub sub_id: u64,
}
