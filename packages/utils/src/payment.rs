use cosmwasm_std::{MessageInfo, StdError, StdResult, Uint128};

/// Returns how much of `denom` was attached to the message.
/// Funds in any other denomination are rejected so they can't get stuck in the contract.
pub fn paid_amount(msg_info: &MessageInfo, denom: &str) -> StdResult<Uint128> {
    if let Some(other) = msg_info.funds.iter().find(|c| c.denom != denom) {
        return Err(StdError::generic_err(format!(
            "Invalid payment sent. Expected only {}, received {}",
            denom, other
        )));
    }

    Ok(msg_info
        .funds
        .iter()
        .fold(Uint128::zero(), |acc, c| acc + c.amount))
}
