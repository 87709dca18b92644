/// Denomination entrance fees are paid in on Stargaze networks.
pub const NATIVE_DENOM: &str = "ustars";

/// Denomination the randomness-oracle mock charges subscriptions in.
pub const ORACLE_FEE_DENOM: &str = "ulink";
