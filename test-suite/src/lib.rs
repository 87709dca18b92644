pub mod common_setup;
pub mod coordinator;
pub mod raffle;
