pub mod enter_raffle;
pub mod init;
