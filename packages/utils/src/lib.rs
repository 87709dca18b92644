pub mod payment;
pub mod state;
