//! Gateway handlers
//!
//! - [`balance`]: transport-independent RPC handler (validation + translation)
//! - [`rpc`]: axum endpoints for the five balance operations
//! - [`health`]: liveness / database ping

pub mod balance;
pub mod health;
pub mod rpc;

pub use balance::BalanceHandler;
pub use health::{HealthResponse, health_check};
pub use rpc::{
    create_balance, delete_balance, get_all_balances, get_balance_by_id, update_balance,
};

