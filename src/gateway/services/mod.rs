//! Gateway Services Layer
//!
//! Business logic sits here; handlers translate messages and delegate.

pub mod balance;

pub use balance::BalanceService;
