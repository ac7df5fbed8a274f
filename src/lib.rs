//! Balance Service
//!
//! CRUD over a single balance record type, served as RPC operations.
//!
//! # Modules
//!
//! - [`balance`] - Balance model and transactional PostgreSQL repository
//! - [`gateway`] - RPC handler, balance service and HTTP transport
//! - [`db`] - Connection pool management
//! - [`config`] - YAML + environment configuration
//! - [`logging`] - tracing subscriber setup

pub mod balance;
pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;

// Convenient re-exports at crate root
pub use balance::{Balance, BalanceError, BalanceRepository, ErrorKind, PgBalanceRepository};
pub use gateway::handlers::BalanceHandler;
pub use gateway::services::BalanceService;
