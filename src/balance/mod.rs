//! Balance storage gateway
//!
//! PostgreSQL-backed CRUD for the single `balances` table. Records are
//! addressed directly by their primary key.

pub mod error;
pub mod models;
pub mod repository;

pub use error::{BalanceError, ErrorKind};
pub use models::Balance;
pub use repository::{BalanceRepository, PgBalanceRepository};
