//! Balance data model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted balance record
///
/// `id` is assigned by the service at creation and never changes; only
/// `amount` is mutated by updates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub id: Uuid,
    pub amount: f64,
}

impl Balance {
    pub fn new(id: Uuid, amount: f64) -> Self {
        Self { id, amount }
    }
}

/// Row shape of the `balances` table
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct BalanceRow {
    pub balance_id: Uuid,
    pub balance: f64,
}

impl From<BalanceRow> for Balance {
    fn from(row: BalanceRow) -> Self {
        Self {
            id: row.balance_id,
            amount: row.balance,
        }
    }
}
