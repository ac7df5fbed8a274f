//! Balance repository: the storage contract and its PostgreSQL implementation
//!
//! Every PostgreSQL operation, single statement or not, runs inside its own
//! transaction at REPEATABLE READ. The body's outcome decides commit or
//! rollback; a rollback failure is logged and never replaces the body's error.
//! A cancelled operation drops its `Transaction`, which rolls back.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::{debug, error};
use uuid::Uuid;

use super::error::BalanceError;
use super::models::{Balance, BalanceRow};

/// Storage contract for balance records
#[async_trait]
pub trait BalanceRepository: Send + Sync {
    /// Get a balance by id. `NotFound` when no row matches or the id is nil.
    async fn get_by_id(&self, id: Uuid) -> Result<Balance, BalanceError>;

    /// Get every balance, ordered by id
    async fn get_all(&self) -> Result<Vec<Balance>, BalanceError>;

    /// Insert a new balance
    async fn create(&self, balance: &Balance) -> Result<(), BalanceError>;

    /// Replace the amount of an existing balance. `NoRowsAffected` when the id is unknown.
    async fn update(&self, balance: &Balance) -> Result<(), BalanceError>;

    /// Permanently remove a balance. `NoRowsAffected` when the id is unknown.
    async fn delete(&self, id: Uuid) -> Result<(), BalanceError>;
}

// ============================================================================
// PostgreSQL Implementation
// ============================================================================

const SELECT_BY_ID: &str = "SELECT balance_id, balance FROM balances WHERE balance_id = $1";
const SELECT_ALL: &str = "SELECT balance_id, balance FROM balances ORDER BY balance_id";
const INSERT: &str = "INSERT INTO balances (balance_id, balance) VALUES ($1, $2)";
const UPDATE: &str = "UPDATE balances SET balance = $1 WHERE balance_id = $2";
const DELETE: &str = "DELETE FROM balances WHERE balance_id = $1";

/// PostgreSQL-backed balance repository
pub struct PgBalanceRepository {
    pool: PgPool,
}

impl PgBalanceRepository {
    /// Create a new repository over a shared connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn begin(&self, op: &'static str) -> Result<Transaction<'static, Postgres>, BalanceError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| BalanceError::from_sqlx(op, e))?;

        // Must be the first statement of the transaction
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ")
            .execute(&mut *tx)
            .await
            .map_err(|e| BalanceError::from_sqlx(op, e))?;

        Ok(tx)
    }

    /// Commit on success, roll back on failure
    async fn finish<T>(
        op: &'static str,
        tx: Transaction<'static, Postgres>,
        result: Result<T, BalanceError>,
    ) -> Result<T, BalanceError> {
        match result {
            Ok(value) => match tx.commit().await {
                Ok(()) => Ok(value),
                Err(e) => {
                    error!(op, error = %e, "Commit failed");
                    Err(BalanceError::StorageUnavailable { op, source: e })
                }
            },
            Err(err) => {
                if let Err(e) = tx.rollback().await {
                    error!(op, error = %e, original = %err, "Rollback failed");
                }
                Err(err)
            }
        }
    }
}

#[async_trait]
impl BalanceRepository for PgBalanceRepository {
    async fn get_by_id(&self, id: Uuid) -> Result<Balance, BalanceError> {
        const OP: &str = "get_by_id";
        let mut tx = self.begin(OP).await?;

        let result = sqlx::query_as::<_, BalanceRow>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| BalanceError::from_sqlx(OP, e))
            .and_then(|row| match row {
                Some(row) if !row.balance_id.is_nil() => Ok(Balance::from(row)),
                _ => Err(BalanceError::NotFound { op: OP, id }),
            });

        Self::finish(OP, tx, result).await
    }

    async fn get_all(&self) -> Result<Vec<Balance>, BalanceError> {
        const OP: &str = "get_all";
        let mut tx = self.begin(OP).await?;

        let result = sqlx::query_as::<_, BalanceRow>(SELECT_ALL)
            .fetch_all(&mut *tx)
            .await
            .map(|rows| rows.into_iter().map(Balance::from).collect::<Vec<_>>())
            .map_err(|e| BalanceError::from_sqlx(OP, e));

        if let Ok(balances) = &result {
            debug!(count = balances.len(), "Loaded balances");
        }
        Self::finish(OP, tx, result).await
    }

    async fn create(&self, balance: &Balance) -> Result<(), BalanceError> {
        const OP: &str = "create";
        let mut tx = self.begin(OP).await?;

        let result = sqlx::query(INSERT)
            .bind(balance.id)
            .bind(balance.amount)
            .execute(&mut *tx)
            .await
            .map(|_| ())
            .map_err(|e| BalanceError::from_sqlx(OP, e));

        Self::finish(OP, tx, result).await
    }

    async fn update(&self, balance: &Balance) -> Result<(), BalanceError> {
        const OP: &str = "update";
        let mut tx = self.begin(OP).await?;

        let result = sqlx::query(UPDATE)
            .bind(balance.amount)
            .bind(balance.id)
            .execute(&mut *tx)
            .await
            .map_err(|e| BalanceError::from_sqlx(OP, e))
            .and_then(|done| {
                if done.rows_affected() == 0 {
                    Err(BalanceError::NoRowsAffected {
                        op: OP,
                        id: balance.id,
                    })
                } else {
                    Ok(())
                }
            });

        Self::finish(OP, tx, result).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), BalanceError> {
        const OP: &str = "delete";
        let mut tx = self.begin(OP).await?;

        let result = sqlx::query(DELETE)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| BalanceError::from_sqlx(OP, e))
            .and_then(|done| {
                if done.rows_affected() == 0 {
                    Err(BalanceError::NoRowsAffected { op: OP, id })
                } else {
                    Ok(())
                }
            });

        Self::finish(OP, tx, result).await
    }
}
