//! Balance storage error types

use thiserror::Error;
use uuid::Uuid;

/// Flat failure classification shared by every layer
///
/// Callers use it to tell fixable client errors from not-found and
/// retryable storage failures without matching on layer-specific enums.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    NoRowsAffected,
    ConstraintViolation,
    StorageUnavailable,
    DeadlineExceeded,
}

impl ErrorKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Validation => "VALIDATION_ERROR",
            Self::NotFound => "NOT_FOUND",
            Self::NoRowsAffected => "NO_ROWS_AFFECTED",
            Self::ConstraintViolation => "CONSTRAINT_VIOLATION",
            Self::StorageUnavailable => "STORAGE_UNAVAILABLE",
            Self::DeadlineExceeded => "DEADLINE_EXCEEDED",
        }
    }
}

/// Errors raised by a [`BalanceRepository`](super::BalanceRepository)
///
/// Every variant carries the repository operation that produced it.
#[derive(Error, Debug)]
pub enum BalanceError {
    #[error("{op}: balance {id} not found")]
    NotFound { op: &'static str, id: Uuid },

    #[error("{op}: no rows affected for balance {id}")]
    NoRowsAffected { op: &'static str, id: Uuid },

    #[error("{op}: constraint violation: {source}")]
    ConstraintViolation {
        op: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("{op}: storage unavailable: {source}")]
    StorageUnavailable {
        op: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl BalanceError {
    /// Classify a driver error raised while executing `op`
    pub fn from_sqlx(op: &'static str, err: sqlx::Error) -> Self {
        let is_constraint = match &err {
            sqlx::Error::Database(db) => {
                db.is_unique_violation()
                    || db.is_foreign_key_violation()
                    || db.is_check_violation()
                    // not_null_violation
                    || db.code().as_deref() == Some("23502")
            }
            _ => false,
        };

        if is_constraint {
            Self::ConstraintViolation { op, source: err }
        } else {
            Self::StorageUnavailable { op, source: err }
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::NoRowsAffected { .. } => ErrorKind::NoRowsAffected,
            Self::ConstraintViolation { .. } => ErrorKind::ConstraintViolation,
            Self::StorageUnavailable { .. } => ErrorKind::StorageUnavailable,
        }
    }

    pub fn op(&self) -> &'static str {
        match self {
            Self::NotFound { op, .. }
            | Self::NoRowsAffected { op, .. }
            | Self::ConstraintViolation { op, .. }
            | Self::StorageUnavailable { op, .. } => op,
        }
    }

    /// Whether retrying the same call may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::StorageUnavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_errors_are_storage_unavailable() {
        let err = BalanceError::from_sqlx("get_all", sqlx::Error::PoolTimedOut);
        assert_eq!(err.kind(), ErrorKind::StorageUnavailable);
        assert_eq!(err.op(), "get_all");
        assert!(err.is_retryable());
    }

    #[test]
    fn test_not_found_message_names_operation() {
        let id = Uuid::new_v4();
        let err = BalanceError::NotFound { op: "get_by_id", id };
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(!err.is_retryable());
        assert_eq!(err.to_string(), format!("get_by_id: balance {} not found", id));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ErrorKind::NoRowsAffected.name(), "NO_ROWS_AFFECTED");
        assert_eq!(ErrorKind::Validation.name(), "VALIDATION_ERROR");
    }
}
