//! Handler error types
//!
//! Every variant is prefixed with the RPC operation name.

use thiserror::Error;

use crate::balance::{BalanceError, ErrorKind};
use crate::gateway::types::validation::ValidationError;

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("{op}: validate: {source}")]
    Validation {
        op: &'static str,
        #[source]
        source: ValidationError,
    },

    #[error("{op}: {source}")]
    Service {
        op: &'static str,
        #[source]
        source: BalanceError,
    },

    #[error("{op}: deadline of {timeout_ms}ms exceeded")]
    DeadlineExceeded { op: &'static str, timeout_ms: u64 },
}

impl HandlerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Service { source, .. } => source.kind(),
            Self::DeadlineExceeded { .. } => ErrorKind::DeadlineExceeded,
        }
    }

    pub fn op(&self) -> &'static str {
        match self {
            Self::Validation { op, .. }
            | Self::Service { op, .. }
            | Self::DeadlineExceeded { op, .. } => op,
        }
    }
}
