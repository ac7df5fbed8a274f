//! Input validation for RPC messages
//!
//! Identifier checks run in a fixed order: presence, then UUID format.
//! Amount checks are a deployment policy loaded from config.

use uuid::Uuid;
use validator::Validate;

use crate::config::BalancePolicyConfig;

/// Validation errors for balance requests
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("Invalid format for {field}: '{value}' (expected: {expected})")]
    InvalidFormat {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} out of range: expected {min}..={max}, got {actual}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        actual: f64,
    },
}

impl ValidationError {
    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field }
            | Self::InvalidFormat { field, .. }
            | Self::NotFinite { field, .. }
            | Self::OutOfRange { field, .. } => *field,
        }
    }
}

/// Run the struct-level `validator` rules guarding `field`
pub fn check_required<T: Validate>(field: &'static str, req: &T) -> Result<(), ValidationError> {
    req.validate()
        .map_err(|_| ValidationError::Missing { field })
}

/// Hyphen offsets of the 8-4-4-4-12 form
const HYPHENS: [usize; 4] = [8, 13, 18, 23];
const CANONICAL_LEN: usize = 36;

/// Parse a caller-supplied identifier in canonical UUID text form
///
/// Only the hyphenated 8-4-4-4-12 form is accepted (either case). The
/// simple, braced and URN forms are rejected.
///
/// # Examples
/// ```
/// use balance_service::gateway::types::validation::parse_identifier;
///
/// assert!(parse_identifier("id", "7f1c2a9e-5b0d-4c8e-9a57-3f0e2d6b1c44").is_ok());
/// assert!(parse_identifier("id", "").is_err());
/// assert!(parse_identifier("id", "not-a-uuid").is_err());
/// assert!(parse_identifier("id", "7f1c2a9e5b0d4c8e9a573f0e2d6b1c44").is_err());
/// ```
pub fn parse_identifier(field: &'static str, raw: &str) -> Result<Uuid, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::Missing { field });
    }

    let invalid = || ValidationError::InvalidFormat {
        field,
        value: raw.to_string(),
        expected: "UUID, e.g. 7f1c2a9e-5b0d-4c8e-9a57-3f0e2d6b1c44",
    };

    let bytes = raw.as_bytes();
    if bytes.len() != CANONICAL_LEN || HYPHENS.iter().any(|&i| bytes[i] != b'-') {
        return Err(invalid());
    }
    Uuid::parse_str(raw).map_err(|_| invalid())
}

/// Accepted range for balance amounts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountPolicy {
    min: f64,
    max: f64,
}

impl AmountPolicy {
    /// Any finite amount
    pub fn unbounded() -> Self {
        Self {
            min: f64::MIN,
            max: f64::MAX,
        }
    }

    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            min: min.unwrap_or(f64::MIN),
            max: max.unwrap_or(f64::MAX),
        }
    }

    pub fn check(&self, field: &'static str, amount: f64) -> Result<f64, ValidationError> {
        if !amount.is_finite() {
            return Err(ValidationError::NotFinite {
                field,
                value: amount,
            });
        }
        if amount < self.min || amount > self.max {
            return Err(ValidationError::OutOfRange {
                field,
                min: self.min,
                max: self.max,
                actual: amount,
            });
        }
        Ok(amount)
    }
}

impl Default for AmountPolicy {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl From<&BalancePolicyConfig> for AmountPolicy {
    fn from(config: &BalancePolicyConfig) -> Self {
        Self::new(config.min_amount, config.max_amount)
    }
}
