//! Balance table definition
//!
//! The service does not create or migrate tables at start-up; this DDL is
//! what deployments and the integration tests provision.

pub const BALANCES_TABLE: &str = "balances";

pub const CREATE_BALANCES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS balances (
    balance_id UUID PRIMARY KEY,
    balance    DOUBLE PRECISION NOT NULL
)
"#;
