//! Balance Service entry point
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────┐    ┌──────────┐
//! │ Gateway  │───▶│ Handler  │───▶│ Service  │───▶│   Repo   │──▶ PostgreSQL
//! │  (RPC)   │    │(validate)│    │(delegate)│    │  (txn)   │
//! └──────────┘    └──────────┘    └──────────┘    └──────────┘
//! ```

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use balance_service::config::AppConfig;
use balance_service::db::Database;
use balance_service::gateway::state::AppState;
use balance_service::gateway::types::AmountPolicy;
use balance_service::{BalanceHandler, BalanceService, PgBalanceRepository};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let app_config = AppConfig::load(&env).context("Failed to load configuration")?;
    let _log_guard = balance_service::logging::init_logging(&app_config);

    tracing::info!(env = %env, version = env!("GIT_HASH"), "Starting balance service");

    let db = Arc::new(
        Database::connect(&app_config.postgres)
            .await
            .context("Failed to connect to PostgreSQL")?,
    );

    let repo = Arc::new(PgBalanceRepository::new(db.pool().clone()));
    let service = Arc::new(BalanceService::new(repo));
    let policy = AmountPolicy::from(&app_config.balance_policy);
    let handler = BalanceHandler::new(service, policy).with_request_timeout(Duration::from_millis(
        app_config.gateway.request_timeout_ms,
    ));

    let state = Arc::new(AppState::new(Arc::new(handler), Some(db)));

    let gateway_config = &app_config.gateway;
    let port = get_port_override().unwrap_or(gateway_config.port);

    balance_service::gateway::run_server(&gateway_config.host, port, state)
        .await
        .context("Gateway server error")?;

    tracing::info!("Balance service stopped");
    Ok(())
}
