use std::sync::Arc;

use crate::db::Database;
use crate::gateway::handlers::BalanceHandler;

/// Gateway shared state
#[derive(Clone)]
pub struct AppState {
    /// Balance RPC handler
    pub balance_handler: Arc<BalanceHandler>,
    /// PostgreSQL pool, pinged by the health check
    pub db: Option<Arc<Database>>,
}

impl AppState {
    pub fn new(balance_handler: Arc<BalanceHandler>, db: Option<Arc<Database>>) -> Self {
        Self {
            balance_handler,
            db,
        }
    }
}
