pub mod error;
pub mod handlers;
pub mod openapi;
pub mod services;
pub mod state;
pub mod types;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use state::AppState;

/// Build the gateway router
pub fn router(state: Arc<AppState>) -> Router {
    let rpc_routes = Router::new()
        .route("/GetAllBalances", post(handlers::get_all_balances))
        .route("/GetBalanceByID", post(handlers::get_balance_by_id))
        .route("/CreateBalance", post(handlers::create_balance))
        .route("/UpdateBalance", post(handlers::update_balance))
        .route("/DeleteBalance", post(handlers::delete_balance));

    Router::new()
        .route("/api/v1/health", get(handlers::health_check))
        .nest("/rpc/BalanceService", rpc_routes)
        .with_state(state)
        // OpenAPI / Swagger UI (stateless, added after with_state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Start HTTP Gateway server
pub async fn run_server(host: &str, port: u16, state: Arc<AppState>) -> std::io::Result<()> {
    let app = router(state);

    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr).await.inspect_err(|e| {
        tracing::error!(addr = %addr, error = %e, "Failed to bind; port may already be in use");
    })?;

    tracing::info!(addr = %addr, "Gateway listening");
    tracing::info!("API Docs: http://{}/docs", addr);
    tracing::info!("RPC API:  /rpc/BalanceService/*");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, draining connections");
}
