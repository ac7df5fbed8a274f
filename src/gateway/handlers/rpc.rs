//! RPC endpoints
//!
//! Thin HTTP adapters: decode the JSON message with [`RpcJson`], hand it to
//! [`BalanceHandler`](super::BalanceHandler), wrap the reply in
//! [`ApiResponse`](crate::gateway::types::ApiResponse).

use std::sync::Arc;

use axum::extract::State;

use super::super::state::AppState;
use super::super::types::{
    ApiResult, CreateBalanceRequest, CreateBalanceResponse, DeleteBalanceRequest,
    DeleteBalanceResponse, GetAllBalancesRequest, GetAllBalancesResponse, GetBalanceByIdRequest,
    GetBalanceByIdResponse, RpcJson, UpdateBalanceRequest, UpdateBalanceResponse, ok,
};

/// List every balance
///
/// POST /rpc/BalanceService/GetAllBalances
#[utoipa::path(
    post,
    path = "/rpc/BalanceService/GetAllBalances",
    request_body = GetAllBalancesRequest,
    responses(
        (status = 200, description = "All balances", body = GetAllBalancesResponse, content_type = "application/json"),
        (status = 400, description = "Undecodable body"),
        (status = 503, description = "Storage unavailable")
    ),
    tag = "Balance"
)]
pub async fn get_all_balances(
    State(state): State<Arc<AppState>>,
    RpcJson(req): RpcJson<GetAllBalancesRequest>,
) -> ApiResult<GetAllBalancesResponse> {
    ok(state.balance_handler.get_all_balances(req).await?)
}

/// Get a balance by id
///
/// POST /rpc/BalanceService/GetBalanceByID
#[utoipa::path(
    post,
    path = "/rpc/BalanceService/GetBalanceByID",
    request_body = GetBalanceByIdRequest,
    responses(
        (status = 200, description = "Balance", body = GetBalanceByIdResponse, content_type = "application/json"),
        (status = 400, description = "Missing or malformed id"),
        (status = 404, description = "Balance not found"),
        (status = 503, description = "Storage unavailable")
    ),
    tag = "Balance"
)]
pub async fn get_balance_by_id(
    State(state): State<Arc<AppState>>,
    RpcJson(req): RpcJson<GetBalanceByIdRequest>,
) -> ApiResult<GetBalanceByIdResponse> {
    ok(state.balance_handler.get_balance_by_id(req).await?)
}

/// Create a balance with a server-generated id
///
/// POST /rpc/BalanceService/CreateBalance
#[utoipa::path(
    post,
    path = "/rpc/BalanceService/CreateBalance",
    request_body = CreateBalanceRequest,
    responses(
        (status = 200, description = "Created", body = CreateBalanceResponse, content_type = "application/json"),
        (status = 400, description = "Undecodable body or amount rejected by policy"),
        (status = 409, description = "Constraint violation"),
        (status = 503, description = "Storage unavailable")
    ),
    tag = "Balance"
)]
pub async fn create_balance(
    State(state): State<Arc<AppState>>,
    RpcJson(req): RpcJson<CreateBalanceRequest>,
) -> ApiResult<CreateBalanceResponse> {
    ok(state.balance_handler.create_balance(req).await?)
}

/// Replace the amount of a balance
///
/// POST /rpc/BalanceService/UpdateBalance
#[utoipa::path(
    post,
    path = "/rpc/BalanceService/UpdateBalance",
    request_body = UpdateBalanceRequest,
    responses(
        (status = 200, description = "Updated", body = UpdateBalanceResponse, content_type = "application/json"),
        (status = 400, description = "Missing or malformed id, or amount rejected"),
        (status = 404, description = "No rows affected"),
        (status = 503, description = "Storage unavailable")
    ),
    tag = "Balance"
)]
pub async fn update_balance(
    State(state): State<Arc<AppState>>,
    RpcJson(req): RpcJson<UpdateBalanceRequest>,
) -> ApiResult<UpdateBalanceResponse> {
    ok(state.balance_handler.update_balance(req).await?)
}

/// Delete a balance
///
/// POST /rpc/BalanceService/DeleteBalance
#[utoipa::path(
    post,
    path = "/rpc/BalanceService/DeleteBalance",
    request_body = DeleteBalanceRequest,
    responses(
        (status = 200, description = "Deleted", body = DeleteBalanceResponse, content_type = "application/json"),
        (status = 400, description = "Missing or malformed id"),
        (status = 404, description = "No rows affected"),
        (status = 503, description = "Storage unavailable")
    ),
    tag = "Balance"
)]
pub async fn delete_balance(
    State(state): State<Arc<AppState>>,
    RpcJson(req): RpcJson<DeleteBalanceRequest>,
) -> ApiResult<DeleteBalanceResponse> {
    ok(state.balance_handler.delete_balance(req).await?)
}
