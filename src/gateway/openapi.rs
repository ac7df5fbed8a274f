//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::{
    BalanceMessage, CreateBalanceRequest, CreateBalanceResponse, DeleteBalanceRequest,
    DeleteBalanceResponse, GetAllBalancesRequest, GetAllBalancesResponse, GetBalanceByIdRequest,
    GetBalanceByIdResponse, UpdateBalanceRequest, UpdateBalanceResponse,
};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Balance Service API",
        version = "1.0.0",
        description = "CRUD over balance records backed by PostgreSQL.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::rpc::get_all_balances,
        crate::gateway::handlers::rpc::get_balance_by_id,
        crate::gateway::handlers::rpc::create_balance,
        crate::gateway::handlers::rpc::update_balance,
        crate::gateway::handlers::rpc::delete_balance,
    ),
    components(
        schemas(
            HealthResponse,
            BalanceMessage,
            GetAllBalancesRequest,
            GetAllBalancesResponse,
            GetBalanceByIdRequest,
            GetBalanceByIdResponse,
            CreateBalanceRequest,
            CreateBalanceResponse,
            UpdateBalanceRequest,
            UpdateBalanceResponse,
            DeleteBalanceRequest,
            DeleteBalanceResponse,
        )
    ),
    tags(
        (name = "Balance", description = "Balance record operations"),
        (name = "System", description = "Health checks and system info")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_spec_generates() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "Balance Service API");
        assert_eq!(spec.info.version, "1.0.0");
    }

    #[test]
    fn test_rpc_endpoints_registered() {
        let spec = ApiDoc::openapi();
        let paths = spec.paths;
        assert!(paths.paths.contains_key("/api/v1/health"));
        for op in [
            "GetAllBalances",
            "GetBalanceByID",
            "CreateBalance",
            "UpdateBalance",
            "DeleteBalance",
        ] {
            let path = format!("/rpc/BalanceService/{}", op);
            assert!(paths.paths.contains_key(&path), "{path} missing");
        }
    }

    #[test]
    fn test_openapi_json_serializable() {
        let json = ApiDoc::openapi().to_json().unwrap();
        assert!(json.contains("BalanceMessage"));
    }
}
