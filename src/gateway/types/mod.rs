//! Gateway types module
//!
//! ## Input Types
//! - [`messages`]: RPC request/response messages
//! - [`RpcJson`]: body extractor answering decode failures with [`ApiError`]
//! - [`validation`]: identifier and amount validation
//!
//! ## Output Types
//! - [`ApiResponse<T>`]: Unified API response wrapper
//! - [`ApiError`]: failure mapped to HTTP status and error code

pub mod extract;
pub mod messages;
pub mod response;
pub mod validation;

// Re-export commonly used types at module root
pub use extract::RpcJson;
pub use messages::{
    BalanceMessage, CreateBalanceRequest, CreateBalanceResponse, DeleteBalanceRequest,
    DeleteBalanceResponse, GetAllBalancesRequest, GetAllBalancesResponse, GetBalanceByIdRequest,
    GetBalanceByIdResponse, UpdateBalanceRequest, UpdateBalanceResponse,
};
pub use response::{ApiError, ApiResponse, ApiResult, error_codes, ok};
pub use validation::{AmountPolicy, ValidationError};
