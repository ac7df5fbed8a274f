//! RPC request/response messages
//!
//! Identifiers travel as canonical UUID text; amounts as JSON numbers.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::balance::Balance;

/// Absent and `null` ids decode to empty so the presence check reports them
fn id_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Wire form of a balance record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BalanceMessage {
    #[schema(example = "7f1c2a9e-5b0d-4c8e-9a57-3f0e2d6b1c44")]
    pub id: String,
    #[schema(example = 1234.25)]
    pub amount: f64,
}

impl From<Balance> for BalanceMessage {
    fn from(balance: Balance) -> Self {
        Self {
            id: balance.id.to_string(),
            amount: balance.amount,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct GetAllBalancesRequest {}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GetAllBalancesResponse {
    pub balances: Vec<BalanceMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct GetBalanceByIdRequest {
    #[validate(length(min = 1))]
    #[serde(default, deserialize_with = "id_or_empty")]
    #[schema(example = "7f1c2a9e-5b0d-4c8e-9a57-3f0e2d6b1c44")]
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GetBalanceByIdResponse {
    pub balance: BalanceMessage,
}

/// Create request. Any `id` sent by the caller is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateBalanceRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[schema(example = 1234.25)]
    pub amount: f64,
}

/// Create ack carrying the server-generated id
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateBalanceResponse {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateBalanceRequest {
    #[validate(length(min = 1))]
    #[serde(default, deserialize_with = "id_or_empty")]
    #[schema(example = "7f1c2a9e-5b0d-4c8e-9a57-3f0e2d6b1c44")]
    pub id: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateBalanceResponse {}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct DeleteBalanceRequest {
    #[validate(length(min = 1))]
    #[serde(default, deserialize_with = "id_or_empty")]
    #[schema(example = "7f1c2a9e-5b0d-4c8e-9a57-3f0e2d6b1c44")]
    pub id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct DeleteBalanceResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_or_null_id_decodes_empty() {
        let req: GetBalanceByIdRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.id, "");
        let req: DeleteBalanceRequest = serde_json::from_str(r#"{"id": null}"#).unwrap();
        assert_eq!(req.id, "");
        let req: UpdateBalanceRequest = serde_json::from_str(r#"{"amount": 1.5}"#).unwrap();
        assert_eq!(req.id, "");
    }

    #[test]
    fn test_wrong_id_type_still_fails_to_decode() {
        assert!(serde_json::from_str::<GetBalanceByIdRequest>(r#"{"id": 42}"#).is_err());
        assert!(serde_json::from_str::<UpdateBalanceRequest>(r#"{"id": "x"}"#).is_err());
    }
}
