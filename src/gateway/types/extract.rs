//! JSON body extractor for RPC messages
//!
//! Wraps [`axum::Json`] so a body that fails to decode is answered with the
//! same 400 / `INVALID_PARAMETER` error body as a failed field check, instead
//! of axum's plain-text rejection.

use axum::Json;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use serde::de::DeserializeOwned;

use crate::balance::ErrorKind;

use super::response::{ApiError, error_codes};

/// Decoded RPC request message
#[derive(Debug)]
pub struct RpcJson<T>(pub T);

impl<S, T> FromRequest<S> for RpcJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Last path segment is the RPC operation name
        let op = req
            .uri()
            .path()
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string();

        let Json(message) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::warn!(op = %op, error = %rejection.body_text(), "Undecodable request body");
                ApiError::new(
                    StatusCode::BAD_REQUEST,
                    error_codes::INVALID_PARAMETER,
                    ErrorKind::Validation.name(),
                    format!("{}: decode: {}", op, rejection.body_text()),
                )
            })?;

        Ok(Self(message))
    }
}
