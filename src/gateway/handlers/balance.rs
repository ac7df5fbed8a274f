//! Balance RPC handler
//!
//! Translates RPC messages to domain values, validates them, calls the
//! [`BalanceService`] under a request deadline and translates the result back.
//! Validation failures never reach the service.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, warn};
use uuid::Uuid;
use validator::Validate;

use crate::balance::{Balance, BalanceError};
use crate::gateway::error::HandlerError;
use crate::gateway::services::BalanceService;
use crate::gateway::types::validation::{check_required, parse_identifier};
use crate::gateway::types::{
    AmountPolicy, BalanceMessage, CreateBalanceRequest, CreateBalanceResponse,
    DeleteBalanceRequest, DeleteBalanceResponse, GetAllBalancesRequest, GetAllBalancesResponse,
    GetBalanceByIdRequest, GetBalanceByIdResponse, UpdateBalanceRequest, UpdateBalanceResponse,
};

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
const ID_FIELD: &str = "id";

pub struct BalanceHandler {
    service: Arc<BalanceService>,
    policy: AmountPolicy,
    request_timeout: Duration,
}

impl BalanceHandler {
    pub fn new(service: Arc<BalanceService>, policy: AmountPolicy) -> Self {
        Self {
            service,
            policy,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub async fn get_all_balances(
        &self,
        _req: GetAllBalancesRequest,
    ) -> Result<GetAllBalancesResponse, HandlerError> {
        const OP: &str = "GetAllBalances";

        let balances = self
            .call(OP, self.service.get_all_balances())
            .await
            .inspect_err(|e| error!(error = %e, "GetAllBalances failed"))?;

        Ok(GetAllBalancesResponse {
            balances: balances.into_iter().map(BalanceMessage::from).collect(),
        })
    }

    pub async fn get_balance_by_id(
        &self,
        req: GetBalanceByIdRequest,
    ) -> Result<GetBalanceByIdResponse, HandlerError> {
        const OP: &str = "GetBalanceByID";

        let id = Self::validate_id(OP, &req, &req.id)?;
        let balance = self
            .call(OP, self.service.get_balance_by_id(id))
            .await
            .inspect_err(|e| error!(id = %id, error = %e, "GetBalanceByID failed"))?;

        Ok(GetBalanceByIdResponse {
            balance: balance.into(),
        })
    }

    /// The caller's `id`, if any, is discarded; identifiers are assigned here.
    pub async fn create_balance(
        &self,
        req: CreateBalanceRequest,
    ) -> Result<CreateBalanceResponse, HandlerError> {
        const OP: &str = "CreateBalance";

        let amount = self.validate_amount(OP, req.amount)?;
        let balance = Balance::new(Uuid::new_v4(), amount);

        self.call(OP, self.service.create_balance(&balance))
            .await
            .inspect_err(|e| error!(id = %balance.id, amount, error = %e, "CreateBalance failed"))?;

        Ok(CreateBalanceResponse {
            id: balance.id.to_string(),
        })
    }

    pub async fn update_balance(
        &self,
        req: UpdateBalanceRequest,
    ) -> Result<UpdateBalanceResponse, HandlerError> {
        const OP: &str = "UpdateBalance";

        let id = Self::validate_id(OP, &req, &req.id)?;
        let amount = self.validate_amount(OP, req.amount)?;
        let balance = Balance::new(id, amount);

        self.call(OP, self.service.update_balance(&balance))
            .await
            .inspect_err(|e| error!(id = %id, amount, error = %e, "UpdateBalance failed"))?;

        Ok(UpdateBalanceResponse {})
    }

    pub async fn delete_balance(
        &self,
        req: DeleteBalanceRequest,
    ) -> Result<DeleteBalanceResponse, HandlerError> {
        const OP: &str = "DeleteBalance";

        let id = Self::validate_id(OP, &req, &req.id)?;
        self.call(OP, self.service.delete_balance(id))
            .await
            .inspect_err(|e| error!(id = %id, error = %e, "DeleteBalance failed"))?;

        Ok(DeleteBalanceResponse {})
    }

    /// Presence check, then UUID format check
    fn validate_id<R: Validate>(op: &'static str, req: &R, raw: &str) -> Result<Uuid, HandlerError> {
        check_required(ID_FIELD, req)
            .and_then(|()| parse_identifier(ID_FIELD, raw))
            .map_err(|source| {
                warn!(op, id = raw, error = %source, "Rejected identifier");
                HandlerError::Validation { op, source }
            })
    }

    fn validate_amount(&self, op: &'static str, amount: f64) -> Result<f64, HandlerError> {
        self.policy.check("amount", amount).map_err(|source| {
            warn!(op, amount, error = %source, "Rejected amount");
            HandlerError::Validation { op, source }
        })
    }

    /// Run a service call under the request deadline
    ///
    /// On expiry the call's future is dropped, which rolls back any open
    /// transaction.
    async fn call<T, F>(&self, op: &'static str, fut: F) -> Result<T, HandlerError>
    where
        F: Future<Output = Result<T, BalanceError>>,
    {
        match tokio::time::timeout(self.request_timeout, fut).await {
            Ok(result) => result.map_err(|source| HandlerError::Service { op, source }),
            Err(_) => Err(HandlerError::DeadlineExceeded {
                op,
                timeout_ms: self.request_timeout.as_millis() as u64,
            }),
        }
    }
}
