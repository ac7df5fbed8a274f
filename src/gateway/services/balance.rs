//! Balance Service - storage-agnostic contract used by the RPC handler
//!
//! Each operation delegates one-to-one to the repository and returns its
//! result and error unchanged.

use std::sync::Arc;

use uuid::Uuid;

use crate::balance::{Balance, BalanceError, BalanceRepository};

pub struct BalanceService {
    repo: Arc<dyn BalanceRepository>,
}

impl BalanceService {
    pub fn new(repo: Arc<dyn BalanceRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all_balances(&self) -> Result<Vec<Balance>, BalanceError> {
        self.repo.get_all().await
    }

    pub async fn update_balance(&self, balance: &Balance) -> Result<(), BalanceError> {
        self.repo.update(balance).await
    }

    pub async fn get_balance_by_id(&self, id: Uuid) -> Result<Balance, BalanceError> {
        self.repo.get_by_id(id).await
    }

    pub async fn create_balance(&self, balance: &Balance) -> Result<(), BalanceError> {
        self.repo.create(balance).await
    }

    pub async fn delete_balance(&self, id: Uuid) -> Result<(), BalanceError> {
        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balance::ErrorKind;
    use crate::balance::repository::mock::InMemoryBalanceRepository;

    fn service_with(repo: Arc<InMemoryBalanceRepository>) -> BalanceService {
        BalanceService::new(repo)
    }

    #[tokio::test]
    async fn test_delegates_each_operation_once() {
        let repo = Arc::new(InMemoryBalanceRepository::new());
        let service = service_with(repo.clone());
        let balance = Balance::new(Uuid::new_v4(), 1234.25);

        service.create_balance(&balance).await.unwrap();
        assert_eq!(service.get_balance_by_id(balance.id).await.unwrap(), balance);

        let updated = Balance::new(balance.id, 4321.0);
        service.update_balance(&updated).await.unwrap();
        assert_eq!(service.get_all_balances().await.unwrap(), vec![updated]);

        service.delete_balance(balance.id).await.unwrap();
        assert_eq!(repo.call_count(), 5);
    }

    #[tokio::test]
    async fn test_errors_pass_through_unchanged() {
        let repo = Arc::new(InMemoryBalanceRepository::new());
        let service = service_with(repo.clone());
        let id = Uuid::new_v4();

        let err = service.delete_balance(id).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoRowsAffected);
        assert_eq!(err.op(), "delete");

        repo.set_unavailable(true);
        let err = service.get_all_balances().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StorageUnavailable);
    }
}
