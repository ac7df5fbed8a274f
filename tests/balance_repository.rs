//! PostgreSQL integration tests for the balance pipeline
//!
//! Run against a disposable database:
//! `DATABASE_URL=postgresql://... cargo test -- --ignored`

use std::sync::Arc;

use uuid::Uuid;

use balance_service::config::PostgresConfig;
use balance_service::db::Database;
use balance_service::db::schema::{BALANCES_TABLE, CREATE_BALANCES_TABLE};
use balance_service::gateway::types::{
    AmountPolicy, CreateBalanceRequest, DeleteBalanceRequest, GetAllBalancesRequest,
    GetBalanceByIdRequest, UpdateBalanceRequest,
};
use balance_service::{
    Balance, BalanceHandler, BalanceRepository, BalanceService, ErrorKind, PgBalanceRepository,
};

async fn create_test_db() -> Database {
    let mut config = PostgresConfig::default();
    if let Ok(url) = std::env::var("DATABASE_URL") {
        config.url = url;
    }
    let db = Database::connect(&config)
        .await
        .expect("Failed to connect");
    sqlx::query(CREATE_BALANCES_TABLE)
        .execute(db.pool())
        .await
        .expect("Failed to create balances table");
    db
}

// ========================================================================
// Repository
// ========================================================================

#[tokio::test]
#[ignore = "requires PostgreSQL database"]
async fn test_create_get_delete() {
    let db = create_test_db().await;
    let repo = PgBalanceRepository::new(db.pool().clone());
    let balance = Balance::new(Uuid::new_v4(), 1234.25);

    repo.create(&balance).await.unwrap();
    assert_eq!(repo.get_by_id(balance.id).await.unwrap(), balance);

    repo.delete(balance.id).await.unwrap();
    let err = repo.get_by_id(balance.id).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
#[ignore = "requires PostgreSQL database"]
async fn test_update_then_read_returns_new_amount() {
    let db = create_test_db().await;
    let repo = PgBalanceRepository::new(db.pool().clone());
    let id = Uuid::new_v4();

    repo.create(&Balance::new(id, 1234.25)).await.unwrap();
    repo.update(&Balance::new(id, 4321.0)).await.unwrap();
    assert_eq!(repo.get_by_id(id).await.unwrap().amount, 4321.0);

    repo.delete(id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires PostgreSQL database"]
async fn test_update_unknown_id_is_no_rows_affected() {
    let db = create_test_db().await;
    let repo = PgBalanceRepository::new(db.pool().clone());

    let err = repo
        .update(&Balance::new(Uuid::new_v4(), 1.0))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoRowsAffected);
}

#[tokio::test]
#[ignore = "requires PostgreSQL database"]
async fn test_delete_unknown_and_nil_ids_fail() {
    let db = create_test_db().await;
    let repo = PgBalanceRepository::new(db.pool().clone());

    for id in [Uuid::new_v4(), Uuid::nil()] {
        let err = repo.delete(id).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoRowsAffected);
    }
}

#[tokio::test]
#[ignore = "requires PostgreSQL database"]
async fn test_duplicate_id_is_constraint_violation() {
    let db = create_test_db().await;
    let repo = PgBalanceRepository::new(db.pool().clone());
    let balance = Balance::new(Uuid::new_v4(), 1.0);

    repo.create(&balance).await.unwrap();
    let err = repo.create(&balance).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConstraintViolation);

    repo.delete(balance.id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires PostgreSQL database"]
async fn test_get_all_is_ordered_by_id() {
    let db = create_test_db().await;
    let repo = PgBalanceRepository::new(db.pool().clone());
    let created: Vec<Balance> = (0..3)
        .map(|i| Balance::new(Uuid::new_v4(), i as f64))
        .collect();
    for b in &created {
        repo.create(b).await.unwrap();
    }

    let all = repo.get_all().await.unwrap();
    let ids: Vec<Uuid> = all.iter().map(|b| b.id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
    for b in &created {
        assert!(all.contains(b));
        repo.delete(b.id).await.unwrap();
    }
}

#[tokio::test]
#[ignore = "requires PostgreSQL database (truncates the balances table)"]
async fn test_get_all_on_empty_table() {
    let db = create_test_db().await;
    sqlx::query(&format!("TRUNCATE {}", BALANCES_TABLE))
        .execute(db.pool())
        .await
        .unwrap();

    let repo = PgBalanceRepository::new(db.pool().clone());
    assert!(repo.get_all().await.unwrap().is_empty());
}

// ========================================================================
// Full pipeline
// ========================================================================

#[tokio::test]
#[ignore = "requires PostgreSQL database"]
async fn test_handler_lifecycle_against_postgres() {
    let db = create_test_db().await;
    let repo = Arc::new(PgBalanceRepository::new(db.pool().clone()));
    let service = Arc::new(BalanceService::new(repo));
    let handler = BalanceHandler::new(service, AmountPolicy::unbounded());

    let id = handler
        .create_balance(CreateBalanceRequest {
            id: None,
            amount: 1234.25,
        })
        .await
        .unwrap()
        .id;

    let got = handler
        .get_balance_by_id(GetBalanceByIdRequest { id: id.clone() })
        .await
        .unwrap();
    assert_eq!(got.balance.id, id);
    assert_eq!(got.balance.amount, 1234.25);

    handler
        .update_balance(UpdateBalanceRequest {
            id: id.clone(),
            amount: 4321.00,
        })
        .await
        .unwrap();
    let got = handler
        .get_balance_by_id(GetBalanceByIdRequest { id: id.clone() })
        .await
        .unwrap();
    assert_eq!(got.balance.amount, 4321.00);

    let all = handler
        .get_all_balances(GetAllBalancesRequest {})
        .await
        .unwrap();
    assert!(all.balances.iter().any(|b| b.id == id));

    handler
        .delete_balance(DeleteBalanceRequest { id: id.clone() })
        .await
        .unwrap();
    let err = handler
        .get_balance_by_id(GetBalanceByIdRequest { id })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
#[ignore = "requires PostgreSQL database"]
async fn test_concurrent_updates_last_commit_wins() {
    let db = create_test_db().await;
    let repo = Arc::new(PgBalanceRepository::new(db.pool().clone()));
    let id = Uuid::new_v4();
    repo.create(&Balance::new(id, 0.0)).await.unwrap();

    let tasks: Vec<_> = (1..=8)
        .map(|i| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.update(&Balance::new(id, i as f64)).await })
        })
        .collect();
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let amount = repo.get_by_id(id).await.unwrap().amount;
    assert!((1.0..=8.0).contains(&amount));
    repo.delete(id).await.unwrap();
}
