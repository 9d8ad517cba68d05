
/// Unique indexes and foreign-key actions enforced by the schema
pub mod constraint_tests;

/// Transaction handling
pub mod transaction_tests;

use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use migration::MigratorTrait;

use crate::{db, employee, influencer};

/// Fresh in-memory database with the schema applied.
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let db = db::connect_in_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub(crate) async fn insert_employee(db: &DatabaseConnection, first: &str, last: &str, email: &str) -> anyhow::Result<employee::Model> {
    let am = employee::ActiveModel {
        first_name: Set(first.to_string()),
        last_name: Set(last.to_string()),
        email: Set(email.to_string()),
        deleted_at: Set(None),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub(crate) async fn insert_influencer(db: &DatabaseConnection, first: &str, last: &str, manager_id: Option<uuid::Uuid>) -> anyhow::Result<influencer::Model> {
    let am = influencer::ActiveModel {
        first_name: Set(first.to_string()),
        last_name: Set(last.to_string()),
        manager_id: Set(manager_id),
        deleted_at: Set(None),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
