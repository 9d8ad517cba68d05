#![cfg(test)]
use std::sync::Arc;

use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::connect_in_memory;

use crate::employee::{EmployeeService, SeaOrmEmployeeRepository};
use crate::influencer::{InfluencerService, SeaOrmInfluencerRepository};

/// Fresh in-memory database with migrations applied; one per test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = connect_in_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub type Services = (
    EmployeeService<SeaOrmEmployeeRepository>,
    InfluencerService<SeaOrmInfluencerRepository, SeaOrmEmployeeRepository>,
);

/// Both services wired to the same connection.
pub async fn services() -> Result<Services, anyhow::Error> {
    let db = get_db().await?;
    let employees = Arc::new(SeaOrmEmployeeRepository { db: db.clone() });
    let influencers = Arc::new(SeaOrmInfluencerRepository { db });
    Ok((
        EmployeeService::new(employees.clone()),
        InfluencerService::new(influencers, employees),
    ))
}
