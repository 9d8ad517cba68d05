use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, TransactionTrait};
use tracing::info;
use uuid::Uuid;

use models::{employee, influencer};

use super::domain::{EmployeeChanges, NewEmployee};
use crate::errors::ServiceError;

const EMAIL_TAKEN: (&str, &str) = ("email", "employee with this email already exists.");
const NO_FK: (&str, &str) = ("non_field_errors", "Referenced row does not exist.");

/// Persistence for employees.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<employee::Model>, ServiceError>;
    async fn get(&self, id: Uuid) -> Result<Option<employee::Model>, ServiceError>;
    async fn exists(&self, id: Uuid) -> Result<bool, ServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<employee::Model>, ServiceError>;
    async fn create(&self, new: NewEmployee) -> Result<employee::Model, ServiceError>;
    async fn update(&self, id: Uuid, changes: EmployeeChanges) -> Result<employee::Model, ServiceError>;
    /// Delete and clear the manager link of every influencer pointing at it.
    /// Returns false when no such employee exists.
    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmEmployeeRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn list(&self) -> Result<Vec<employee::Model>, ServiceError> {
        Ok(employee::list(&self.db).await?)
    }

    async fn get(&self, id: Uuid) -> Result<Option<employee::Model>, ServiceError> {
        Ok(employee::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn exists(&self, id: Uuid) -> Result<bool, ServiceError> {
        Ok(self.get(id).await?.is_some())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<employee::Model>, ServiceError> {
        Ok(employee::find_by_email(&self.db, email).await?)
    }

    async fn create(&self, new: NewEmployee) -> Result<employee::Model, ServiceError> {
        let am = employee::ActiveModel {
            first_name: Set(new.first_name),
            last_name: Set(new.last_name),
            email: Set(new.email),
            deleted_at: Set(None),
            ..Default::default()
        };
        am.insert(&self.db).await.map_err(|e| ServiceError::from_write(e, EMAIL_TAKEN, NO_FK))
    }

    async fn update(&self, id: Uuid, changes: EmployeeChanges) -> Result<employee::Model, ServiceError> {
        let mut am: employee::ActiveModel = employee::Entity::find_by_id(id)
            .one(&self.db).await?
            .ok_or_else(|| ServiceError::not_found("employee"))?
            .into();
        if let Some(v) = changes.first_name { am.first_name = Set(v); }
        if let Some(v) = changes.last_name { am.last_name = Set(v); }
        if let Some(v) = changes.email { am.email = Set(v); }
        am.update(&self.db).await.map_err(|e| ServiceError::from_write(e, EMAIL_TAKEN, NO_FK))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let txn = self.db.begin().await?;
        let detached = influencer::clear_manager(&txn, id).await?;
        let res = employee::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;
        if res.rows_affected > 0 {
            info!(employee_id = %id, detached, "employee_deleted");
        }
        Ok(res.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn new_employee(email: &str) -> NewEmployee {
        NewEmployee { first_name: "Maria".into(), last_name: "Silva".into(), email: email.into() }
    }

    // The service checks emails up front; these writes skip that check and
    // rely on the unique index alone.
    #[tokio::test]
    async fn duplicate_email_insert_maps_to_uniqueness() -> anyhow::Result<()> {
        let repo = SeaOrmEmployeeRepository { db: get_db().await? };
        repo.create(new_employee("maria@example.com")).await?;

        let err = repo.create(new_employee("maria@example.com")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Uniqueness(_)), "got {err:?}");
        assert_eq!(err.field_errors().unwrap().messages_for(EMAIL_TAKEN.0), vec![EMAIL_TAKEN.1]);
        assert_eq!(repo.list().await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_email_update_maps_to_uniqueness() -> anyhow::Result<()> {
        let repo = SeaOrmEmployeeRepository { db: get_db().await? };
        repo.create(new_employee("maria@example.com")).await?;
        let other = repo.create(new_employee("joao@example.com")).await?;

        let changes = EmployeeChanges { email: Some("maria@example.com".into()), ..Default::default() };
        let err = repo.update(other.id, changes).await.unwrap_err();
        assert!(matches!(err, ServiceError::Uniqueness(_)), "got {err:?}");
        assert_eq!(err.field_errors().unwrap().messages_for("email"), vec![EMAIL_TAKEN.1]);

        let kept = repo.get(other.id).await?.unwrap();
        assert_eq!(kept.email, "joao@example.com");
        Ok(())
    }
}

/// Simple in-memory mock repository for tests
#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use chrono::Utc;

    #[derive(Default)]
    pub struct MockEmployeeRepository {
        rows: Mutex<HashMap<Uuid, employee::Model>>,
    }

    impl MockEmployeeRepository {
        pub fn with(ids: &[Uuid]) -> Self {
            let repo = Self::default();
            {
                let mut rows = repo.rows.lock().unwrap();
                for (i, id) in ids.iter().enumerate() {
                    let now = Utc::now().into();
                    rows.insert(*id, employee::Model {
                        id: *id,
                        first_name: format!("Manager{i}"),
                        last_name: "Mock".into(),
                        email: format!("manager{i}@example.com"),
                        created_at: now,
                        updated_at: now,
                        deleted_at: None,
                    });
                }
            }
            repo
        }
    }

    #[async_trait]
    impl EmployeeRepository for MockEmployeeRepository {
        async fn list(&self) -> Result<Vec<employee::Model>, ServiceError> {
            let mut all: Vec<_> = self.rows.lock().unwrap().values().cloned().collect();
            all.sort_by_key(|m| (m.created_at, m.id));
            Ok(all)
        }

        async fn get(&self, id: Uuid) -> Result<Option<employee::Model>, ServiceError> {
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        async fn exists(&self, id: Uuid) -> Result<bool, ServiceError> {
            Ok(self.rows.lock().unwrap().contains_key(&id))
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<employee::Model>, ServiceError> {
            Ok(self.rows.lock().unwrap().values().find(|m| m.email == email).cloned())
        }

        async fn create(&self, new: NewEmployee) -> Result<employee::Model, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            if rows.values().any(|m| m.email == new.email) {
                return Err(ServiceError::uniqueness(EMAIL_TAKEN.0, EMAIL_TAKEN.1));
            }
            let now = Utc::now().into();
            let m = employee::Model {
                id: Uuid::new_v4(),
                first_name: new.first_name,
                last_name: new.last_name,
                email: new.email,
                created_at: now,
                updated_at: now,
                deleted_at: None,
            };
            rows.insert(m.id, m.clone());
            Ok(m)
        }

        async fn update(&self, id: Uuid, changes: EmployeeChanges) -> Result<employee::Model, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let m = rows.get_mut(&id).ok_or_else(|| ServiceError::not_found("employee"))?;
            if let Some(v) = changes.first_name { m.first_name = v; }
            if let Some(v) = changes.last_name { m.last_name = v; }
            if let Some(v) = changes.email { m.email = v; }
            m.updated_at = Utc::now().into();
            Ok(m.clone())
        }

        async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
            Ok(self.rows.lock().unwrap().remove(&id).is_some())
        }
    }
}
