use std::sync::Arc;

use tracing::{info, instrument};
use models::errors::ModelError;
use uuid::Uuid;

use super::domain::{EmployeeChanges, EmployeeInput, EmployeeView, NewEmployee};
use super::repository::EmployeeRepository;
use crate::errors::{ServiceError, ValidationErrors};
use crate::validation::{collect_name, REQUIRED};

/// Application service for employees.
pub struct EmployeeService<R: EmployeeRepository> {
    repo: Arc<R>,
}

impl<R: EmployeeRepository> Clone for EmployeeService<R> {
    fn clone(&self) -> Self { Self { repo: self.repo.clone() } }
}

impl<R: EmployeeRepository> EmployeeService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Employees in creation order.
    pub async fn list_employees(&self) -> Result<Vec<EmployeeView>, ServiceError> {
        let rows = self.repo.list().await?;
        Ok(rows.into_iter().map(EmployeeView::from).collect())
    }

    pub async fn get_employee(&self, id: Uuid) -> Result<EmployeeView, ServiceError> {
        self.repo
            .get(id)
            .await?
            .map(EmployeeView::from)
            .ok_or_else(|| ServiceError::not_found("employee"))
    }

    #[instrument(skip(self, input))]
    pub async fn create_employee(&self, input: EmployeeInput) -> Result<EmployeeView, ServiceError> {
        let mut errors = ValidationErrors::new();
        let first_name = collect_name(&mut errors, "first_name", "First name", input.first_name.as_deref(), true);
        let last_name = collect_name(&mut errors, "last_name", "Last name", input.last_name.as_deref(), true);
        let email = collect_email(&mut errors, input.email.as_deref(), true);

        let (Some(first_name), Some(last_name), Some(email)) = (first_name, last_name, email) else {
            return Err(ServiceError::Validation(errors));
        };
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(ServiceError::uniqueness("email", "employee with this email already exists."));
        }

        let created = self.repo.create(NewEmployee { first_name, last_name, email }).await?;
        info!(employee_id = %created.id, "employee_created");
        Ok(created.into())
    }

    /// Partial update: absent fields keep their stored value.
    #[instrument(skip(self, input), fields(employee_id = %id))]
    pub async fn update_employee(&self, id: Uuid, input: EmployeeInput) -> Result<EmployeeView, ServiceError> {
        if !self.repo.exists(id).await? {
            return Err(ServiceError::not_found("employee"));
        }

        let mut errors = ValidationErrors::new();
        let first_name = collect_name(&mut errors, "first_name", "First name", input.first_name.as_deref(), false);
        let last_name = collect_name(&mut errors, "last_name", "Last name", input.last_name.as_deref(), false);
        let email = collect_email(&mut errors, input.email.as_deref(), false);
        if !errors.is_empty() {
            return Err(ServiceError::Validation(errors));
        }

        if let Some(email) = email.as_deref() {
            if let Some(other) = self.repo.find_by_email(email).await? {
                if other.id != id {
                    return Err(ServiceError::uniqueness("email", "employee with this email already exists."));
                }
            }
        }

        let updated = self.repo.update(id, EmployeeChanges { first_name, last_name, email }).await?;
        info!(employee_id = %updated.id, "employee_updated");
        Ok(updated.into())
    }

    /// Delete an employee; influencers it managed keep existing without a manager.
    #[instrument(skip(self), fields(employee_id = %id))]
    pub async fn delete_employee(&self, id: Uuid) -> Result<(), ServiceError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(ServiceError::not_found("employee"))
        }
    }
}

fn collect_email(errors: &mut ValidationErrors, value: Option<&str>, required: bool) -> Option<String> {
    match value.map(str::trim) {
        Some("") => {
            errors.push("email", "This field may not be blank.");
            None
        }
        Some(v) => match models::employee::validate_email(v) {
            Ok(()) => Some(v.to_string()),
            Err(ModelError::Validation(msg)) => {
                errors.push("email", msg);
                None
            }
        },
        None => {
            if required {
                errors.push("email", REQUIRED);
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::repository::mock::MockEmployeeRepository;
    use crate::influencer::domain::{InfluencerInput, Patch};
    use crate::test_support::services;

    fn input(first: &str, last: &str, email: &str) -> EmployeeInput {
        EmployeeInput {
            first_name: Some(first.into()),
            last_name: Some(last.into()),
            email: Some(email.into()),
        }
    }

    #[tokio::test]
    async fn create_validates_all_fields_together() {
        let svc = EmployeeService::new(Arc::new(MockEmployeeRepository::default()));
        let err = svc.create_employee(input(" ", "L", "not-an-email")).await.unwrap_err();
        let ServiceError::Validation(errs) = err else { panic!("expected validation error") };
        assert_eq!(errs.messages_for("first_name"), vec!["First name cannot be empty"]);
        assert_eq!(errs.messages_for("last_name"), vec!["Last name must be at least 2 characters long"]);
        assert_eq!(errs.messages_for("email"), vec!["Enter a valid email address."]);
    }

    #[tokio::test]
    async fn create_requires_every_field() {
        let svc = EmployeeService::new(Arc::new(MockEmployeeRepository::default()));
        let err = svc.create_employee(EmployeeInput::default()).await.unwrap_err();
        assert_eq!(err.field_errors().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn employee_crud_service() -> Result<(), anyhow::Error> {
        let (employees, _) = services().await?;

        let e = employees.create_employee(input(" Maria ", "Silva", "maria@example.com")).await?;
        assert_eq!(e.first_name, "Maria");

        let found = employees.get_employee(e.id).await?;
        assert_eq!(found, e);

        let updated = employees
            .update_employee(e.id, EmployeeInput { last_name: Some("Souza".into()), ..Default::default() })
            .await?;
        assert_eq!(updated.first_name, "Maria");
        assert_eq!(updated.last_name, "Souza");
        assert_eq!(updated.email, "maria@example.com");

        let second = employees.create_employee(input("Joao", "Lima", "joao@example.com")).await?;
        let listed: Vec<_> = employees.list_employees().await?.into_iter().map(|v| v.id).collect();
        assert_eq!(listed, vec![e.id, second.id]);

        employees.delete_employee(e.id).await?;
        assert!(matches!(employees.get_employee(e.id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(employees.delete_employee(e.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_email_is_a_uniqueness_error() -> Result<(), anyhow::Error> {
        let (employees, _) = services().await?;

        let a = employees.create_employee(input("Maria", "Silva", "shared@example.com")).await?;
        let err = employees.create_employee(input("Mario", "Silva", "shared@example.com")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Uniqueness(_)));

        let b = employees.create_employee(input("Joao", "Lima", "joao@example.com")).await?;
        let err = employees
            .update_employee(b.id, EmployeeInput { email: Some("shared@example.com".into()), ..Default::default() })
            .await
            .unwrap_err();
        assert_eq!(
            err.field_errors().unwrap().messages_for("email"),
            vec!["employee with this email already exists."]
        );

        // re-submitting one's own email is not a conflict
        employees
            .update_employee(a.id, EmployeeInput { email: Some("shared@example.com".into()), ..Default::default() })
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn update_unknown_employee_is_not_found() -> Result<(), anyhow::Error> {
        let (employees, _) = services().await?;
        let err = employees.update_employee(Uuid::new_v4(), EmployeeInput::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        Ok(())
    }

    #[tokio::test]
    async fn deleting_manager_keeps_influencer_and_clears_link() -> Result<(), anyhow::Error> {
        let (employees, influencers) = services().await?;

        let boss = employees.create_employee(input("Boss", "Person", "boss@example.com")).await?;
        let x = influencers
            .validate_and_create(InfluencerInput {
                first_name: Some("Ana".into()),
                last_name: Some("Lee".into()),
                manager_id: Patch::Value(boss.id),
                social_media_accounts: Some(vec![]),
            })
            .await?;
        assert_eq!(x.manager.as_ref().map(|m| m.id), Some(boss.id));

        employees.delete_employee(boss.id).await?;

        let after = influencers.get_influencer(x.id).await?;
        assert!(after.manager.is_none());
        assert_eq!(after.first_name, "Ana");
        Ok(())
    }
}
