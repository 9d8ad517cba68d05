use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use super::domain::{InfluencerChanges, InfluencerInput, InfluencerView, ListFilter, NewInfluencer};
use super::repository::InfluencerRepository;
use super::validator::{validate_influencer, WriteMode};
use crate::employee::EmployeeRepository;
use crate::errors::ServiceError;
use crate::validation::REQUIRED;

/// Influencer business service independent of web framework
pub struct InfluencerService<R: InfluencerRepository, E: EmployeeRepository> {
    repo: Arc<R>,
    employees: Arc<E>,
}

impl<R: InfluencerRepository, E: EmployeeRepository> Clone for InfluencerService<R, E> {
    fn clone(&self) -> Self { Self { repo: self.repo.clone(), employees: self.employees.clone() } }
}

impl<R: InfluencerRepository, E: EmployeeRepository> InfluencerService<R, E> {
    pub fn new(repo: Arc<R>, employees: Arc<E>) -> Self { Self { repo, employees } }

    /// Validate and persist a new influencer with its manager and accounts.
    #[instrument(skip(self, input))]
    pub async fn validate_and_create(&self, input: InfluencerInput) -> Result<InfluencerView, ServiceError> {
        let v = validate_influencer(self.employees.as_ref(), input, WriteMode::Create).await?;
        let (Some(first_name), Some(last_name)) = (v.first_name, v.last_name) else {
            return Err(ServiceError::validation("first_name", REQUIRED));
        };
        let created = self
            .repo
            .create(NewInfluencer {
                first_name,
                last_name,
                manager_id: v.manager_id.into_option(),
                accounts: v.social_media_accounts.unwrap_or_default(),
            })
            .await?;
        Ok(created)
    }

    /// Validate and apply an update.
    ///
    /// Names are kept when absent, the manager is cleared when absent or
    /// null, and a non-empty account list replaces every stored account.
    #[instrument(skip(self, input), fields(influencer_id = %id))]
    pub async fn validate_and_update(&self, id: Uuid, input: InfluencerInput) -> Result<InfluencerView, ServiceError> {
        if !self.repo.exists(id).await? {
            return Err(ServiceError::not_found("influencer"));
        }
        let v = validate_influencer(self.employees.as_ref(), input, WriteMode::Update).await?;
        self.repo.update(id, InfluencerChanges::from(v)).await
    }

    /// Influencers in creation order, optionally narrowed by manager and search text.
    pub async fn list_influencers(&self, filter: ListFilter) -> Result<Vec<InfluencerView>, ServiceError> {
        self.repo.list(&filter).await
    }

    pub async fn get_influencer(&self, id: Uuid) -> Result<InfluencerView, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("influencer"))
    }

    #[instrument(skip(self), fields(influencer_id = %id))]
    pub async fn delete_influencer(&self, id: Uuid) -> Result<(), ServiceError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            info!("influencer_missing");
            Err(ServiceError::not_found("influencer"))
        }
    }
}
