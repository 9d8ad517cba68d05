use async_trait::async_trait;
use uuid::Uuid;

use super::domain::{InfluencerChanges, InfluencerView, ListFilter, NewInfluencer};
use crate::errors::ServiceError;

/// Persistence for influencers and the social accounts they own.
///
/// Reads return fully assembled views (accounts and manager attached).
/// `create` and `update` are atomic.
#[async_trait]
pub trait InfluencerRepository: Send + Sync {
    async fn list(&self, filter: &ListFilter) -> Result<Vec<InfluencerView>, ServiceError>;
    async fn get(&self, id: Uuid) -> Result<Option<InfluencerView>, ServiceError>;
    async fn exists(&self, id: Uuid) -> Result<bool, ServiceError>;
    async fn create(&self, new: NewInfluencer) -> Result<InfluencerView, ServiceError>;
    async fn update(&self, id: Uuid, changes: InfluencerChanges) -> Result<InfluencerView, ServiceError>;
    /// Delete with its accounts. Returns false when no such influencer exists.
    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError>;
}
