use models::Platform;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::employee::domain::EmployeeView;

/// A field that distinguishes "not sent" from "sent as null".
///
/// Use with `#[serde(default)]`: a missing key stays `Absent`, `null`
/// becomes `Null`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Patch<T> {
    #[default]
    Absent,
    Null,
    Value(T),
}

impl<T> Patch<T> {
    pub fn is_absent(&self) -> bool { matches!(self, Patch::Absent) }

    pub fn value(&self) -> Option<&T> {
        match self {
            Patch::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Collapse `Absent` and `Null` into `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Patch::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<T>::deserialize(deserializer)?.map_or(Patch::Null, Patch::Value))
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

/// Raw social account item as received.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialAccountInput {
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl SocialAccountInput {
    pub fn new(platform: &str, username: &str) -> Self {
        Self { platform: Some(platform.to_string()), username: Some(username.to_string()) }
    }
}

/// Create/update payload for an influencer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InfluencerInput {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub manager_id: Patch<Uuid>,
    #[serde(default)]
    pub social_media_accounts: Option<Vec<SocialAccountInput>>,
}

/// Social account that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedAccount {
    pub platform: Platform,
    pub username: String,
}

/// Validated payload, still carrying what the client sent for each field.
#[derive(Debug, Clone, Default)]
pub struct ValidatedInfluencer {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub manager_id: Patch<Uuid>,
    pub social_media_accounts: Option<Vec<ValidatedAccount>>,
}

/// Insert instruction for the orchestrator.
#[derive(Debug, Clone)]
pub struct NewInfluencer {
    pub first_name: String,
    pub last_name: String,
    pub manager_id: Option<Uuid>,
    pub accounts: Vec<ValidatedAccount>,
}

/// Update instruction for the orchestrator.
///
/// Unlike the other fields, `manager_id` has no "keep" state: it is always
/// written.
#[derive(Debug, Clone)]
pub struct InfluencerChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub manager_id: Option<Uuid>,
    /// `None` leaves the stored accounts untouched; `Some` replaces them all.
    pub replace_accounts: Option<Vec<ValidatedAccount>>,
}

impl From<ValidatedInfluencer> for InfluencerChanges {
    /// Update policy per field:
    /// - names: absent keeps the stored value
    /// - `manager_id`: absent or null clears the manager
    /// - accounts: absent or empty keeps the stored set, non-empty replaces it
    fn from(v: ValidatedInfluencer) -> Self {
        Self {
            first_name: v.first_name,
            last_name: v.last_name,
            manager_id: v.manager_id.into_option(),
            replace_accounts: v.social_media_accounts.filter(|accs| !accs.is_empty()),
        }
    }
}

/// Read filter for listing.
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    pub manager_id: Option<Uuid>,
    pub search: Option<String>,
}

impl ListFilter {
    /// Search terms: the text split on whitespace and commas.
    pub fn search_terms(&self) -> Vec<String> {
        self.search
            .as_deref()
            .map(|s| s.replace('\0', "").replace(',', " ").split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialAccountView {
    pub id: Uuid,
    pub platform: Platform,
    pub username: String,
}

impl From<models::social_media_account::Model> for SocialAccountView {
    fn from(m: models::social_media_account::Model) -> Self {
        Self { id: m.id, platform: m.platform, username: m.username }
    }
}

/// Serialized influencer; `manager_id` is write-only and not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfluencerView {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub social_media_accounts: Vec<SocialAccountView>,
    pub manager: Option<EmployeeView>,
}
