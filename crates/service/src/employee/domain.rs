use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Create/update payload. Every field is optional so one type serves both
/// full creates (all required) and partial updates (absent = keep).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeInput {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Validated insert.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Validated partial update.
#[derive(Debug, Clone, Default)]
pub struct EmployeeChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

/// Serialized employee: `{id, first_name, last_name, email}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeView {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<models::employee::Model> for EmployeeView {
    fn from(m: models::employee::Model) -> Self {
        Self { id: m.id, first_name: m.first_name, last_name: m.last_name, email: m.email }
    }
}
