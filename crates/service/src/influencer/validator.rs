//! Influencer write validation.
//!
//! Name fields are checked together and reported as a batch. After that the
//! checks short-circuit: manager reference first, then each social account in
//! index order, stopping at the first failure.

use std::collections::HashSet;

use models::social_media_account::MAX_USERNAME_LEN;
use models::Platform;
use uuid::Uuid;

use super::domain::{InfluencerInput, Patch, SocialAccountInput, ValidatedAccount, ValidatedInfluencer};
use crate::employee::EmployeeRepository;
use crate::errors::{ServiceError, ValidationErrors};
use crate::validation::{collect_name, REQUIRED};

pub const ACCOUNTS: &str = "social_media_accounts";
pub const INVALID_MANAGER: &str = "Invalid manager ID";
pub const INSTAGRAM_AT: &str = "Instagram username must start with @";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Create,
    Update,
}

/// Validate one account in isolation.
///
/// `field` is the key errors are reported under (`social_media_accounts[i]`).
pub fn validate_social_account(field: &str, input: &SocialAccountInput) -> Result<ValidatedAccount, ServiceError> {
    let platform = input.platform.as_deref().map(str::trim).unwrap_or_default();
    if platform.is_empty() {
        return Err(ServiceError::validation(field, "Platform cannot be empty"));
    }
    let username = input.username.as_deref().map(str::trim).unwrap_or_default();
    if username.is_empty() {
        return Err(ServiceError::validation(field, "Username cannot be empty"));
    }
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(ServiceError::validation(
            field,
            format!("Username cannot exceed {MAX_USERNAME_LEN} characters"),
        ));
    }
    let platform = Platform::parse(platform)
        .ok_or_else(|| ServiceError::validation(field, format!("\"{platform}\" is not a valid choice.")))?;
    Ok(ValidatedAccount { platform, username: username.to_string() })
}

/// Validate the account collection in order; first failure wins.
pub fn validate_accounts(items: &[SocialAccountInput]) -> Result<Vec<ValidatedAccount>, ServiceError> {
    let mut seen: HashSet<(Platform, String)> = HashSet::with_capacity(items.len());
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let field = format!("{ACCOUNTS}[{i}]");
        let acc = validate_social_account(&field, item)?;
        if !seen.insert((acc.platform, acc.username.clone())) {
            return Err(ServiceError::uniqueness(field, format!("Duplicate {} in this platform", acc.username)));
        }
        if acc.platform == Platform::Instagram && !acc.username.starts_with('@') {
            return Err(ServiceError::validation(ACCOUNTS, INSTAGRAM_AT));
        }
        out.push(acc);
    }
    Ok(out)
}

/// Validate a whole influencer payload before anything is written.
///
/// On create both names and the account list (possibly empty) are
/// required. On update every field is optional.
pub async fn validate_influencer<E: EmployeeRepository + ?Sized>(
    employees: &E,
    input: InfluencerInput,
    mode: WriteMode,
) -> Result<ValidatedInfluencer, ServiceError> {
    let required = mode == WriteMode::Create;
    let mut errors = ValidationErrors::new();
    let first_name = collect_name(&mut errors, "first_name", "First name", input.first_name.as_deref(), required);
    let last_name = collect_name(&mut errors, "last_name", "Last name", input.last_name.as_deref(), required);
    if required && input.social_media_accounts.is_none() {
        errors.push(ACCOUNTS, REQUIRED);
    }
    if !errors.is_empty() {
        return Err(ServiceError::Validation(errors));
    }

    if let Patch::Value(id) = input.manager_id {
        ensure_manager(employees, id).await?;
    }

    let social_media_accounts = match input.social_media_accounts {
        Some(items) => Some(validate_accounts(&items)?),
        None => None,
    };

    Ok(ValidatedInfluencer { first_name, last_name, manager_id: input.manager_id, social_media_accounts })
}

async fn ensure_manager<E: EmployeeRepository + ?Sized>(employees: &E, id: Uuid) -> Result<(), ServiceError> {
    if employees.exists(id).await? {
        Ok(())
    } else {
        Err(ServiceError::reference("manager_id", INVALID_MANAGER))
    }
}
