//! Field rules shared by employee and influencer writes.

use models::influencer::MAX_NAME_LEN;

use crate::errors::ValidationErrors;

pub const MIN_NAME_LEN: usize = 2;
pub const REQUIRED: &str = "This field is required.";

/// Check a person-name field and return its trimmed value.
///
/// `label` is the human name used in messages ("First name").
pub fn check_name(label: &str, value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("{label} cannot be empty"));
    }
    let len = trimmed.chars().count();
    if len < MIN_NAME_LEN {
        return Err(format!("{label} must be at least {MIN_NAME_LEN} characters long"));
    }
    if len > MAX_NAME_LEN {
        return Err(format!("{label} cannot exceed {MAX_NAME_LEN} characters"));
    }
    Ok(trimmed.to_string())
}

/// Validate an optional name into `errors`.
///
/// Returns the trimmed value when present and valid. A missing value is an
/// error only when `required`.
pub fn collect_name(
    errors: &mut ValidationErrors,
    field: &str,
    label: &str,
    value: Option<&str>,
    required: bool,
) -> Option<String> {
    match value {
        Some(v) => match check_name(label, v) {
            Ok(trimmed) => Some(trimmed),
            Err(msg) => {
                errors.push(field, msg);
                None
            }
        },
        None => {
            if required {
                errors.push(field, REQUIRED);
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_and_short_names() {
        assert_eq!(check_name("First name", "   ").unwrap_err(), "First name cannot be empty");
        assert_eq!(check_name("First name", "").unwrap_err(), "First name cannot be empty");
        assert_eq!(
            check_name("Last name", " a ").unwrap_err(),
            "Last name must be at least 2 characters long"
        );
    }

    #[test]
    fn rejects_overlong_names() {
        let long = "x".repeat(51);
        assert_eq!(check_name("First name", &long).unwrap_err(), "First name cannot exceed 50 characters");
        assert!(check_name("First name", &"x".repeat(50)).is_ok());
    }

    #[test]
    fn trims_accepted_names() {
        assert_eq!(check_name("First name", "  Ana ").unwrap(), "Ana");
        assert_eq!(check_name("First name", "Jo").unwrap(), "Jo");
    }

    #[test]
    fn collect_name_batches_and_respects_required() {
        let mut errs = ValidationErrors::new();
        assert_eq!(collect_name(&mut errs, "first_name", "First name", None, false), None);
        assert!(errs.is_empty());
        collect_name(&mut errs, "first_name", "First name", None, true);
        collect_name(&mut errs, "last_name", "Last name", Some("x"), true);
        assert_eq!(errs.len(), 2);
        assert_eq!(errs.messages_for("first_name"), vec![REQUIRED]);
    }
}
