//! Service layer providing the business rules on top of `models`.
//! - Validation of employee and influencer writes, with field-keyed errors.
//! - Repository traits per aggregate with SeaORM implementations.
//! - Transactional influencer create/update/delete.

pub mod errors;
pub mod validation;
pub mod employee;
pub mod influencer;
#[cfg(test)]
pub mod test_support;
