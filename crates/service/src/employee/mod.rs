//! Employee CRUD: name and email rules, and the delete that detaches the
//! influencers an employee managed.

pub mod domain;
pub mod repository;
pub mod service;

pub use repository::{EmployeeRepository, SeaOrmEmployeeRepository};
pub use service::EmployeeService;
