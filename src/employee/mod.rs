//! Employees
//!
//! The `employee` collection seen through a fixed-shape record.
//!
//! - [`Employee`]: read-only projection of one document
//! - [`EmployeeRepository`]: the narrow capability views depend on
//! - [`StoreEmployeeRepository`]: adapter over any [`DocumentStore`](crate::store::DocumentStore)

mod error;
mod model;
mod repository;

pub use error::FetchError;
pub use model::{Employee, ProjectionMode, EMPLOYEE_COLLECTION};
pub use repository::{EmployeeRepository, StoreEmployeeRepository};
