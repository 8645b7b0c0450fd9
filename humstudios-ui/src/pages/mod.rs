//! Pages
//!
//! Top-level page components for each route.

pub mod employee_details;
pub mod home;
pub mod view_employees;

pub use employee_details::EmployeeDetails;
pub use home::Home;
pub use view_employees::ViewEmployees;
