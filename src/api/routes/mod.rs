//! Routes
//!
//! Route handlers organized by functionality.

pub mod employees;
pub mod health;
