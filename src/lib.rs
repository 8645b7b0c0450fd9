//! # Hum Studios
//!
//! Server for the Hum Studios website: a JSON API over the employee
//! directory kept in a cloud document store, plus the built site from
//! `humstudios-ui` (marketing pages and the employee admin).
//!
//! ## Modules
//!
//! - [`store`]: Document store abstraction with Firestore and in-memory backends
//! - [`employee`]: Employee records and the repository views read them through
//! - [`api`]: HTTP service with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use humstudios::employee::{EmployeeRepository, StoreEmployeeRepository};
//! use humstudios::store::{Document, MemoryStore};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = MemoryStore::new();
//!     store
//!         .insert("employee", Document::new("abc123").field("name", "Ada"))
//!         .await;
//!
//!     let repository = StoreEmployeeRepository::new(store);
//!     let employees = repository.list_all().await.unwrap();
//!
//!     println!("{} employee(s)", employees.len());
//! }
//! ```

pub mod api;
pub mod config;
pub mod employee;
pub mod store;

// Re-export top-level types for convenience
pub use api::{build_router, serve, ApiError, AppState};

pub use config::{Config, ConfigError, EmployeesConfig, LoggingConfig, ServerConfig, StoreBackend, StoreConfig};

pub use employee::{Employee, EmployeeRepository, FetchError, ProjectionMode, StoreEmployeeRepository};

pub use store::{Document, DocumentStore, FirestoreStore, MemoryStore, StoreError, StoreResult};
