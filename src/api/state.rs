//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::employee::{EmployeeRepository, StoreEmployeeRepository};
use crate::store::DocumentStore;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Document store, probed by the readiness check
    pub store: Arc<dyn DocumentStore>,
    /// Employee reads for the JSON API
    pub employees: Arc<dyn EmployeeRepository>,
    /// Loaded configuration
    pub config: Arc<Config>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state reading employees from `store` as configured
    pub fn new(store: Arc<dyn DocumentStore>, config: Config) -> Self {
        let repository =
            StoreEmployeeRepository::new(Arc::clone(&store)).with_mode(config.employees.projection);

        Self::with_repository(store, Arc::new(repository), config)
    }

    /// Create state with an explicit repository
    pub fn with_repository(
        store: Arc<dyn DocumentStore>,
        employees: Arc<dyn EmployeeRepository>,
        config: Config,
    ) -> Self {
        Self {
            store,
            employees,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
