//! Employee repository
//!
//! Views read employees through [`EmployeeRepository`] and never see the
//! store behind it.

use async_trait::async_trait;

use super::{Employee, FetchError, ProjectionMode, EMPLOYEE_COLLECTION};
use crate::store::DocumentStore;

/// Read access to employee records
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Every employee, in the store's iteration order
    async fn list_all(&self) -> Result<Vec<Employee>, FetchError>;

    /// A single employee by id
    async fn find(&self, id: &str) -> Result<Option<Employee>, FetchError>;
}

/// [`EmployeeRepository`] over the `employee` collection of a document store
pub struct StoreEmployeeRepository<S> {
    store: S,
    mode: ProjectionMode,
}

impl<S: DocumentStore> StoreEmployeeRepository<S> {
    /// Read the `employee` collection with best-effort projection
    pub fn new(store: S) -> Self {
        Self {
            store,
            mode: ProjectionMode::default(),
        }
    }

    /// Builder: set the projection mode
    pub fn with_mode(mut self, mode: ProjectionMode) -> Self {
        self.mode = mode;
        self
    }
}

#[async_trait]
impl<S: DocumentStore> EmployeeRepository for StoreEmployeeRepository<S> {
    async fn list_all(&self) -> Result<Vec<Employee>, FetchError> {
        let documents = self
            .store
            .list_documents(EMPLOYEE_COLLECTION)
            .await
            .map_err(|e| FetchError::store(EMPLOYEE_COLLECTION, e))?;

        documents
            .iter()
            .map(|doc| Employee::project(doc, self.mode))
            .collect()
    }

    async fn find(&self, id: &str) -> Result<Option<Employee>, FetchError> {
        let document = self
            .store
            .get_document(EMPLOYEE_COLLECTION, id)
            .await
            .map_err(|e| FetchError::store(EMPLOYEE_COLLECTION, e))?;

        document
            .map(|doc| Employee::project(&doc, self.mode))
            .transpose()
    }
}
