//! Document Store
//!
//! Read access to the external document database the site is backed by.
//!
//! ## Architecture
//!
//! - **DocumentStore**: capability trait the rest of the crate depends on
//! - **FirestoreStore**: Firestore REST adapter used in production
//! - **MemoryStore**: in-process store for development, seeds and tests
//!
//! Nothing here validates document contents. A document is an opaque id
//! plus an untyped field mapping; shaping it into a record is the caller's job.

mod error;
mod firestore;
mod memory;
mod value;

pub use error::{StoreError, StoreResult};
pub use firestore::{FirestoreConfig, FirestoreStore};
pub use memory::MemoryStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::config::{StoreBackend, StoreConfig};

/// A single record of a collection
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Identifier assigned by the store
    pub id: String,
    /// Field name to untyped value
    pub fields: Map<String, Value>,
    /// When the document was created, if the store reports it
    pub create_time: Option<DateTime<Utc>>,
    /// When the document was last written, if the store reports it
    pub update_time: Option<DateTime<Utc>>,
}

impl Document {
    /// Create an empty document with the given id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
            create_time: None,
            update_time: None,
        }
    }

    /// Builder: set a field
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Look up a field value
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// Read-only access to a document database
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Short backend name for logs and health output
    fn backend(&self) -> &'static str;

    /// Read every document of a collection, in the store's iteration order
    async fn list_documents(&self, collection: &str) -> StoreResult<Vec<Document>>;

    /// Read a single document; `None` if it does not exist
    async fn get_document(&self, collection: &str, id: &str) -> StoreResult<Option<Document>>;

    /// Check the store answers reads on `collection`
    async fn health_check(&self, collection: &str) -> StoreResult<()>;
}

#[async_trait]
impl<T: DocumentStore + ?Sized> DocumentStore for Arc<T> {
    fn backend(&self) -> &'static str {
        (**self).backend()
    }

    async fn list_documents(&self, collection: &str) -> StoreResult<Vec<Document>> {
        (**self).list_documents(collection).await
    }

    async fn get_document(&self, collection: &str, id: &str) -> StoreResult<Option<Document>> {
        (**self).get_document(collection, id).await
    }

    async fn health_check(&self, collection: &str) -> StoreResult<()> {
        (**self).health_check(collection).await
    }
}

/// Build the store selected by the configuration
pub async fn connect(config: &StoreConfig) -> StoreResult<Arc<dyn DocumentStore>> {
    match config.backend {
        StoreBackend::Firestore => {
            let firestore = FirestoreStore::new(config.firestore_config())?;
            tracing::info!(
                project_id = %config.project_id,
                database = %config.database,
                "Using Firestore document store"
            );
            Ok(Arc::new(firestore))
        }
        StoreBackend::Memory => {
            let memory = match &config.seed_file {
                Some(path) => {
                    let store = MemoryStore::from_seed_file(path).await?;
                    tracing::info!("Seeded in-memory store from {:?}", path);
                    store
                }
                None => {
                    tracing::warn!("Using empty in-memory store (no seed file configured)");
                    MemoryStore::new()
                }
            };
            Ok(Arc::new(memory))
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Store doubles shared by tests across modules.

    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// A store whose every read fails with `Unavailable`
    #[derive(Default)]
    pub struct FailingStore {
        pub reads: AtomicUsize,
    }

    impl FailingStore {
        pub fn read_count(&self) -> usize {
            self.reads.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DocumentStore for FailingStore {
        fn backend(&self) -> &'static str {
            "failing"
        }

        async fn list_documents(&self, _collection: &str) -> StoreResult<Vec<Document>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            Err(StoreError::Unavailable)
        }

        async fn get_document(&self, _collection: &str, _id: &str) -> StoreResult<Option<Document>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            Err(StoreError::Unavailable)
        }

        async fn health_check(&self, _collection: &str) -> StoreResult<()> {
            Err(StoreError::Unavailable)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_builder() {
        let doc = Document::new("abc")
            .field("name", "Ada")
            .field("phone", json!(5551234));

        assert_eq!(doc.id, "abc");
        assert_eq!(doc.get("name"), Some(&json!("Ada")));
        assert_eq!(doc.get("phone"), Some(&json!(5551234)));
        assert!(doc.get("email").is_none());
    }

    #[tokio::test]
    async fn test_connect_memory_without_seed() {
        let config = StoreConfig {
            backend: StoreBackend::Memory,
            ..Default::default()
        };

        let store = connect(&config).await.unwrap();
        assert_eq!(store.backend(), "memory");
        assert!(store.list_documents("employee").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_connect_firestore_requires_project() {
        let config = StoreConfig {
            backend: StoreBackend::Firestore,
            project_id: String::new(),
            ..Default::default()
        };

        let result = connect(&config).await;
        assert!(matches!(result, Err(StoreError::Config(_))));
    }
}
