//! In-memory document store
//!
//! Keeps collections in insertion order. Used when no cloud project is
//! configured, for seeding a local site from a JSON file, and in tests.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

use super::{Document, DocumentStore, StoreError, StoreResult};

/// In-process document store
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
    reads: AtomicU64,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Load collections from a JSON seed file
    ///
    /// The file maps collection names to arrays of objects; each object needs
    /// a string `id`, every other key becomes a field:
    ///
    /// ```json
    /// { "employee": [ { "id": "e1", "name": "Ada", "bloodGroup": "O+" } ] }
    /// ```
    pub async fn from_seed_file(path: &Path) -> StoreResult<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        let seed: Value = serde_json::from_str(&content)?;
        Self::from_seed(seed)
    }

    /// Build a store from an already parsed seed value
    pub fn from_seed(seed: Value) -> StoreResult<Self> {
        let Value::Object(collections) = seed else {
            return Err(StoreError::Malformed(
                "seed must be an object of collections".to_string(),
            ));
        };

        let mut parsed = HashMap::with_capacity(collections.len());
        for (collection, entries) in collections {
            let Value::Array(entries) = entries else {
                return Err(StoreError::Malformed(format!(
                    "seed collection '{}' must be an array",
                    collection
                )));
            };

            let documents = entries
                .into_iter()
                .enumerate()
                .map(|(index, entry)| seed_document(&collection, index, entry))
                .collect::<StoreResult<Vec<_>>>()?;

            parsed.insert(collection, documents);
        }

        Ok(Self {
            collections: RwLock::new(parsed),
            reads: AtomicU64::new(0),
        })
    }

    /// Insert a document, replacing any document with the same id in place
    pub async fn insert(&self, collection: &str, document: Document) {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();

        match docs.iter_mut().find(|d| d.id == document.id) {
            Some(existing) => *existing = document,
            None => docs.push(document),
        }
    }

    /// Number of documents in a collection
    pub async fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map(Vec::len)
            .unwrap_or(0)
    }

    /// Number of read operations served so far
    pub fn read_count(&self) -> u64 {
        self.reads.load(Ordering::SeqCst)
    }
}

fn seed_document(collection: &str, index: usize, entry: Value) -> StoreResult<Document> {
    let Value::Object(mut fields) = entry else {
        return Err(StoreError::Malformed(format!(
            "seed entry {} of '{}' must be an object",
            index, collection
        )));
    };

    let id = match fields.remove("id") {
        Some(Value::String(id)) if !id.is_empty() => id,
        _ => {
            return Err(StoreError::Malformed(format!(
                "seed entry {} of '{}' has no string id",
                index, collection
            )))
        }
    };

    Ok(Document {
        id,
        fields,
        create_time: None,
        update_time: None,
    })
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn list_documents(&self, collection: &str) -> StoreResult<Vec<Document>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .cloned()
            .unwrap_or_default())
    }

    async fn get_document(&self, collection: &str, id: &str) -> StoreResult<Option<Document>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| d.id == id).cloned()))
    }

    async fn health_check(&self, _collection: &str) -> StoreResult<()> {
        Ok(())
    }
}
