//! Firestore REST Adapter
//!
//! Reads collections through the Firestore v1 REST API
//! (`projects/{project}/databases/{database}/documents/{collection}`).

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use std::collections::HashSet;

use super::value::{ListDocumentsResponse, RawDocument};
use super::{Document, DocumentStore, StoreError, StoreResult};

/// Firestore REST client
pub struct FirestoreStore {
    client: Client,
    config: FirestoreConfig,
}

/// Configuration for the Firestore adapter
#[derive(Debug, Clone)]
pub struct FirestoreConfig {
    /// API root (e.g., "https://firestore.googleapis.com")
    pub base_url: String,
    /// Google Cloud project id
    pub project_id: String,
    /// Database id, "(default)" unless a named database is used
    pub database: String,
    /// Web API key, sent as `key=` query parameter
    pub api_key: Option<String>,
    /// OAuth2 access token, sent as bearer auth
    pub bearer_token: Option<String>,
    /// Documents per page when listing a collection
    pub page_size: u32,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for FirestoreConfig {
    fn default() -> Self {
        Self {
            base_url: "https://firestore.googleapis.com".to_string(),
            project_id: String::new(),
            database: "(default)".to_string(),
            api_key: None,
            bearer_token: None,
            page_size: 300,
            request_timeout_ms: 10_000,
        }
    }
}

impl FirestoreStore {
    /// Create a new Firestore client with the given configuration
    pub fn new(config: FirestoreConfig) -> StoreResult<Self> {
        if config.project_id.trim().is_empty() {
            return Err(StoreError::Config(
                "Firestore project_id is not set".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .user_agent(concat!("humstudios/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, config })
    }

    /// `.../documents/{collection}`
    fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/v1/projects/{}/databases/{}/documents/{}",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(&self.config.project_id),
            urlencoding::encode(&self.config.database),
            urlencoding::encode(collection)
        )
    }

    /// `.../documents/{collection}/{id}`
    fn document_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}", self.collection_url(collection), urlencoding::encode(id))
    }

    /// Attach credentials to a request
    fn authorized(&self, mut request: RequestBuilder) -> RequestBuilder {
        if let Some(key) = &self.config.api_key {
            request = request.query(&[("key", key.as_str())]);
        }
        if let Some(token) = &self.config.bearer_token {
            request = request.bearer_auth(token);
        }
        request
    }

    /// Fetch one page of a collection listing
    async fn fetch_page(
        &self,
        collection: &str,
        page_size: u32,
        page_token: Option<&str>,
    ) -> StoreResult<ListDocumentsResponse> {
        let mut request = self
            .client
            .get(self.collection_url(collection))
            .query(&[("pageSize", page_size.to_string())]);

        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token)]);
        }

        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(StoreError::from_send)?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let page: ListDocumentsResponse = response
            .json()
            .await
            .map_err(|e| StoreError::Malformed(e.to_string()))?;

        Ok(page)
    }
}

#[async_trait]
impl DocumentStore for FirestoreStore {
    fn backend(&self) -> &'static str {
        "firestore"
    }

    async fn list_documents(&self, collection: &str) -> StoreResult<Vec<Document>> {
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;
        let mut seen_tokens = HashSet::new();
        let mut pages = 0usize;

        loop {
            let page = self
                .fetch_page(collection, self.config.page_size, page_token.as_deref())
                .await?;
            pages += 1;

            for raw in page.documents {
                match raw.into_document() {
                    Ok(document) => documents.push(document),
                    Err(e) => {
                        tracing::warn!(collection = %collection, error = %e, "Skipping unreadable document");
                    }
                }
            }

            match page.next_page_token {
                Some(next) if !next.is_empty() => {
                    if !seen_tokens.insert(next.clone()) {
                        return Err(StoreError::Malformed(format!(
                            "page token '{}' repeated while listing '{}'",
                            next, collection
                        )));
                    }
                    page_token = Some(next);
                }
                _ => break,
            }
        }

        tracing::debug!(
            collection = %collection,
            documents = documents.len(),
            pages,
            "Listed Firestore collection"
        );

        Ok(documents)
    }

    async fn get_document(&self, collection: &str, id: &str) -> StoreResult<Option<Document>> {
        let request = self.client.get(self.document_url(collection, id));

        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(StoreError::from_send)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let raw: RawDocument = response
            .json()
            .await
            .map_err(|e| StoreError::Malformed(e.to_string()))?;

        raw.into_document().map(Some)
    }

    async fn health_check(&self, collection: &str) -> StoreResult<()> {
        self.fetch_page(collection, 1, None).await.map(|_| ())
    }
}

/// Turn a non-success response into a store error
async fn status_error(response: Response) -> StoreError {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => StoreError::PermissionDenied(text),
        StatusCode::SERVICE_UNAVAILABLE => StoreError::Unavailable,
        _ => StoreError::Api {
            status: status.as_u16(),
            message: text,
        },
    }
}
