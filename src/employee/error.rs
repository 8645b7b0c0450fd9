//! Employee read errors

use thiserror::Error;

use crate::store::StoreError;

/// Failure to produce employee records
#[derive(Error, Debug)]
pub enum FetchError {
    /// The collection read itself failed (network, permission, transport)
    #[error("Failed to read collection '{collection}': {source}")]
    Store {
        collection: String,
        #[source]
        source: StoreError,
    },

    /// Strict projection rejected a document
    #[error("Document '{id}' is missing required field '{field}'")]
    Validation { id: String, field: &'static str },
}

impl FetchError {
    pub(crate) fn store(collection: &str, source: StoreError) -> Self {
        FetchError::Store {
            collection: collection.to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = FetchError::store("employee", StoreError::Timeout);
        assert_eq!(
            err.to_string(),
            "Failed to read collection 'employee': Request timeout"
        );
        assert!(err.source().is_some());

        let err = FetchError::Validation {
            id: "e1".to_string(),
            field: "email",
        };
        assert_eq!(err.to_string(), "Document 'e1' is missing required field 'email'");
    }
}
