//! Firestore wire format
//!
//! Firestore's REST API wraps every field in a typed envelope
//! (`{"stringValue": "..."}`, `{"integerValue": "42"}`, ...). These helpers
//! unwrap documents into plain JSON so the rest of the crate never sees the
//! envelope.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Number, Value};

use super::{Document, StoreError, StoreResult};

/// Response of `GET .../documents/{collection}`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListDocumentsResponse {
    /// Absent when the collection is empty
    #[serde(default)]
    pub documents: Vec<RawDocument>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// A document as Firestore sends it
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawDocument {
    /// Full resource name: `projects/{p}/databases/{d}/documents/{collection}/{id}`
    pub name: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
    #[serde(default)]
    pub create_time: Option<String>,
    #[serde(default)]
    pub update_time: Option<String>,
}

impl RawDocument {
    /// Unwrap every typed field and take the id from the resource name
    ///
    /// A field that cannot be decoded is dropped and reads as absent. Only a
    /// name without an id segment fails the document.
    pub fn into_document(self) -> StoreResult<Document> {
        let id = document_id(&self.name)?.to_string();

        let mut fields = Map::with_capacity(self.fields.len());
        for (name, typed) in &self.fields {
            match decode_value(typed) {
                Ok(value) => {
                    fields.insert(name.clone(), value);
                }
                Err(e) => {
                    tracing::warn!(document = %id, field = %name, error = %e, "Dropping undecodable field");
                }
            }
        }

        Ok(Document {
            id,
            fields,
            create_time: self.create_time.as_deref().and_then(parse_timestamp),
            update_time: self.update_time.as_deref().and_then(parse_timestamp),
        })
    }
}

/// Last path segment of a document resource name
fn document_id(name: &str) -> StoreResult<&str> {
    match name.rsplit('/').next() {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(StoreError::Malformed(format!(
            "document name '{}' has no id segment",
            name
        ))),
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Decode one typed Firestore value into plain JSON
pub(crate) fn decode_value(typed: &Value) -> StoreResult<Value> {
    let envelope = typed
        .as_object()
        .ok_or_else(|| StoreError::Malformed(format!("expected typed value, got {}", typed)))?;

    let (kind, inner) = envelope
        .iter()
        .next()
        .ok_or_else(|| StoreError::Malformed("empty typed value".to_string()))?;

    let decoded = match kind.as_str() {
        "nullValue" => Value::Null,
        "booleanValue" => Value::Bool(inner.as_bool().unwrap_or(false)),
        "stringValue" | "timestampValue" | "referenceValue" | "bytesValue" => inner.clone(),
        // int64 travels as a decimal string
        "integerValue" => match inner {
            Value::String(s) => s
                .parse::<i64>()
                .map(|n| Value::Number(n.into()))
                .map_err(|e| StoreError::Malformed(format!("integerValue '{}': {}", s, e)))?,
            Value::Number(_) => inner.clone(),
            other => {
                return Err(StoreError::Malformed(format!(
                    "integerValue has unexpected shape: {}",
                    other
                )))
            }
        },
        // NaN and infinities arrive as strings and have no JSON number form
        "doubleValue" => match inner {
            Value::Number(_) => inner.clone(),
            Value::String(s) => s
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            _ => Value::Null,
        },
        "geoPointValue" => inner.clone(),
        "arrayValue" => {
            let values = inner
                .get("values")
                .and_then(Value::as_array)
                .map(|items| items.iter().map(decode_value).collect::<StoreResult<Vec<_>>>())
                .transpose()?
                .unwrap_or_default();
            Value::Array(values)
        }
        "mapValue" => {
            let mut map = Map::new();
            if let Some(fields) = inner.get("fields").and_then(Value::as_object) {
                for (name, value) in fields {
                    map.insert(name.clone(), decode_value(value)?);
                }
            }
            Value::Object(map)
        }
        other => {
            return Err(StoreError::Malformed(format!(
                "unknown value type '{}'",
                other
            )))
        }
    };

    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_scalars() {
        assert_eq!(decode_value(&json!({"stringValue": "Ada"})).unwrap(), json!("Ada"));
        assert_eq!(decode_value(&json!({"integerValue": "42"})).unwrap(), json!(42));
        assert_eq!(decode_value(&json!({"doubleValue": 1.5})).unwrap(), json!(1.5));
        assert_eq!(decode_value(&json!({"doubleValue": "NaN"})).unwrap(), Value::Null);
        assert_eq!(decode_value(&json!({"booleanValue": true})).unwrap(), json!(true));
        assert_eq!(decode_value(&json!({"nullValue": null})).unwrap(), Value::Null);
    }

    #[test]
    fn test_decode_nested() {
        let typed = json!({
            "mapValue": {
                "fields": {
                    "city": {"stringValue": "Lahore"},
                    "tags": {"arrayValue": {"values": [
                        {"stringValue": "a"},
                        {"integerValue": "2"}
                    ]}}
                }
            }
        });

        assert_eq!(
            decode_value(&typed).unwrap(),
            json!({"city": "Lahore", "tags": ["a", 2]})
        );
        assert_eq!(decode_value(&json!({"arrayValue": {}})).unwrap(), json!([]));
    }

    #[test]
    fn test_decode_rejects_unknown_type() {
        assert!(matches!(
            decode_value(&json!({"mysteryValue": 1})),
            Err(StoreError::Malformed(_))
        ));
        assert!(decode_value(&json!("bare string")).is_err());
    }

    #[test]
    fn test_raw_document_into_document() {
        let raw: RawDocument = serde_json::from_value(json!({
            "name": "projects/p/databases/(default)/documents/employee/abc123",
            "fields": {
                "name": {"stringValue": "Ada"},
                "bloodGroup": {"stringValue": "O+"}
            },
            "createTime": "2024-05-01T10:00:00.123456Z",
            "updateTime": "2024-05-02T10:00:00Z"
        }))
        .unwrap();

        let doc = raw.into_document().unwrap();
        assert_eq!(doc.id, "abc123");
        assert_eq!(doc.get("bloodGroup"), Some(&json!("O+")));
        assert!(doc.create_time.is_some());
        assert!(doc.update_time.is_some());
    }

    #[test]
    fn test_undecodable_field_is_dropped() {
        let raw: RawDocument = serde_json::from_value(json!({
            "name": "projects/p/databases/(default)/documents/employee/abc123",
            "fields": {
                "name": {"stringValue": "Ada"},
                "embedding": {"vectorValue": [0.1, 0.2]}
            }
        }))
        .unwrap();

        let doc = raw.into_document().unwrap();
        assert_eq!(doc.get("name"), Some(&json!("Ada")));
        assert_eq!(doc.get("embedding"), None);
    }

    #[test]
    fn test_name_without_id_fails() {
        let raw: RawDocument = serde_json::from_value(json!({
            "name": "projects/p/databases/(default)/documents/employee/"
        }))
        .unwrap();

        assert!(matches!(raw.into_document(), Err(StoreError::Malformed(_))));
    }

    #[test]
    fn test_empty_list_response() {
        let response: ListDocumentsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.documents.is_empty());
        assert!(response.next_page_token.is_none());
    }
}
