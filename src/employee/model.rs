//! Employee record and document projection

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use super::FetchError;
use crate::store::Document;

/// Name of the collection employee documents live in
pub const EMPLOYEE_COLLECTION: &str = "employee";

/// Read-only projection of an employee document
///
/// Every field except `id` is whatever the document holds; `None` means the
/// field was absent or not representable as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub reporter: Option<String>,
    pub address: Option<String>,
    /// Blood group, stored as `bloodGroup`
    pub blood: Option<String>,
    /// Photo URL; empty or absent means no photo
    pub image: Option<String>,
}

/// How documents are shaped into records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectionMode {
    /// Take what is there, absent fields stay `None`
    #[default]
    BestEffort,
    /// Reject documents without a name or email
    Strict,
}

impl fmt::Display for ProjectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionMode::BestEffort => write!(f, "best-effort"),
            ProjectionMode::Strict => write!(f, "strict"),
        }
    }
}

impl FromStr for ProjectionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "best-effort" | "best_effort" | "besteffort" => Ok(ProjectionMode::BestEffort),
            "strict" => Ok(ProjectionMode::Strict),
            other => Err(format!("unknown projection mode '{}'", other)),
        }
    }
}

impl Employee {
    /// Direct field projection, no validation
    pub fn from_document(doc: &Document) -> Self {
        Self {
            id: doc.id.clone(),
            name: text_field(doc, "name"),
            email: text_field(doc, "email"),
            phone: text_field(doc, "phone"),
            department: text_field(doc, "department"),
            position: text_field(doc, "position"),
            reporter: text_field(doc, "reporter"),
            address: text_field(doc, "address"),
            blood: text_field(doc, "bloodGroup"),
            image: text_field(doc, "image"),
        }
    }

    /// Project a document under the given mode
    pub fn project(doc: &Document, mode: ProjectionMode) -> Result<Self, FetchError> {
        let employee = Self::from_document(doc);

        if mode == ProjectionMode::Strict {
            let required = [("name", &employee.name), ("email", &employee.email)];
            for (field, value) in required {
                let present = value.as_deref().is_some_and(|v| !v.trim().is_empty());
                if !present {
                    return Err(FetchError::Validation {
                        id: doc.id.clone(),
                        field,
                    });
                }
            }
        }

        Ok(employee)
    }

    /// Photo URL, if there is a usable one
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_deref().filter(|url| !url.is_empty())
    }
}

/// Strings verbatim, numbers and booleans as text, everything else absent
fn text_field(doc: &Document, name: &str) -> Option<String> {
    match doc.get(name)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_document() -> Document {
        Document::new("e1")
            .field("name", "Ada Lovelace")
            .field("email", "ada@humstudios.com")
            .field("phone", "555-0100")
            .field("department", "Engineering")
            .field("position", "Lead")
            .field("reporter", "Charles")
            .field("address", "12 St James's Square")
            .field("bloodGroup", "AB-")
            .field("image", "https://cdn.example.com/ada.png")
    }

    #[test]
    fn test_direct_projection() {
        let employee = Employee::from_document(&full_document());

        assert_eq!(employee.id, "e1");
        assert_eq!(employee.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(employee.blood.as_deref(), Some("AB-"));
        assert_eq!(employee.reporter.as_deref(), Some("Charles"));
        assert_eq!(employee.image_url(), Some("https://cdn.example.com/ada.png"));
    }

    #[test]
    fn test_missing_fields_stay_absent() {
        let employee = Employee::from_document(&Document::new("bare"));

        assert_eq!(employee.id, "bare");
        assert!(employee.name.is_none());
        assert!(employee.blood.is_none());
        assert!(employee.image_url().is_none());
    }

    #[test]
    fn test_blood_reads_blood_group_field() {
        let doc = Document::new("e2").field("blood", "A+");
        assert!(Employee::from_document(&doc).blood.is_none());
    }

    #[test]
    fn test_non_string_values() {
        let doc = Document::new("e3")
            .field("phone", json!(5550100))
            .field("position", json!(true))
            .field("address", json!({"city": "Lahore"}))
            .field("department", Value::Null);

        let employee = Employee::from_document(&doc);
        assert_eq!(employee.phone.as_deref(), Some("5550100"));
        assert_eq!(employee.position.as_deref(), Some("true"));
        assert!(employee.address.is_none());
        assert!(employee.department.is_none());
    }

    #[test]
    fn test_empty_image_is_no_image() {
        let doc = Document::new("e4").field("image", "");
        let employee = Employee::from_document(&doc);
        assert_eq!(employee.image.as_deref(), Some(""));
        assert!(employee.image_url().is_none());
    }

    #[test]
    fn test_strict_projection() {
        assert!(Employee::project(&full_document(), ProjectionMode::Strict).is_ok());

        let doc = Document::new("e5").field("name", "Bo").field("email", "  ");
        match Employee::project(&doc, ProjectionMode::Strict) {
            Err(FetchError::Validation { id, field }) => {
                assert_eq!(id, "e5");
                assert_eq!(field, "email");
            }
            other => panic!("expected validation error, got {:?}", other),
        }

        assert!(Employee::project(&doc, ProjectionMode::BestEffort).is_ok());
    }

    #[test]
    fn test_projection_mode_parse() {
        assert_eq!("strict".parse::<ProjectionMode>().unwrap(), ProjectionMode::Strict);
        assert_eq!(
            "Best-Effort".parse::<ProjectionMode>().unwrap(),
            ProjectionMode::BestEffort
        );
        assert!("lenient".parse::<ProjectionMode>().is_err());
        assert_eq!(ProjectionMode::default().to_string(), "best-effort");
    }
}
