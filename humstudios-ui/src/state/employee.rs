//! Employee record

use serde::Deserialize;

/// One employee as served by `/api/v1/employees`
///
/// `None` means the document had no such field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub reporter: Option<String>,
    pub address: Option<String>,
    pub blood: Option<String>,
    pub image: Option<String>,
}

impl Employee {
    /// Photo URL, if there is a non-empty one
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_deref().filter(|url| !url.is_empty())
    }
}

/// Field text, absent as empty
pub fn text(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_record() {
        let employee: Employee = serde_json::from_str(
            r#"{"id":"abc123","name":"Ada","email":null,"blood":"O+","image":""}"#,
        )
        .unwrap();

        assert_eq!(employee.id, "abc123");
        assert_eq!(employee.blood.as_deref(), Some("O+"));
        assert_eq!(employee.email, None);
        assert_eq!(employee.image_url(), None);
        assert_eq!(text(&employee.phone), "");
    }
}
