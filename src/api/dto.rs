//! Data Transfer Objects
//!
//! Response types for the JSON endpoints. Shared with the CLI, which
//! deserializes them.

use serde::{Deserialize, Serialize};

use crate::employee::Employee;

// ============================================
// EMPLOYEE DTOs
// ============================================

/// Employee list response
#[derive(Debug, Serialize, Deserialize)]
pub struct EmployeeListResponse {
    /// Employees in store order
    pub employees: Vec<Employee>,
    /// Number of employees returned
    pub total: usize,
}

impl From<Vec<Employee>> for EmployeeListResponse {
    fn from(employees: Vec<Employee>) -> Self {
        Self {
            total: employees.len(),
            employees,
        }
    }
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: "healthy" or "unhealthy"
    pub status: String,
    /// Store probe result: "ok" or "error"
    pub store: String,
    /// Store backend name
    pub backend: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Server version
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_shape() {
        let response = EmployeeListResponse::from(vec![Employee {
            id: "e1".to_string(),
            name: Some("Ada".to_string()),
            ..Default::default()
        }]);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["total"], 1);
        assert_eq!(json["employees"][0]["id"], "e1");
        assert_eq!(json["employees"][0]["name"], "Ada");
    }
}
