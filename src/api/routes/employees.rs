//! Employee Routes
//!
//! - GET /api/v1/employees - All employees in store order
//! - GET /api/v1/employees/:id - One employee

use axum::{
    extract::{Path, State},
    http::Uri,
    Json,
};
use std::sync::Arc;

use crate::api::dto::EmployeeListResponse;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::employee::Employee;

/// GET /api/v1/employees
pub async fn list_employees(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<EmployeeListResponse>> {
    let employees = state.employees.list_all().await?;
    tracing::debug!(count = employees.len(), "Loaded employees");
    Ok(Json(EmployeeListResponse::from(employees)))
}

/// GET /api/v1/employees/:id
pub async fn get_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Employee>> {
    state
        .employees
        .find(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Employee '{}'", id)))
}

/// Fallback for unmatched `/api/v1` paths, so they never reach the site
pub async fn unknown_endpoint(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("Endpoint '{}'", uri.path()))
}
