//! HTTP API Client
//!
//! Functions for reading employees from the Hum Studios REST API.

use gloo_net::http::{Request, Response};

use crate::state::employee::Employee;

/// Default API base URL, same origin as the site
pub const DEFAULT_API_BASE: &str = "/api/v1";

/// Local storage key that overrides the API base
const API_BASE_KEY: &str = "humstudios_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

#[derive(Debug, serde::Deserialize)]
struct EmployeeListResponse {
    employees: Vec<Employee>,
}

#[derive(Debug, serde::Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    code: String,
    message: String,
}

/// Fetch every employee
pub async fn fetch_employees() -> Result<Vec<Employee>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/employees", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let result: EmployeeListResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.employees)
}

/// Fetch one employee; `None` when no document has this id
pub async fn fetch_employee(id: &str) -> Result<Option<Employee>, String> {
    let api_base = get_api_base();
    let id: String = js_sys::encode_uri_component(id).into();

    let response = Request::get(&format!("{}/employees/{}", api_base, id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status() == 404 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map(Some)
        .map_err(|e| format!("Parse error: {}", e))
}

async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.json::<ErrorResponse>().await {
        Ok(body) => format!("{}: {}", body.error.code, body.error.message),
        Err(_) => format!("Request failed with status {}", status),
    }
}
