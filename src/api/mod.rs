//! HTTP Service
//!
//! JSON API, health probes and the built site for Hum Studios, with Axum.
//!
//! # Endpoints
//!
//! ## Site
//! - `GET /*` - Files of the built UI; unknown paths get its `index.html` so
//!   client-side routes such as `/admin/view-employee` load the app
//!
//! ## Employees
//! - `GET /api/v1/employees` - List all employees
//! - `GET /api/v1/employees/:id` - Get an employee
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use humstudios::api::{serve, AppState};
//! use humstudios::config::Config;
//! use humstudios::store;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let store = store::connect(&config.store).await?;
//!     let server = config.server.clone();
//!
//!     serve(AppState::new(store, config), &server).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/employees", get(routes::employees::list_employees))
        .route("/employees/:id", get(routes::employees::get_employee))
        .fallback(routes::employees::unknown_endpoint)
        .layer(cors_layer(&state.config.server.cors_origins));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let site = site_service(&state.config.server.ui_dir);
    let timeout = Duration::from_secs(state.config.server.request_timeout_secs);

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .fallback_service(site)
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

/// Static files of the built UI, falling back to its `index.html`
fn site_service(dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")))
}

/// CORS for the JSON API; an empty list allows no cross-origin callers
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET])
}

/// Start the server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ApiError> {
    let backend = state.store.backend();
    if !config.ui_dir.join("index.html").exists() {
        tracing::warn!(
            "No built site at {:?}; run `trunk build` in humstudios-ui",
            config.ui_dir
        );
    }
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(backend, "Hum Studios listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Hum Studios shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::employee::{ProjectionMode, EMPLOYEE_COLLECTION};
    use crate::store::testing::FailingStore;
    use crate::store::{Document, DocumentStore, MemoryStore};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use tower::util::ServiceExt;

    async fn seeded_store() -> Arc<MemoryStore> {
        let store = Arc::new(MemoryStore::new());
        store
            .insert(
                EMPLOYEE_COLLECTION,
                Document::new("abc123")
                    .field("name", "Ada Lovelace")
                    .field("email", "ada@humstudios.com")
                    .field("department", "Engineering")
                    .field("bloodGroup", "O+"),
            )
            .await;
        store
            .insert(
                EMPLOYEE_COLLECTION,
                Document::new("def456").field("name", "Grace Hopper"),
            )
            .await;
        store
    }

    fn app_with(store: Arc<dyn DocumentStore>, config: Config) -> Router {
        build_router(AppState::new(store, config))
    }

    async fn create_test_app() -> Router {
        app_with(seeded_store().await, Config::default())
    }

    fn failing_app() -> Router {
        app_with(Arc::new(FailingStore::default()), Config::default())
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        serde_json::from_str(&body_text(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let response = get(failing_app(), "/health/live").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let response = get(create_test_app().await, "/health/ready").await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = get(failing_app(), "/health/ready").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_health_full() {
        let response = get(create_test_app().await, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["backend"], "memory");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    fn site_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<title>Hum Studios</title>").unwrap();
        std::fs::write(dir.path().join("app.js"), "main()").unwrap();
        dir
    }

    #[tokio::test]
    async fn test_site_assets_and_client_routes() {
        let dir = site_dir();
        let mut config = Config::default();
        config.server.ui_dir = dir.path().to_path_buf();
        let app = app_with(seeded_store().await, config);

        let response = get(app.clone(), "/app.js").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "main()");

        for path in ["/", "/admin/view-employee", "/admin/employee-details?id=abc123"] {
            let response = get(app.clone(), path).await;
            assert_eq!(response.status(), StatusCode::OK, "{}", path);
            assert!(body_text(response).await.contains("Hum Studios"));
        }
    }

    #[tokio::test]
    async fn test_each_list_request_reads_store() {
        let store = seeded_store().await;
        let app = app_with(Arc::clone(&store) as Arc<dyn DocumentStore>, Config::default());

        get(app.clone(), "/api/v1/employees").await;
        get(app, "/api/v1/employees").await;
        assert_eq!(store.read_count(), 2);
    }

    #[tokio::test]
    async fn test_list_employees_json() {
        let response = get(create_test_app().await, "/api/v1/employees").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["total"], 2);
        assert_eq!(json["employees"][0]["id"], "abc123");
        assert_eq!(json["employees"][1]["name"], "Grace Hopper");
    }

    #[tokio::test]
    async fn test_get_employee_json() {
        let response = get(create_test_app().await, "/api/v1/employees/abc123").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["blood"], "O+");

        let response = get(create_test_app().await, "/api/v1/employees/missing").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_api_store_failure() {
        let response = get(failing_app(), "/api/v1/employees").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "STORE_UNAVAILABLE");
        assert!(json["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_api_strict_projection() {
        let mut config = Config::default();
        config.employees.projection = ProjectionMode::Strict;

        // second seeded document has no email
        let response = get(app_with(seeded_store().await, config), "/api/v1/employees").await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_json(response).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_api_path() {
        let response = get(create_test_app().await, "/api/v1/nowhere").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_missing_site_is_not_found() {
        let mut config = Config::default();
        config.server.ui_dir = std::path::PathBuf::from("/nonexistent/humstudios-ui");

        let response = get(app_with(seeded_store().await, config), "/admin/view-employee").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
