//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::employee::ProjectionMode;
use crate::store::FirestoreConfig;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub employees: EmployeesConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub cors_origins: Vec<String>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Built site (`trunk build` output) served for every non-API path
    #[serde(default = "default_ui_dir")]
    pub ui_dir: PathBuf,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_request_timeout() -> u64 {
    30
}

fn default_ui_dir() -> PathBuf {
    PathBuf::from("humstudios-ui/dist")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            request_timeout_secs: default_request_timeout(),
            ui_dir: default_ui_dir(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Which document store backs the site
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Firestore,
    Memory,
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::Firestore => write!(f, "firestore"),
            StoreBackend::Memory => write!(f, "memory"),
        }
    }
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "firestore" => Ok(StoreBackend::Firestore),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(format!("unknown store backend '{}'", other)),
        }
    }
}

/// Document store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,

    #[serde(default = "default_firestore_url")]
    pub base_url: String,

    #[serde(default)]
    pub project_id: String,

    #[serde(default = "default_database")]
    pub database: String,

    pub api_key: Option<String>,

    pub bearer_token: Option<String>,

    #[serde(default = "default_page_size")]
    pub page_size: u32,

    #[serde(default = "default_store_timeout")]
    pub request_timeout_ms: u64,

    /// JSON seed for the memory backend
    pub seed_file: Option<PathBuf>,
}

fn default_firestore_url() -> String {
    "https://firestore.googleapis.com".to_string()
}

fn default_database() -> String {
    "(default)".to_string()
}

fn default_page_size() -> u32 {
    300
}

fn default_store_timeout() -> u64 {
    10_000
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            base_url: default_firestore_url(),
            project_id: String::new(),
            database: default_database(),
            api_key: None,
            bearer_token: None,
            page_size: default_page_size(),
            request_timeout_ms: default_store_timeout(),
            seed_file: None,
        }
    }
}

impl StoreConfig {
    /// Settings for the Firestore adapter
    pub fn firestore_config(&self) -> FirestoreConfig {
        FirestoreConfig {
            base_url: self.base_url.clone(),
            project_id: self.project_id.clone(),
            database: self.database.clone(),
            api_key: self.api_key.clone(),
            bearer_token: self.bearer_token.clone(),
            page_size: self.page_size,
            request_timeout_ms: self.request_timeout_ms,
        }
    }
}

/// Employee record configuration
///
/// Employees always live in the `employee` collection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeesConfig {
    #[serde(default)]
    pub projection: ProjectionMode,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set
    pub fn filter_directive(&self) -> String {
        format!("humstudios={},tower_http=debug", self.level)
    }

    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("humstudios").join("config.toml")),
            Some(PathBuf::from("/etc/humstudios/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // Server overrides
        if let Some(host) = var("HUMSTUDIOS_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("HUMSTUDIOS_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!("Ignoring invalid HUMSTUDIOS_PORT '{}'", port),
            }
        }
        if let Some(dir) = var("HUMSTUDIOS_UI_DIR") {
            self.server.ui_dir = PathBuf::from(dir);
        }

        // Store overrides
        if let Some(backend) = var("HUMSTUDIOS_STORE_BACKEND") {
            match backend.parse() {
                Ok(b) => self.store.backend = b,
                Err(e) => tracing::warn!("Ignoring HUMSTUDIOS_STORE_BACKEND: {}", e),
            }
        }
        if let Some(project) = var("HUMSTUDIOS_FIRESTORE_PROJECT") {
            self.store.project_id = project;
        }
        if let Some(key) = var("HUMSTUDIOS_FIRESTORE_API_KEY") {
            self.store.api_key = Some(key);
        }
        if let Some(token) = var("HUMSTUDIOS_FIRESTORE_TOKEN") {
            self.store.bearer_token = Some(token);
        }
        if let Some(seed) = var("HUMSTUDIOS_SEED_FILE") {
            self.store.seed_file = Some(PathBuf::from(seed));
        }

        // Logging overrides
        if let Some(level) = var("HUMSTUDIOS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("HUMSTUDIOS_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Hum Studios Configuration
#
# Environment variables override these settings:
# - HUMSTUDIOS_HOST
# - HUMSTUDIOS_PORT
# - HUMSTUDIOS_UI_DIR
# - HUMSTUDIOS_STORE_BACKEND
# - HUMSTUDIOS_FIRESTORE_PROJECT
# - HUMSTUDIOS_FIRESTORE_API_KEY
# - HUMSTUDIOS_FIRESTORE_TOKEN
# - HUMSTUDIOS_SEED_FILE
# - HUMSTUDIOS_LOG_LEVEL
# - HUMSTUDIOS_LOG_FORMAT

[server]
# Host to bind to
host = "0.0.0.0"

# Port to listen on
port = 3000

# Allowed CORS origins for the JSON API (empty = same origin only)
cors_origins = []

# Request timeout in seconds
request_timeout_secs = 30

# Built site served for every non-API path (output of `trunk build`)
ui_dir = "humstudios-ui/dist"

[store]
# Document store backend: firestore or memory
backend = "firestore"

# Firestore REST endpoint
base_url = "https://firestore.googleapis.com"

# Google Cloud project and database
project_id = ""
database = "(default)"

# Credentials: a web API key, an OAuth2 access token, or both
# api_key = ""
# bearer_token = ""

# Documents fetched per page when listing a collection
page_size = 300

# Request timeout in milliseconds
request_timeout_ms = 10000

# JSON seed for the memory backend
# seed_file = "./seed.json"

[employees]
# Projection mode: best-effort (missing fields stay empty) or strict
# (documents without name or email fail the read)
projection = "best-effort"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
