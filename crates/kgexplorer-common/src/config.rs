use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use config::{Config, ConfigError, Environment, File};

// --- Constants for Default Configuration ---
pub const DEFAULT_ENDPOINT_URL: &str = "https://nfdi4culture.de/sparql";
pub const DEFAULT_ENDPOINT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_USER_AGENT: &str = concat!("kgexplorer/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_SELECTION_BOUND: u64 = 10;
pub const DEFAULT_VALUE_LIMIT: u64 = 10;

pub const DEFAULT_RESULTS_DIR: &str = "files/results";
pub const DEFAULT_QUERY_DIR: &str = "files";
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RequestMethod {
    #[default]
    Get,
    Post,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub url: String,
    pub timeout_secs: u64,
    #[serde(default)]
    pub method: RequestMethod,
    pub user_agent: String,
}

impl EndpointConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Bound offered when a live count query fails or returns nothing.
    pub default_bound: u64,
    /// How many of the most frequent values to fetch for a property.
    pub value_limit: u64,
    /// PREFIX preamble prepended to every generated query.
    #[serde(default)]
    pub prefixes: String,
    pub cache_enabled: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub results_dir: String,
    #[serde(default)]
    pub format: ExportFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueriesConfig {
    pub directory: String,
    pub preview_rows: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub endpoint: EndpointConfig,
    pub explorer: ExplorerConfig,
    pub export: ExportConfig,
    pub queries: QueriesConfig,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT_URL.into(),
            timeout_secs: DEFAULT_ENDPOINT_TIMEOUT_SECS,
            method: RequestMethod::Get,
            user_agent: DEFAULT_USER_AGENT.into(),
        }
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            default_bound: DEFAULT_SELECTION_BOUND,
            value_limit: DEFAULT_VALUE_LIMIT,
            prefixes: String::new(),
            cache_enabled: true,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            results_dir: DEFAULT_RESULTS_DIR.into(),
            format: ExportFormat::Json,
        }
    }
}

impl Default for QueriesConfig {
    fn default() -> Self {
        Self {
            directory: DEFAULT_QUERY_DIR.into(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: EndpointConfig::default(),
            explorer: ExplorerConfig::default(),
            export: ExportConfig::default(),
            queries: QueriesConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("kgexplorer")
    }

    /// Loads configuration with `file_stem` as the optional config file
    /// (`<file_stem>.toml`, `.json`, ... resolved by the config crate).
    pub fn load_from(file_stem: &str) -> Result<Self, ConfigError> {
        let s = Config::builder()
            // Default settings
            .set_default("endpoint.url", DEFAULT_ENDPOINT_URL)?
            .set_default("endpoint.timeout_secs", DEFAULT_ENDPOINT_TIMEOUT_SECS)?
            .set_default("endpoint.method", "get")?
            .set_default("endpoint.user_agent", DEFAULT_USER_AGENT)?
            .set_default("explorer.default_bound", DEFAULT_SELECTION_BOUND)?
            .set_default("explorer.value_limit", DEFAULT_VALUE_LIMIT)?
            .set_default("explorer.prefixes", "")?
            .set_default("explorer.cache_enabled", true)?
            .set_default("export.results_dir", DEFAULT_RESULTS_DIR)?
            .set_default("export.format", "json")?
            .set_default("queries.directory", DEFAULT_QUERY_DIR)?
            .set_default("queries.preview_rows", DEFAULT_PREVIEW_ROWS as i64)?

            // File: kgexplorer.toml
            .add_source(File::with_name(file_stem).required(false))

            // Environment: KGEXPLORER__ENDPOINT__URL=... -> endpoint.url
            .add_source(Environment::with_prefix("KGEXPLORER").separator("__"))

            // Short-hand override for the endpoint
            .set_override_option("endpoint.url", env::var("SPARQL_ENDPOINT").ok())?

            .build()?;

        s.try_deserialize()
    }

    /// Bound offered at a selection step when no live count is available.
    /// Always at least 1.
    pub fn fallback_bound(&self) -> u64 {
        self.explorer.default_bound.max(1)
    }
}
