//! App Configuration
//!
//! Values baked in at build time. The browser has no process environment,
//! so everything comes from `option_env!` with sensible defaults.

use log::LevelFilter;

/// Resource path of the todos collection
pub const TODOS_PATH: &str = "/api/todos";

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Prefix for all API paths. Empty means same origin.
    pub api_base_url: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    /// Read `TODO_API_BASE_URL` and `TODO_LOG_LEVEL` as captured at compile time
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("TODO_API_BASE_URL"), option_env!("TODO_LOG_LEVEL"))
    }

    pub fn from_values(api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_default();
        let log_level = log_level
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);
        Self { api_base_url, log_level }
    }

    /// URL of the todos collection
    pub fn todos_url(&self) -> String {
        format!("{}{}", self.api_base_url, TODOS_PATH)
    }

    /// URL of a single todo
    pub fn todo_url(&self, id: i64) -> String {
        format!("{}{}/{}", self.api_base_url, TODOS_PATH, id)
    }
}
