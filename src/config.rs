use serde::Deserialize;

use crate::error::DashboardError;
use crate::history::DEFAULT_HISTORY_LIMIT;

const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000/api";
const DEFAULT_LOG_FILTER: &str = "info";

/// Name of the `<meta>` tag whose `content` may carry a JSON override.
pub const CONFIG_META_NAME: &str = "dashboard-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Base URL of the summary service, without the endpoint path.
    pub api_base: String,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
    pub history_limit: usize,
}

impl Default for DashboardConfig {
    /// Built-in defaults, overridable at build time with `DASHBOARD_API_BASE`
    /// and `DASHBOARD_LOG`.
    fn default() -> Self {
        Self {
            api_base: option_env!("DASHBOARD_API_BASE")
                .unwrap_or(DEFAULT_API_BASE)
                .to_string(),
            log_filter: option_env!("DASHBOARD_LOG")
                .unwrap_or(DEFAULT_LOG_FILTER)
                .to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl DashboardConfig {
    /// Parse a JSON override. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, DashboardError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| DashboardError::Config(e.to_string()))?;
        if config.api_base.trim().is_empty() {
            return Err(DashboardError::Config("api_base must not be empty".to_string()));
        }
        if config.history_limit == 0 {
            return Err(DashboardError::Config("history_limit must be at least 1".to_string()));
        }
        Ok(config)
    }

    /// Defaults, replaced by the page's `dashboard-config` meta tag when present.
    pub fn load() -> Result<Self, DashboardError> {
        match meta_override() {
            Some(json) => Self::from_json(&json),
            None => Ok(Self::default()),
        }
    }
}

fn meta_override() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", CONFIG_META_NAME);
    document
        .query_selector(&selector)
        .ok()??
        .get_attribute("content")
}
