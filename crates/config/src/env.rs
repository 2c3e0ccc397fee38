use serde::Deserialize;
use std::env;

/// Number of issues shown when no (or a non-positive) maximum is configured.
pub const DEFAULT_MAX_ITEMS: u32 = 20;

/// Per-instance widget configuration, normally supplied by the host's
/// settings form. Here it is read from the environment.
#[derive(Debug, Clone, Deserialize)]
pub struct WidgetConfig {
    /// Machine name of the project of interest (e.g. "ctools"). May be empty.
    pub project_machine_name: String,
    /// Maximum number of issues to show. Non-positive values fall back to
    /// [`DEFAULT_MAX_ITEMS`].
    pub maximum_number: Option<i64>,
    /// Optional machine name used when `project_machine_name` is empty.
    /// Unset means an empty name stays empty and renders the not-found state.
    pub fallback_machine_name: Option<String>,
}

impl WidgetConfig {
    /// Load configuration from environment variables.
    /// Loads `.env` file if present, then reads the vars.
    pub fn from_env() -> Self {
        // Best-effort .env load; ignore if missing
        let _ = dotenvy::dotenv();

        Self {
            project_machine_name: get_var_or("PROJECT_MACHINE_NAME", ""),
            maximum_number: env::var("MAXIMUM_NUMBER")
                .ok()
                .and_then(|v| v.parse().ok()),
            fallback_machine_name: env::var("FALLBACK_MACHINE_NAME").ok(),
        }
    }

    /// Effective machine name: trimmed, with the fallback applied when the
    /// configured value trims to empty.
    pub fn machine_name(&self) -> String {
        let trimmed = self.project_machine_name.trim();
        if trimmed.is_empty() {
            if let Some(fallback) = &self.fallback_machine_name {
                return fallback.trim().to_string();
            }
        }
        trimmed.to_string()
    }

    /// Effective item cap: always >= 1. Absent, zero, or negative configured
    /// values are replaced by [`DEFAULT_MAX_ITEMS`] before any query is issued.
    pub fn effective_max_items(&self) -> u32 {
        match self.maximum_number {
            Some(n) if n > 0 => u32::try_from(n).unwrap_or(DEFAULT_MAX_ITEMS),
            _ => DEFAULT_MAX_ITEMS,
        }
    }
}

fn get_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
