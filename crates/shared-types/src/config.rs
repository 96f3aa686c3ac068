use serde::{Deserialize, Serialize};

/// Default simulated sign-in latency in milliseconds.
pub const DEFAULT_LATENCY_MS: u64 = 1000;

fn default_latency_ms() -> u64 {
    DEFAULT_LATENCY_MS
}

fn default_brand_name() -> String {
    "CopMap".to_string()
}

fn default_subtitle() -> String {
    "Real-time police station management".to_string()
}

fn default_level() -> String {
    "info".to_string()
}

/// Settings for the stub authenticator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthConfig {
    #[serde(default = "default_latency_ms")]
    pub simulated_latency_ms: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: DEFAULT_LATENCY_MS,
        }
    }
}

/// Branding shown in the dashboard shell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardConfig {
    #[serde(default = "default_brand_name")]
    pub brand_name: String,
    #[serde(default = "default_subtitle")]
    pub subtitle: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            brand_name: default_brand_name(),
            subtitle: default_subtitle(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// One of trace, debug, info, warn, error.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
///
/// Every section and field has a default so a missing or partial file
/// still produces a usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}
