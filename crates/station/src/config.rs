use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
pub const CONFIG_PATH: &str = "config.toml";

/// Parse config file contents, falling back to defaults on a parse error.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(path = CONFIG_PATH, error = %e, "failed to parse config, using defaults");
        AppConfig::default()
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config() -> AppConfig {
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => parse_config(&contents),
        Err(e) => {
            tracing::info!(path = CONFIG_PATH, error = %e, "no config file, using defaults");
            AppConfig::default()
        }
    }
}

// Browser builds have no working directory to read from.
#[cfg(target_arch = "wasm32")]
fn read_config() -> AppConfig {
    AppConfig::default()
}

/// Read `config.toml` once and store it in the global `OnceLock`.
/// Later calls return the stored value.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(read_config)
}

/// Configured log level; unknown names fall back to INFO.
pub fn log_level(config: &AppConfig) -> tracing::Level {
    config
        .logging
        .level
        .parse()
        .unwrap_or(tracing::Level::INFO)
}
