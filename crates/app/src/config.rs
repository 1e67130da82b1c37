use shared_types::AppConfig;
use std::sync::OnceLock;

/// `config.toml` at the workspace root, baked in at build time.
const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// The loaded portal configuration. Parsed once; falls back to defaults
/// if the embedded file does not parse.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| load(EMBEDDED_CONFIG, option_env!("CAMPUS_SYNC_API_URL")))
}

fn load(contents: &str, api_override: Option<&str>) -> AppConfig {
    let config = AppConfig::from_toml_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to parse config.toml, using defaults");
        AppConfig::default()
    });
    config.with_api_base_url(api_override)
}
