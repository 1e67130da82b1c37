use serde::{Deserialize, Serialize};

use crate::navigation::GuardPolicy;

/// Default Backend API origin for local development.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Viewport width (px) at or below which the sidebar becomes a drawer.
pub const DEFAULT_MOBILE_BREAKPOINT: u32 = 768;

/// Backend API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

/// Route guard settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoutingConfig {
    /// Redirect to `/unauthorized` when the session role differs from the
    /// shell's role.
    #[serde(default = "default_true")]
    pub enforce_role_match: bool,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            enforce_role_match: true,
        }
    }
}

impl RoutingConfig {
    pub fn policy(&self) -> GuardPolicy {
        GuardPolicy {
            enforce_role_match: self.enforce_role_match,
        }
    }
}

/// Layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    #[serde(default = "default_breakpoint")]
    pub mobile_breakpoint: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_breakpoint() -> u32 {
    DEFAULT_MOBILE_BREAKPOINT
}

/// Top-level config file structure matching `config.toml`.
///
/// Every section and field has a default so a missing or partial file still
/// yields a usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub routing: RoutingConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
}

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Replace the API origin, ignoring blank overrides. Trailing slashes are dropped.
    pub fn with_api_base_url(mut self, base_url: Option<&str>) -> Self {
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.trim_end_matches('/').to_string();
        }
        self
    }
}
