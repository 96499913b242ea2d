use crate::AppError;
use serde::{Deserialize, Serialize};

/// Toast stack timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ToastSettings {
    pub enabled: bool,
    /// Lifetime for toasts whose notification has no duration of its own.
    pub default_duration_ms: u64,
    pub enter_delay_ms: u64,
    pub exit_delay_ms: u64,
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            default_duration_ms: 5000,
            enter_delay_ms: 50,
            exit_delay_ms: 300,
        }
    }
}

/// Bell panel display options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PanelSettings {
    /// Unread counts above this are shown as "{cap}+".
    pub badge_cap: usize,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self { badge_cap: 99 }
    }
}

/// Lifetimes of the login/logout notifications.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SessionSettings {
    pub welcome_duration_ms: u64,
    pub logout_duration_ms: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            welcome_duration_ms: 5000,
            logout_duration_ms: 3000,
        }
    }
}

/// Top-level config file structure matching `config.toml`.
///
/// Every field has a default so a missing or partial file still yields a
/// usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub toast: ToastSettings,
    #[serde(default)]
    pub panel: PanelSettings,
    #[serde(default)]
    pub session: SessionSettings,
}

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(contents)?)
    }
}
