//! # Dashboard configuration — `dashboard.toml`
//!
//! Optional TOML file read from the native data directory at startup. Web
//! builds use the defaults, with the API base URL overridable at compile time
//! via the `APARTMENT_API_URL` environment variable.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000/api"
//!
//! [dashboard]
//! risk_alert_threshold = 0.5
//! recent_complaints = 10
//! tenant_complaints = 20
//! employee_complaints = 50
//! recent_payments = 10
//! ```
//!
//! Every field has a default, so a missing or partial file is equivalent to the
//! default configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Backend base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid dashboard config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialise dashboard config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Top-level configuration stored in `dashboard.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub dashboard: ViewConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    option_env!("APARTMENT_API_URL")
        .unwrap_or(DEFAULT_API_URL)
        .to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// How much data the dashboards fetch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Minimum delay-risk score for a payment to appear as an alert.
    #[serde(default = "default_risk_threshold")]
    pub risk_alert_threshold: f64,
    /// Complaints listed on the admin and owner overviews.
    #[serde(default = "default_recent_complaints")]
    pub recent_complaints: u32,
    #[serde(default = "default_tenant_complaints")]
    pub tenant_complaints: u32,
    #[serde(default = "default_employee_complaints")]
    pub employee_complaints: u32,
    #[serde(default = "default_recent_payments")]
    pub recent_payments: u32,
}

fn default_risk_threshold() -> f64 {
    0.5
}

fn default_recent_complaints() -> u32 {
    10
}

fn default_tenant_complaints() -> u32 {
    20
}

fn default_employee_complaints() -> u32 {
    50
}

fn default_recent_payments() -> u32 {
    10
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            risk_alert_threshold: default_risk_threshold(),
            recent_complaints: default_recent_complaints(),
            tenant_complaints: default_tenant_complaints(),
            employee_complaints: default_employee_complaints(),
            recent_payments: default_recent_payments(),
        }
    }
}

impl DashboardConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "dashboard.toml"
    }

    /// Builder method to point at another backend.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api.base_url = url.into();
        self
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Read `dashboard.toml` from `dir`. A missing file yields the defaults.
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(Self::filename());
        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::from_toml(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.display().to_string(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = DashboardConfig::from_toml("").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.dashboard.risk_alert_threshold, 0.5);
        assert_eq!(config.dashboard.employee_complaints, 50);
    }

    #[test]
    fn test_partial_config() {
        let config = DashboardConfig::from_toml(
            r#"
            [api]
            base_url = "https://estate.example/api"

            [dashboard]
            risk_alert_threshold = 0.8
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://estate.example/api");
        assert_eq!(config.dashboard.risk_alert_threshold, 0.8);
        assert_eq!(config.dashboard.recent_payments, 10);
    }

    #[test]
    fn test_every_dashboard_key() {
        let config = DashboardConfig::from_toml(
            r#"
            [dashboard]
            risk_alert_threshold = 0.7
            recent_complaints = 3
            tenant_complaints = 4
            employee_complaints = 5
            recent_payments = 6
            "#,
        )
        .unwrap();
        assert_eq!(config.dashboard.risk_alert_threshold, 0.7);
        assert_eq!(config.dashboard.recent_complaints, 3);
        assert_eq!(config.dashboard.tenant_complaints, 4);
        assert_eq!(config.dashboard.employee_complaints, 5);
        assert_eq!(config.dashboard.recent_payments, 6);
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = DashboardConfig::default().with_base_url("http://10.0.0.5:5000/api");
        let text = config.to_toml().unwrap();
        assert_eq!(DashboardConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            DashboardConfig::load_from_dir(dir.path()).unwrap(),
            DashboardConfig::default()
        );

        std::fs::write(dir.path().join("dashboard.toml"), "[dashboard]\nrecent_complaints = 5\n").unwrap();
        let config = DashboardConfig::load_from_dir(dir.path()).unwrap();
        assert_eq!(config.dashboard.recent_complaints, 5);

        std::fs::write(dir.path().join("dashboard.toml"), "[dashboard\n").unwrap();
        assert!(matches!(
            DashboardConfig::load_from_dir(dir.path()),
            Err(ConfigError::Parse(_))
        ));
    }
}
