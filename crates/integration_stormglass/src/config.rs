//! StormGlass client configuration

use serde::{Deserialize, Serialize};

/// Configuration for the StormGlass forecast client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StormGlassConfig {
    /// StormGlass API base URL (default: <https://api.stormglass.io/v2>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Forecast model whose values are used (default: `noaa`)
    #[serde(default = "default_source")]
    pub source: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://api.stormglass.io/v2".to_string()
}

fn default_source() -> String {
    "noaa".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("stormglass-client/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for StormGlassConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            source: default_source(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl StormGlassConfig {
    /// Create a configuration pointing at a different API root
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// URL of the point-forecast endpoint
    #[must_use]
    pub fn point_url(&self) -> String {
        format!("{}/weather/point", self.base_url.trim_end_matches('/'))
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.source.is_empty() {
            return Err("source must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = StormGlassConfig::default();
        assert_eq!(config.base_url, "https://api.stormglass.io/v2");
        assert_eq!(config.source, "noaa");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.user_agent.starts_with("stormglass-client/"));
    }

    #[test]
    fn test_point_url() {
        let config = StormGlassConfig::default();
        assert_eq!(
            config.point_url(),
            "https://api.stormglass.io/v2/weather/point"
        );

        let config = StormGlassConfig::with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.point_url(), "http://127.0.0.1:8080/weather/point");
    }

    #[test]
    fn test_validation_success() {
        assert!(StormGlassConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validation_empty_base_url() {
        let config = StormGlassConfig {
            base_url: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_source() {
        let config = StormGlassConfig {
            source: String::new(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err("source must not be empty".to_string())
        );
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = StormGlassConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: StormGlassConfig =
            serde_json::from_str(r#"{"source": "sg"}"#).expect("should deserialize");
        assert_eq!(config.source, "sg");
        assert_eq!(config.base_url, "https://api.stormglass.io/v2");
        assert_eq!(config.timeout_secs, 30);
    }
}
