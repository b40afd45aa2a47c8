use crate::models::risk::{
    RiskThresholds, DEFAULT_DANGEROUS_THRESHOLD, DEFAULT_SUSPICIOUS_THRESHOLD,
};
use serde::Deserialize;
use service_core::config::{self as core_config, get_env, parse_env};
use service_core::error::AppError;
use std::env;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PhishingConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    #[validate(length(min = 1))]
    pub service_name: String,
    pub log_level: String,
    /// OTLP collector; spans are exported only when set.
    pub otlp_endpoint: Option<String>,
    #[validate(nested)]
    pub risk: RiskThresholds,
    #[validate(nested)]
    pub analyst: AnalystConfig,
}

/// Local LLM used to explain scores in `/analyze`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AnalystConfig {
    pub enabled: bool,
    #[validate(url)]
    pub base_url: String,
    #[validate(length(min = 1))]
    pub model: String,
    #[validate(range(min = 1))]
    pub timeout_seconds: u64,
}

impl PhishingConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let common_config = core_config::Config::load()?;
        let is_prod = core_config::is_production();

        let config = PhishingConfig {
            common: common_config,
            service_name: get_env("SERVICE_NAME", Some("phishing-service"), false)?,
            log_level: get_env("LOG_LEVEL", Some("info"), false)?,
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|s| !s.is_empty()),
            risk: RiskThresholds {
                suspicious: parse_env(
                    "RISK_SUSPICIOUS_THRESHOLD",
                    Some(&DEFAULT_SUSPICIOUS_THRESHOLD.to_string()),
                    false,
                )?,
                dangerous: parse_env(
                    "RISK_DANGEROUS_THRESHOLD",
                    Some(&DEFAULT_DANGEROUS_THRESHOLD.to_string()),
                    false,
                )?,
            },
            analyst: AnalystConfig {
                enabled: parse_env("ANALYST_ENABLED", Some("true"), false)?,
                base_url: get_env("ANALYST_BASE_URL", Some("http://localhost:11434"), is_prod)?,
                model: get_env("ANALYST_MODEL", Some("smollm2"), false)?,
                timeout_seconds: parse_env("ANALYST_TIMEOUT_SECONDS", Some("60"), false)?,
            },
        };

        config.validate().map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!("Invalid configuration: {}", e))
        })?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PhishingConfig {
        PhishingConfig {
            common: core_config::Config::default(),
            service_name: "phishing-service".to_string(),
            log_level: "info".to_string(),
            otlp_endpoint: None,
            risk: RiskThresholds::default(),
            analyst: AnalystConfig {
                enabled: true,
                base_url: "http://localhost:11434".to_string(),
                model: "smollm2".to_string(),
                timeout_seconds: 60,
            },
        }
    }

    #[test]
    fn defaults_pass_validation() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn rejects_non_url_analyst_endpoint() {
        let mut config = sample();
        config.analyst.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_timeout() {
        let mut config = sample();
        config.analyst.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn nested_threshold_errors_surface() {
        let mut config = sample();
        config.risk.suspicious = 0.9;
        assert!(config.validate().is_err());
    }
}
