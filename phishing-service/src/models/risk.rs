use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

pub const DEFAULT_SUSPICIOUS_THRESHOLD: f64 = 0.4;
pub const DEFAULT_DANGEROUS_THRESHOLD: f64 = 0.75;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RiskLevel {
    Safe,
    Suspicious,
    Dangerous,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "Safe",
            RiskLevel::Suspicious => "Suspicious",
            RiskLevel::Dangerous => "Dangerous",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score bands. A score strictly above a threshold falls into that band.
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
#[validate(schema(function = "validate_band_order"))]
pub struct RiskThresholds {
    #[validate(range(min = 0.0, max = 1.0))]
    pub suspicious: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub dangerous: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            suspicious: DEFAULT_SUSPICIOUS_THRESHOLD,
            dangerous: DEFAULT_DANGEROUS_THRESHOLD,
        }
    }
}

impl RiskThresholds {
    pub fn classify(&self, score: f64) -> RiskLevel {
        if score > self.dangerous {
            RiskLevel::Dangerous
        } else if score > self.suspicious {
            RiskLevel::Suspicious
        } else {
            RiskLevel::Safe
        }
    }
}

fn validate_band_order(thresholds: &RiskThresholds) -> Result<(), ValidationError> {
    if thresholds.suspicious >= thresholds.dangerous {
        let mut err = ValidationError::new("threshold_order");
        err.message = Some("suspicious threshold must be below dangerous threshold".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_uses_strict_bounds() {
        let thresholds = RiskThresholds::default();

        assert_eq!(thresholds.classify(0.0), RiskLevel::Safe);
        assert_eq!(thresholds.classify(0.4), RiskLevel::Safe);
        assert_eq!(thresholds.classify(0.41), RiskLevel::Suspicious);
        assert_eq!(thresholds.classify(0.75), RiskLevel::Suspicious);
        assert_eq!(thresholds.classify(0.76), RiskLevel::Dangerous);
        assert_eq!(thresholds.classify(1.0), RiskLevel::Dangerous);
    }

    #[test]
    fn default_thresholds_are_valid() {
        assert!(RiskThresholds::default().validate().is_ok());
    }

    #[test]
    fn rejects_inverted_bands() {
        let thresholds = RiskThresholds {
            suspicious: 0.8,
            dangerous: 0.5,
        };
        assert!(thresholds.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let thresholds = RiskThresholds {
            suspicious: 0.4,
            dangerous: 1.5,
        };
        assert!(thresholds.validate().is_err());
    }

    #[test]
    fn serializes_with_capitalized_names() {
        let json = serde_json::to_string(&RiskLevel::Suspicious).unwrap();
        assert_eq!(json, "\"Suspicious\"");
    }
}
