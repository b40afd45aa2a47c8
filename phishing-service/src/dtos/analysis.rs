use super::email::serialize_score;
use crate::models::RiskLevel;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    #[serde(serialize_with = "serialize_score")]
    pub score: f64,
    pub risk_level: RiskLevel,
    pub ai_analysis: String,
    pub timestamp: DateTime<Utc>,
}
