use serde::{Deserialize, Serialize, Serializer};

/// Email description submitted for scoring. Lives for a single request.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailData {
    pub sender: String,
    pub subject: String,
    pub content: String,
    /// Number of URLs found in the message, as counted by the caller.
    #[serde(default)]
    pub urls: i64,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    #[serde(serialize_with = "serialize_score")]
    pub score: f64,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model_loaded: bool,
}

impl HealthResponse {
    pub fn ok() -> Self {
        // Constant until a real model exists; the placeholder scorer never loads one.
        Self {
            status: "ok",
            model_loaded: true,
        }
    }
}

/// Integral scores go out as JSON integers (`0`, not `0.0`), others as floats.
pub(crate) fn serialize_score<S: Serializer>(score: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if score.is_finite() && score.fract() == 0.0 && score.abs() <= i64::MAX as f64 {
        serializer.serialize_i64(*score as i64)
    } else {
        serializer.serialize_f64(*score)
    }
}
