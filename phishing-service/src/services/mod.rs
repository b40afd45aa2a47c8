pub mod analyst;
pub mod metrics;
pub mod scorer;

pub use analyst::{
    build_prompt, AnalystError, DisabledAnalyst, OllamaAnalyst, ThreatAnalyst, ANALYSIS_UNAVAILABLE,
};
pub use metrics::{get_metrics, init_metrics};
pub use scorer::{PhishingScorer, PlaceholderScorer};
