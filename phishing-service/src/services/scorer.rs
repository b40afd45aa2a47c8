//! Phishing score providers.
//!
//! A scorer is built once at startup and shared read-only across requests.

use crate::dtos::EmailData;

/// Produces a phishing likelihood in `[0, 1]` for an email.
pub trait PhishingScorer: Send + Sync {
    /// Short identifier used in logs and metric labels.
    fn name(&self) -> &'static str;

    fn score(&self, email: &EmailData) -> f64;
}

/// Stand-in until a trained model is wired in: every email scores `0`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderScorer;

impl PhishingScorer for PlaceholderScorer {
    fn name(&self) -> &'static str {
        "placeholder"
    }

    fn score(&self, _email: &EmailData) -> f64 {
        0.0
    }
}
