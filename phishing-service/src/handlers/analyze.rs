use crate::dtos::{AnalysisResponse, EmailData};
use crate::services::metrics::{record_analysis, record_prediction};
use crate::services::ANALYSIS_UNAVAILABLE;
use crate::startup::AppState;
use axum::{extract::State, Json};
use chrono::Utc;
use service_core::utils::Payload;

/// Score an email, ask the analyst to explain it and classify the risk.
pub async fn analyze_email(
    State(state): State<AppState>,
    Payload(email): Payload<EmailData>,
) -> Json<AnalysisResponse> {
    tracing::info!(sender = %email.sender, "Starting analysis");

    let score = state.scorer.score(&email);
    record_prediction(state.scorer.name(), score);
    tracing::info!(scorer = state.scorer.name(), score, "Quantitative analysis done");

    let (ai_analysis, fallback) = match state.analyst.explain(&email, score).await {
        Ok(text) => (text, false),
        Err(e) => {
            tracing::warn!(error = %e, "AI analysis failed, using fallback text");
            (ANALYSIS_UNAVAILABLE.to_string(), true)
        }
    };

    let risk_level = state.config.risk.classify(score);
    record_analysis(risk_level, fallback);
    tracing::info!(risk_level = %risk_level, score = %format!("{:.4}", score), "Analysis complete");

    Json(AnalysisResponse {
        score,
        risk_level,
        ai_analysis,
        timestamp: Utc::now(),
    })
}
