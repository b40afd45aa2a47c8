use crate::dtos::{EmailData, ScoreResponse};
use crate::services::metrics::record_prediction;
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::utils::Payload;

pub async fn predict(
    State(state): State<AppState>,
    Payload(email): Payload<EmailData>,
) -> Json<ScoreResponse> {
    let score = state.scorer.score(&email);
    record_prediction(state.scorer.name(), score);

    tracing::debug!(scorer = state.scorer.name(), score, urls = email.urls, "Scored email");

    Json(ScoreResponse { score })
}
