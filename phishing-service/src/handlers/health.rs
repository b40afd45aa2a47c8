use crate::dtos::HealthResponse;
use axum::{http::StatusCode, Json};

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

pub async fn readiness_check() -> StatusCode {
    StatusCode::OK
}
