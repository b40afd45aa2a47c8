use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::header::CONTENT_TYPE,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor whose rejections are reported as 422 validation errors.
///
/// Axum answers syntax errors with 400 and a wrong content type with 415;
/// every malformed body is a validation failure here, whatever the cause.
/// A body sent without any `Content-Type` is still parsed as JSON.
pub struct Payload<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !req.headers().contains_key(CONTENT_TYPE) {
            let body = Bytes::from_request(req, state)
                .await
                .map_err(|e| AppError::ValidationError(e.body_text()))?;

            let value = serde_json::from_slice(&body).map_err(|e| {
                tracing::debug!(error = %e, "Rejected request body without content type");
                AppError::ValidationError(e.to_string())
            })?;

            return Ok(Payload(value));
        }

        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e: JsonRejection| {
                tracing::debug!(status = %e.status(), error = %e.body_text(), "Rejected request body");
                AppError::ValidationError(e.body_text())
            })?;

        Ok(Payload(value))
    }
}
