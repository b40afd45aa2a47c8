//! Plain-language threat explanations from a local LLM.
//!
//! The analyst is advisory: callers fall back to [`ANALYSIS_UNAVAILABLE`]
//! whenever it fails, so an LLM outage never fails a request.

use crate::config::AnalystConfig;
use crate::dtos::EmailData;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use service_core::observability::traced_headers;
use std::time::Duration;
use thiserror::Error;

/// Text returned in place of an explanation when the analyst fails.
pub const ANALYSIS_UNAVAILABLE: &str =
    "AI analysis unavailable. Please ensure the local AI service is running.";

#[derive(Error, Debug)]
pub enum AnalystError {
    #[error("Analyst is disabled")]
    Disabled,

    #[error("Analyst returned status {0}")]
    Unavailable(StatusCode),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

#[async_trait]
pub trait ThreatAnalyst: Send + Sync {
    /// Explain the risk of `email` given its phishing `score`.
    async fn explain(&self, email: &EmailData, score: f64) -> Result<String, AnalystError>;
}

/// Build the analysis prompt sent to the LLM.
pub fn build_prompt(email: &EmailData, score: f64) -> String {
    format!(
        "You are a cybersecurity expert assistant.\n\
         Analyze this email and the phishing score (0-1, where 1 is high risk).\n\
         \n\
         Phishing Score: {score:.2}\n\
         \n\
         Email:\n\
         From: {sender}\n\
         Subject: {subject}\n\
         Body: {content}\n\
         \n\
         Provide a concise, user-friendly explanation of the risk.\n\
         If the score is high, explain why (e.g., suspicious sender, urgency).\n\
         If low, check again if it looks safe by measuring suspicious metrics \
         (sender address way too long, many URLs, emotional manipulation, etc.)\n\
         Do not use markdown formatting.\n",
        score = score,
        sender = email.sender,
        subject = email.subject,
        content = email.content,
    )
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Ollama `/api/generate` client.
pub struct OllamaAnalyst {
    base_url: String,
    model: String,
    client: Client,
}

impl OllamaAnalyst {
    pub fn new(config: &AnalystConfig) -> Result<Self, AnalystError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            client,
        })
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }
}

#[async_trait]
impl ThreatAnalyst for OllamaAnalyst {
    async fn explain(&self, email: &EmailData, score: f64) -> Result<String, AnalystError> {
        let prompt = build_prompt(email, score);
        let url = self.generate_url();

        tracing::debug!(url = %url, model = %self.model, "Sending analysis prompt");

        let response = self
            .client
            .post(&url)
            .headers(traced_headers())
            .json(&GenerateRequest {
                model: &self.model,
                prompt: &prompt,
                stream: false,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalystError::Unavailable(status));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AnalystError::MalformedResponse(e.to_string()))?;

        tracing::info!(chars = body.response.len(), "LLM response received");
        Ok(body.response)
    }
}

/// Analyst used when `ANALYST_ENABLED=false`; always fails with [`AnalystError::Disabled`].
pub struct DisabledAnalyst;

#[async_trait]
impl ThreatAnalyst for DisabledAnalyst {
    async fn explain(&self, _email: &EmailData, _score: f64) -> Result<String, AnalystError> {
        Err(AnalystError::Disabled)
    }
}
