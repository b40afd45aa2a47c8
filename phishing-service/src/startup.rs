use crate::config::PhishingConfig;
use crate::handlers;
use crate::services::{DisabledAnalyst, OllamaAnalyst, PhishingScorer, PlaceholderScorer, ThreatAnalyst};
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    metrics_middleware, permissive_cors, request_id_middleware, REQUEST_ID_HEADER,
};
use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

/// Shared, read-only request state. The scorer and analyst are built once
/// at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: PhishingConfig,
    pub scorer: Arc<dyn PhishingScorer>,
    pub analyst: Arc<dyn ThreatAnalyst>,
}

impl AppState {
    pub fn from_config(config: PhishingConfig) -> Result<Self, AppError> {
        let analyst: Arc<dyn ThreatAnalyst> = if config.analyst.enabled {
            let analyst = OllamaAnalyst::new(&config.analyst).map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!("Failed to build analyst client: {}", e))
            })?;
            tracing::info!(
                base_url = %config.analyst.base_url,
                model = %config.analyst.model,
                "AI analyst enabled"
            );
            Arc::new(analyst)
        } else {
            tracing::info!("AI analyst disabled");
            Arc::new(DisabledAnalyst)
        };

        Ok(Self {
            config,
            scorer: Arc::new(PlaceholderScorer),
            analyst,
        })
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/predict", post(handlers::predict))
        .route("/analyze", post(handlers::analyze_email))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .with_state(state)
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .layer(permissive_cors())
}

pub struct Application {
    port: u16,
    server: Box<dyn Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    pub async fn build(config: PhishingConfig) -> Result<Self, AppError> {
        let state = AppState::from_config(config)?;
        Self::build_with_state(state).await
    }

    /// Bind and prepare the server around an already assembled state.
    pub async fn build_with_state(state: AppState) -> Result<Self, AppError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], state.config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(port, "Listening");

        let app = build_router(state);
        let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
