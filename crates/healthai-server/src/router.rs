//! Router assembly and the serve loop.

use std::future::Future;

use axum::extract::Request;
use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use healthai_core::{HealthAiConfig, HealthAiError, HealthAiResult};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::handlers::{self, ADVICE_PATH, ANALYZE_PATH, HEALTH_PATH, PREDICT_PATH, ROOT_PATH};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request| {
        healthai_core::request_span!(request.method(), request.uri().path())
    });

    Router::new()
        .route(ROOT_PATH, get(handlers::root))
        .route(HEALTH_PATH, get(handlers::health))
        .route(PREDICT_PATH, post(handlers::predict_health_risk))
        .route(ANALYZE_PATH, post(handlers::analyze_health))
        .route(ADVICE_PATH, post(handlers::health_advice))
        .layer(trace)
        .layer(cors)
        .with_state(state)
}

/// Serve on an already-bound listener until `shutdown` resolves.
pub async fn run<F>(listener: TcpListener, state: AppState, shutdown: F) -> HealthAiResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| HealthAiError::Server {
            reason: e.to_string(),
        })
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(config: &HealthAiConfig) -> HealthAiResult<()> {
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| HealthAiError::Server {
            reason: format!("failed to bind {addr}: {e}"),
        })?;
    info!(%addr, "healthai-server listening");

    run(listener, AppState::from_config(config), shutdown_signal()).await?;
    info!("healthai-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => {
            // Without a signal handler the server runs until killed.
            warn!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    }
}
