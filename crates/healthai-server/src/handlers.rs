//! Route handlers. Each one parses, validates, and delegates to an engine.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use chrono::Utc;
use healthai_core::constants::{SERVICE_NAME, VERSION};
use healthai_core::models::{HealthAdvice, UrgencyAssessment};
use healthai_core::{HealthMetrics, RiskAssessment};
use tracing::info;

use crate::dto::{AdviceRequest, AnalyzeRequest, Endpoints, HealthStatus, ServiceInfo};
use crate::error::ApiError;
use crate::state::AppState;

pub const ROOT_PATH: &str = "/";
pub const HEALTH_PATH: &str = "/health";
pub const PREDICT_PATH: &str = "/predict-health-risk";
pub const ANALYZE_PATH: &str = "/analyze-health";
pub const ADVICE_PATH: &str = "/health-advice";

pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: format!("Welcome to {SERVICE_NAME}"),
        version: VERSION.to_string(),
        endpoints: Endpoints {
            health_check: HEALTH_PATH.to_string(),
            risk_prediction: PREDICT_PATH.to_string(),
            health_analysis: ANALYZE_PATH.to_string(),
            health_advice: ADVICE_PATH.to_string(),
        },
    })
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        message: format!("{SERVICE_NAME} is running"),
        service: SERVICE_NAME.to_string(),
        version: VERSION.to_string(),
        timestamp: Utc::now(),
    })
}

pub async fn predict_health_risk(
    State(state): State<AppState>,
    payload: Result<Json<HealthMetrics>, JsonRejection>,
) -> Result<Json<RiskAssessment>, ApiError> {
    let Json(metrics) = payload?;
    metrics.validate()?;
    let assessment = state.predictor.predict(&metrics)?;
    info!(
        risk_level = %assessment.risk_level,
        risk_score = assessment.risk_score,
        "health risk predicted"
    );
    Ok(Json(assessment))
}

pub async fn analyze_health(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<UrgencyAssessment>, ApiError> {
    let Json(request) = payload?;
    let input = request.into_input()?;
    let assessment = state.urgency.analyze(&input);
    info!(urgency = %assessment.urgency_level, "symptoms analyzed");
    Ok(Json(assessment))
}

pub async fn health_advice(
    State(state): State<AppState>,
    payload: Result<Json<AdviceRequest>, JsonRejection>,
) -> Result<Json<HealthAdvice>, ApiError> {
    let Json(request) = payload?;
    let input = request.into_input()?;
    let advice = state.advice.advise(&input);
    info!(urgency = %advice.urgency_level, "health advice generated");
    Ok(Json(advice))
}
