use crate::api::error::{ApiError, ApiResult};
use crate::api::types::*;
use crate::config::SERVICE_NAME;
use crate::metrics::metrics_route;
use crate::relay::{RelayHandler, TelemetrySubmission};
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tracing::warn;

pub struct RestApi {
    handler: Arc<RelayHandler>,
}

impl RestApi {
    pub fn new(handler: RelayHandler) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(service_info))
            .route("/health", get(health_check))
            .route("/api/reading", post(submit_reading))
            .route("/metrics", metrics_route())
            .with_state(self.handler.clone())
    }
}

async fn service_info() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        status: "online".to_string(),
        service: SERVICE_NAME.to_string(),
        timestamp: crate::relay::types::now_timestamp(),
    })
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

async fn submit_reading(
    State(handler): State<Arc<RelayHandler>>,
    payload: Result<Json<TelemetrySubmission>, JsonRejection>,
) -> ApiResult<Json<BridgeResponse>> {
    let Json(submission) = payload.map_err(|rejection| {
        warn!("Unreadable submission body: {}", rejection.body_text());
        ApiError::InvalidRequest(rejection.body_text())
    })?;

    let receipt = handler.handle_submission(submission).await?;

    Ok(Json(BridgeResponse::stored(receipt.reading_id)))
}
