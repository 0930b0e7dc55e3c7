use super::types::{PredictionRequest, PredictionResponse, STATUS_MESSAGE, StatusResponse};
use crate::{Result, inference::{InferenceClient, normalize}};
use axum::{
    body::{Body, to_bytes},
    extract::{Request, State},
    http::{Method, StatusCode, header},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{debug, error, info};

#[derive(Clone)]
pub struct AppState {
    pub inference: Arc<dyn InferenceClient>,
    /// Upper bound for a buffered POST body; `None` reads bodies of any size.
    pub max_body_bytes: Option<usize>,
}

/// Single entry point for `/`; dispatches on the request method.
/// Only POST bodies are ever read.
pub async fn handle(State(state): State<AppState>, request: Request) -> Response {
    let method = request.method().clone();

    match method {
        Method::GET => status().into_response(),
        Method::POST => predict(&state, request.into_body()).await,
        _ => (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed").into_response(),
    }
}

fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: STATUS_MESSAGE.to_string(),
    })
}

async fn predict(state: &AppState, body: Body) -> Response {
    match run_prediction(state, body).await {
        Ok(response) => (
            StatusCode::OK,
            [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
            Json(response),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to process prediction request: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(PredictionResponse::failure(&e)),
            )
                .into_response()
        }
    }
}

async fn run_prediction(state: &AppState, body: Body) -> Result<PredictionResponse> {
    let body = to_bytes(body, state.max_body_bytes.unwrap_or(usize::MAX)).await?;

    let request = PredictionRequest::from_body(&body)?;
    info!("Received sequence: {}", request.sequence);

    let raw = state.inference.predict(&request.sequence).await?;
    debug!("Inference raw result: {}", raw);

    let predictions = normalize(raw)?;
    info!("Returning {} predictions", predictions.len());

    Ok(PredictionResponse::success(request.sequence, predictions))
}
