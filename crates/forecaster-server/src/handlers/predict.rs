use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use forecaster_core::types::{PredictionRequest, PredictionResponse};

use crate::app_state::AppState;
use crate::error::ApiError;

/// Predict revenue from ad spend.
#[allow(clippy::missing_errors_doc)]
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictionRequest>, JsonRejection>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let Json(req) = payload?;

    let prediction = state.model.predict(&req)?;
    tracing::debug!(
        ad_spend = req.ad_spend,
        predicted_revenue = prediction.predicted_revenue,
        confidence_score = prediction.confidence_score,
        "prediction served"
    );

    Ok(Json(prediction))
}
