//! Rating handlers

use axum::{extract::State, Json};
use validator::Validate;

use crate::{AppState, error::ApiError};
use crate::dto::rating::{QuoteResponse, RatingRequest, ScoreResponse};

/// Computes a premium quote (with companion safety score) for one driver
pub async fn create_quote(
    State(state): State<AppState>,
    Json(request): Json<RatingRequest>,
) -> Result<Json<QuoteResponse>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let record = request.into_record()?;
    let quote = state.engine.quote_premium(&record);
    let score = state.engine.safety_score(&record);

    tracing::info!(
        driver_id = %record.driver_id(),
        premium = %quote.calculated_premium,
        score = score.value(),
        "Quote issued"
    );

    Ok(Json(QuoteResponse::from_outputs(quote, score)))
}

/// Computes the safety score only
pub async fn compute_score(
    State(state): State<AppState>,
    Json(request): Json<RatingRequest>,
) -> Result<Json<ScoreResponse>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let record = request.into_record()?;
    let score = state.engine.safety_score(&record);

    Ok(Json(ScoreResponse::from_output(record.driver_id(), score)))
}
