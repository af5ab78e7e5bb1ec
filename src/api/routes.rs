//! API route handlers
//!
//! Handlers stay thin: explicit validation of the request, one storage call,
//! JSON out. Errors convert to responses via [`ApiError`].

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Local;
use serde::Deserialize;
use tracing::info;

use super::SharedDb;
use crate::error::ApiError;
use crate::vote::VoteType;

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    "OK"
}

/// GET /api/facts/today
pub async fn fact_of_the_day(State(db): State<SharedDb>) -> Result<impl IntoResponse, ApiError> {
    let today = Local::now().date_naive();

    match db.get_fact_of_the_day(today)? {
        Some(fact) => Ok(Json(fact)),
        None => Err(ApiError::NotFound(
            "No facts found. Please seed the database.".to_string(),
        )),
    }
}

/// Vote submission body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVoteRequest {
    pub fact_id: i64,
    pub vote_type: String,
}

/// Check a vote submission against the closed reaction set.
///
/// Returns the parsed vote type or a validation error naming the offending
/// field; nothing is written on failure.
pub fn validate_vote(req: &CreateVoteRequest) -> Result<VoteType, ApiError> {
    if req.fact_id <= 0 {
        return Err(ApiError::invalid_field("Invalid fact id", "factId"));
    }

    VoteType::parse(&req.vote_type)
        .ok_or_else(|| ApiError::invalid_field("Invalid vote type", "voteType"))
}

/// POST /api/votes
pub async fn create_vote(
    State(db): State<SharedDb>,
    body: Result<Json<CreateVoteRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = body.map_err(|e| ApiError::invalid(e.body_text()))?;
    let vote_type = validate_vote(&req)?;

    let outcome = db.create_vote(req.fact_id, vote_type)?;
    info!(
        fact_id = req.fact_id,
        vote_type = vote_type.as_str(),
        total_votes = outcome.total_votes,
        "Vote accepted"
    );

    Ok((StatusCode::CREATED, Json(outcome)))
}
