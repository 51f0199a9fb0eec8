use axum::{extract::State, http::HeaderMap, http::StatusCode, Json};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;
use crate::usage::{client_id, UsageStatus};

#[derive(Debug, Deserialize)]
pub struct UnlockRequest {
    pub code: String,
}

/// GET /api/v1/usage
pub async fn handle_usage_status(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<UsageStatus> {
    let client = client_id(&headers);
    Json(state.usage_gate.status(&client, Utc::now()).await)
}

/// POST /api/v1/usage/unlock
///
/// Clears the caller's cooldown when the operator unlock code matches.
pub async fn handle_unlock(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<UnlockRequest>,
) -> Result<StatusCode, AppError> {
    let expected = state
        .config
        .unlock_code
        .as_deref()
        .ok_or(AppError::Forbidden)?;
    if req.code != expected {
        return Err(AppError::Unauthorized);
    }

    let client = client_id(&headers);
    let cleared = state.usage_gate.reset(&client).await;
    info!(client = %client, cleared, "Usage cooldown unlocked");
    Ok(StatusCode::NO_CONTENT)
}
