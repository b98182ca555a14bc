// handlers/status.rs - status_checks CRUD glue

use axum::{extract::State, response::Json};
use serde::Deserialize;
use tracing::error;

use crate::error::ApiError;
use crate::state::AppState;
use crate::store::status::{self, StatusCheck};

#[derive(Debug, Deserialize)]
pub struct StatusCheckCreate {
    pub client_name: String,
}

/// POST /api/status - log a status check from a client and echo it back
pub async fn status_post(
    State(state): State<AppState>,
    Json(input): Json<StatusCheckCreate>,
) -> Result<Json<StatusCheck>, ApiError> {
    if input.client_name.trim().is_empty() {
        return Err(ApiError::bad_request("client_name must not be empty"));
    }

    let check = StatusCheck::new(input.client_name);

    status::insert(&state.pool, &check).await.map_err(|e| {
        // Don't take the server down over a failed insert; report and move on
        error!("Failed to save status check: {}", e);
        ApiError::internal_server_error("Failed to save status check")
    })?;

    Ok(Json(check))
}

/// GET /api/status - list recent status checks, newest first
pub async fn status_get(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusCheck>>, ApiError> {
    let checks = status::list(&state.pool).await?;
    Ok(Json(checks))
}
