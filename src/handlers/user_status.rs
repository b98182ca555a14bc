// handlers/user_status.rs - GET /api/user-status/:email

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::{json, Value};
use tracing::warn;

use crate::state::AppState;

/// GET /api/user-status/:email - surface a user's access status to the
/// frontend. Deliberately soft: a missing row or a store failure both come
/// back as {"status": "none"} rather than an error response, because the
/// frontend only uses this to pick which screen to render.
pub async fn user_status_get(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Json<Value> {
    let status: Result<Option<String>, sqlx::Error> =
        sqlx::query_scalar("SELECT status FROM user_access WHERE email = $1")
            .bind(&email)
            .fetch_optional(&state.pool)
            .await;

    let status = match status {
        Ok(Some(s)) => s,
        Ok(None) => "none".to_string(),
        Err(e) => {
            warn!("user-status lookup failed: {}", e);
            "none".to_string()
        }
    };

    Json(json!({ "status": status }))
}
