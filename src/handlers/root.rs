// handlers/root.rs - GET /api/ liveness handler

use axum::response::Json;
use serde_json::{json, Value};

/// GET /api/ - basic liveness probe used by the frontend and deploy checks
pub async fn root_get() -> Json<Value> {
    Json(json!({ "message": "OK" }))
}
