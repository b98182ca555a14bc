// handlers/protected.rs - GET /api/protected

use axum::{extract::Extension, response::Json};
use serde_json::{json, Value};

use crate::store::AccessRecord;

/// GET /api/protected - reachable only through the access middleware, which
/// injects the caller's AccessRecord after a successful check.
pub async fn protected_get(Extension(record): Extension<AccessRecord>) -> Json<Value> {
    Json(json!({
        "message": format!("Hello, {}", record.email),
        "plan": record.subscription_plan,
    }))
}
