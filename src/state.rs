use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::AuthService;

/// Shared context handed to the router. Cheap to clone: the pool is
/// internally reference-counted and the auth service sits behind an Arc.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub auth: Arc<AuthService>,
}
