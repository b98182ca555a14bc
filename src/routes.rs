// routes.rs - router assembly and global middleware

use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::handlers;
use crate::middleware::require_access;
use crate::state::AppState;

pub fn app(state: AppState, config: &AppConfig) -> Router {
    // Only /protected sits behind the access guard; everything else is
    // public surface for the frontend
    let protected = Router::new()
        .route("/protected", get(handlers::protected::protected_get))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_access,
        ));

    let api = Router::new()
        .route("/", get(handlers::root::root_get))
        .route(
            "/status",
            get(handlers::status::status_get).post(handlers::status::status_post),
        )
        .route(
            "/user-status/:email",
            get(handlers::user_status::user_status_get),
        )
        .merge(protected);

    // nest() matches the inner "/" at /api only; the frontend probes the
    // trailing-slash form, so register that one explicitly
    Router::new()
        .route("/api/", get(handlers::root::root_get))
        .nest("/api", api)
        .layer(cors_layer(&config.security.cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Explicit origin allow-list; credentials are allowed so the wildcard
/// forms are off the table.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring malformed CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}
