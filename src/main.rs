use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

use mandala_api::auth::gate::AccessGate;
use mandala_api::auth::{AuthService, TokenValidator};
use mandala_api::config::AppConfig;
use mandala_api::routes;
use mandala_api::state::AppState;
use mandala_api::store::postgres::PgAccessStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mandala_api=info,tower_http=info".into()),
        )
        .init();

    // Missing DATABASE_URL or JWT_SECRET is fatal: refuse to start rather
    // than run without a credential.
    let config = AppConfig::from_env()?;
    tracing::info!("Starting mandala-api in {:?} mode", config.environment);

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(Duration::from_secs(config.database.connect_timeout_secs))
        .connect(&config.database.url)
        .await?;

    let store = PgAccessStore::new(pool.clone());
    let auth = AuthService::new(
        TokenValidator::new(&config.security.jwt_secret),
        AccessGate::new(
            Arc::new(store),
            Duration::from_secs(config.security.access_lookup_timeout_secs),
        ),
    );

    let state = AppState {
        pool,
        auth: Arc::new(auth),
    };

    let app = routes::app(state, &config);

    let bind_addr = format!("0.0.0.0:{}", config.api.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("mandala-api listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
