// store/status.rs - status_checks table operations

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// A client liveness ping logged by the frontend.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct StatusCheck {
    pub id: Uuid,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            client_name: client_name.into(),
            timestamp: Utc::now(),
        }
    }
}

pub async fn insert(pool: &PgPool, check: &StatusCheck) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO status_checks (id, client_name, timestamp)
        VALUES ($1, $2, $3)
        "#,
    )
    .bind(check.id)
    .bind(&check.client_name)
    .bind(check.timestamp)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn list(pool: &PgPool) -> Result<Vec<StatusCheck>, sqlx::Error> {
    sqlx::query_as::<_, StatusCheck>(
        r#"
        SELECT id, client_name, timestamp
        FROM status_checks
        ORDER BY timestamp DESC
        LIMIT 1000
        "#,
    )
    .fetch_all(pool)
    .await
}
