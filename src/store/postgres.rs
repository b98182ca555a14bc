// store/postgres.rs - sqlx-backed implementation of the record store

use async_trait::async_trait;
use sqlx::PgPool;

use super::{AccessRecord, AccessStore, StoreError};

/// Authorization record store backed by the user_access table.
#[derive(Clone)]
pub struct PgAccessStore {
    pool: PgPool,
}

impl PgAccessStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccessStore for PgAccessStore {
    async fn fetch_by_email(&self, email: &str) -> Result<Option<AccessRecord>, StoreError> {
        // email is unique by contract, but the contract lives in another
        // system; more than one row is treated as an error, not a pick.
        let rows = sqlx::query_as::<_, AccessRecord>(
            r#"
            SELECT email, status, subscription_plan
            FROM user_access
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;

        match rows.len() {
            0 => Ok(None),
            1 => Ok(rows.into_iter().next()),
            n => Err(StoreError::Ambiguous(n)),
        }
    }
}
