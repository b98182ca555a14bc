// store/mod.rs - record store abstraction for the access gate

pub mod postgres;

pub mod status;

use async_trait::async_trait;
use serde::Serialize;
use sqlx::FromRow;
use thiserror::Error;

/// One row per identity in the user_access table. Read-only from this
/// service; rows are maintained by an out-of-band administrative process.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AccessRecord {
    pub email: String,
    pub status: String,
    pub subscription_plan: Option<String>,
}

impl AccessRecord {
    /// Only "active" authorizes; every other value (or an absent row) denies.
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}

/// Errors a store implementation can report. These stay internal: the gate
/// collapses all of them into a uniform denial before anything reaches a
/// caller.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("db error: {0}")]
    Db(#[from] sqlx::Error),

    #[error("ambiguous result: {0} rows for one email")]
    Ambiguous(usize),
}

/// Fetch-at-most-one interface over the authorization record store.
/// Implemented by the Postgres store in production and by in-memory fakes
/// in tests.
#[async_trait]
pub trait AccessStore: Send + Sync {
    async fn fetch_by_email(&self, email: &str) -> Result<Option<AccessRecord>, StoreError>;
}
