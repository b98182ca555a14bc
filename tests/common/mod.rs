// Shared fixtures: an in-memory record store and token signing helpers.
// Tests run fully in-process; no database or live server is required.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;

use mandala_api::auth::{AccessGate, AuthService, TokenValidator};
use mandala_api::store::{AccessRecord, AccessStore, StoreError};

pub const SECRET: &str = "integration-test-secret";

pub struct MemoryStore {
    records: HashMap<String, AccessRecord>,
    pub delay: Option<Duration>,
}

impl MemoryStore {
    pub fn new(records: Vec<AccessRecord>) -> Self {
        Self {
            records: records.into_iter().map(|r| (r.email.clone(), r)).collect(),
            delay: None,
        }
    }
}

#[async_trait]
impl AccessStore for MemoryStore {
    async fn fetch_by_email(&self, email: &str) -> Result<Option<AccessRecord>, StoreError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.records.get(email).cloned())
    }
}

pub fn record(email: &str, status: &str, plan: &str) -> AccessRecord {
    AccessRecord {
        email: email.to_string(),
        status: status.to_string(),
        subscription_plan: Some(plan.to_string()),
    }
}

/// Sign a token the way the identity provider would: HS256, email + exp.
pub fn token_for(email: &str) -> String {
    sign(SECRET, email)
}

pub fn sign(secret: &str, email: &str) -> String {
    let claims = json!({
        "email": email,
        "exp": chrono::Utc::now().timestamp() + 3600,
    });
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("failed to sign test token")
}

pub fn auth_service(store: MemoryStore) -> AuthService {
    auth_service_with_timeout(store, Duration::from_secs(5))
}

pub fn auth_service_with_timeout(store: MemoryStore, lookup_timeout: Duration) -> AuthService {
    AuthService::new(
        TokenValidator::new(SECRET),
        AccessGate::new(Arc::new(store), lookup_timeout),
    )
}
