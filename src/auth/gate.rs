// auth/gate.rs - authorization gate over the record store

use std::sync::Arc;
use std::time::Duration;

use crate::store::{AccessRecord, AccessStore};

use super::{AuthError, TokenValidator};

/// Decides allow/deny for an identity by looking up its authorization
/// record. One fresh lookup per call, bounded by a timeout; no caching and
/// no retries. The store client is injected so the gate owns no connection
/// state of its own.
pub struct AccessGate {
    store: Arc<dyn AccessStore>,
    lookup_timeout: Duration,
}

impl AccessGate {
    pub fn new(store: Arc<dyn AccessStore>, lookup_timeout: Duration) -> Self {
        Self {
            store,
            lookup_timeout,
        }
    }

    /// Allow iff a single record exists for this email with status
    /// "active". Timeout, store error, zero rows, ambiguous rows, and an
    /// inactive status all produce the same AccessDenied; only the logs
    /// know which one happened.
    pub async fn authorize(&self, email: &str) -> Result<AccessRecord, AuthError> {
        let lookup = tokio::time::timeout(self.lookup_timeout, self.store.fetch_by_email(email));

        let record = match lookup.await {
            Err(_) => {
                tracing::warn!(
                    "Access lookup for '{}' timed out after {:?}",
                    email,
                    self.lookup_timeout
                );
                return Err(AuthError::AccessDenied);
            }
            Ok(Err(err)) => {
                tracing::warn!("Access lookup for '{}' failed: {}", email, err);
                return Err(AuthError::AccessDenied);
            }
            Ok(Ok(None)) => {
                tracing::warn!("No authorization record for '{}'", email);
                return Err(AuthError::AccessDenied);
            }
            Ok(Ok(Some(record))) => record,
        };

        if !record.is_active() {
            tracing::warn!(
                "Authorization record for '{}' has status '{}', denying",
                email,
                record.status
            );
            return Err(AuthError::AccessDenied);
        }

        tracing::debug!("Access granted for '{}'", email);
        Ok(record)
    }
}

/// Composite request guard: token verification followed by the record
/// lookup. This is the unit the HTTP layer calls per request.
pub struct AuthService {
    validator: TokenValidator,
    gate: AccessGate,
}

impl AuthService {
    pub fn new(validator: TokenValidator, gate: AccessGate) -> Self {
        Self { validator, gate }
    }

    pub async fn check_access(&self, token: &str) -> Result<AccessRecord, AuthError> {
        let claims = self.validator.validate(token)?;
        self.gate.authorize(&claims.email).await
    }
}
