// End-to-end properties of the composite access check (validate + authorize)
// against an in-memory record store.

mod common;

use std::time::Duration;

use mandala_api::auth::AuthError;

use common::{auth_service, auth_service_with_timeout, record, sign, token_for, MemoryStore};

#[tokio::test]
async fn foreign_secret_token_is_invalid() {
    let service = auth_service(MemoryStore::new(vec![record(
        "user@example.com",
        "active",
        "pro",
    )]));

    let token = sign("not-the-configured-secret", "user@example.com");
    assert_eq!(
        service.check_access(&token).await.unwrap_err(),
        AuthError::InvalidToken
    );
}

#[tokio::test]
async fn malformed_tokens_are_invalid() {
    let service = auth_service(MemoryStore::new(vec![]));

    for token in ["", "garbage", "a.b.c.d"] {
        assert_eq!(
            service.check_access(token).await.unwrap_err(),
            AuthError::InvalidToken,
            "token: {:?}",
            token
        );
    }
}

#[tokio::test]
async fn unknown_identity_is_denied() {
    let service = auth_service(MemoryStore::new(vec![]));

    assert_eq!(
        service
            .check_access(&token_for("user@example.com"))
            .await
            .unwrap_err(),
        AuthError::AccessDenied
    );
}

#[tokio::test]
async fn inactive_identity_is_denied() {
    let service = auth_service(MemoryStore::new(vec![record(
        "user@example.com",
        "inactive",
        "pro",
    )]));

    assert_eq!(
        service
            .check_access(&token_for("user@example.com"))
            .await
            .unwrap_err(),
        AuthError::AccessDenied
    );
}

#[tokio::test]
async fn active_identity_gets_its_record_back() {
    let service = auth_service(MemoryStore::new(vec![record(
        "user@example.com",
        "active",
        "pro",
    )]));

    let rec = service
        .check_access(&token_for("user@example.com"))
        .await
        .unwrap();
    assert_eq!(rec.email, "user@example.com");
    assert_eq!(rec.status, "active");
    assert_eq!(rec.subscription_plan.as_deref(), Some("pro"));
}

#[tokio::test]
async fn repeated_checks_agree() {
    let service = auth_service(MemoryStore::new(vec![record(
        "user@example.com",
        "active",
        "pro",
    )]));
    let token = token_for("user@example.com");

    let first = service.check_access(&token).await.unwrap();
    let second = service.check_access(&token).await.unwrap();
    assert_eq!(first.email, second.email);
    assert_eq!(first.subscription_plan, second.subscription_plan);
}

#[tokio::test(start_paused = true)]
async fn slow_store_resolves_to_denial() {
    let mut store = MemoryStore::new(vec![record("user@example.com", "active", "pro")]);
    store.delay = Some(Duration::from_secs(60));
    let service = auth_service_with_timeout(store, Duration::from_secs(5));

    assert_eq!(
        service
            .check_access(&token_for("user@example.com"))
            .await
            .unwrap_err(),
        AuthError::AccessDenied
    );
}

#[tokio::test]
async fn concurrent_checks_resolve_independently() {
    let service = auth_service(MemoryStore::new(vec![
        record("alice@example.com", "active", "pro"),
        record("bob@example.com", "active", "basic"),
        record("carol@example.com", "inactive", "pro"),
        // dave has no record at all
    ]));

    let emails = [
        "alice@example.com",
        "bob@example.com",
        "carol@example.com",
        "dave@example.com",
    ];

    let tokens: Vec<String> = emails.iter().map(|email| token_for(email)).collect();
    let results =
        futures::future::join_all(tokens.iter().map(|token| service.check_access(token))).await;

    let alice = results[0].as_ref().unwrap();
    assert_eq!(alice.email, "alice@example.com");
    assert_eq!(alice.subscription_plan.as_deref(), Some("pro"));

    let bob = results[1].as_ref().unwrap();
    assert_eq!(bob.email, "bob@example.com");
    assert_eq!(bob.subscription_plan.as_deref(), Some("basic"));

    assert_eq!(*results[2].as_ref().unwrap_err(), AuthError::AccessDenied);
    assert_eq!(*results[3].as_ref().unwrap_err(), AuthError::AccessDenied);
}
