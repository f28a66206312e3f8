// tests/session_lifecycle.rs
use std::sync::Arc;

use chirpy::application::error::{ApplicationError, SessionError};
use chirpy::domain::user::{Email, NewUser, PasswordHash, UserId, UserRepository};
use chrono::Duration;

mod support;

use support::{
    InMemoryStore, LosingRevokeStore, SequentialRefreshTokens, TestClock, fixed_now,
    session_service,
};
use chirpy::application::commands::sessions::SessionCommandService;

async fn seed_user(store: &InMemoryStore) -> UserId {
    let user = UserRepository::insert(
        store,
        NewUser::new(
            Email::new("walt@breakingbad.com").unwrap(),
            PasswordHash::new("plain$letmein").unwrap(),
            fixed_now(),
        ),
    )
    .await
    .unwrap();
    user.id
}

fn session_error(err: ApplicationError) -> SessionError {
    match err {
        ApplicationError::Session(inner) => inner,
        other => panic!("expected a session error, got {other:?}"),
    }
}

#[tokio::test]
async fn issued_refresh_token_is_hex_and_expires_in_sixty_days() {
    let store = Arc::new(InMemoryStore::new());
    let clock = Arc::new(TestClock::new());
    let user_id = seed_user(&store).await;
    let sessions = session_service(Arc::clone(&store), Arc::clone(&clock));

    let issued = sessions.issue_for_user(user_id).await.unwrap();
    assert_eq!(issued.token.len(), 64);
    assert!(issued.token.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(issued.expires_at, fixed_now() + Duration::days(60));

    let stored = store.refresh_token(&issued.token).unwrap();
    assert_eq!(stored.user_id, user_id);
    assert!(stored.revoked_at.is_none());
}

#[tokio::test]
async fn redeem_returns_access_token_and_keeps_refresh_token_valid() {
    let store = Arc::new(InMemoryStore::new());
    let clock = Arc::new(TestClock::new());
    let user_id = seed_user(&store).await;
    let sessions = session_service(Arc::clone(&store), Arc::clone(&clock));
    let issued = sessions.issue_for_user(user_id).await.unwrap();

    let first = sessions.redeem(&issued.token).await.unwrap();
    clock.advance(Duration::minutes(5));
    let second = sessions.redeem(&issued.token).await.unwrap();

    assert_eq!(first.expires_in, 3600);
    assert_ne!(first.token, second.token);
    let manager = support::token_manager(Arc::clone(&clock));
    let subject = manager
        .codec()
        .validate(&second.token, support::TEST_SECRET)
        .unwrap();
    assert_eq!(subject, user_id);
}

#[tokio::test]
async fn revoke_twice_reports_already_revoked() {
    let store = Arc::new(InMemoryStore::new());
    let clock = Arc::new(TestClock::new());
    let user_id = seed_user(&store).await;
    let sessions = session_service(Arc::clone(&store), Arc::clone(&clock));
    let issued = sessions.issue_for_user(user_id).await.unwrap();

    sessions.revoke(&issued.token).await.unwrap();
    let revoked_at = store.refresh_token(&issued.token).unwrap().revoked_at;
    assert_eq!(revoked_at, Some(fixed_now()));

    clock.advance(Duration::seconds(30));
    let err = sessions.revoke(&issued.token).await.unwrap_err();
    assert_eq!(session_error(err), SessionError::AlreadyRevoked);

    // The first revocation timestamp is kept.
    assert_eq!(
        store.refresh_token(&issued.token).unwrap().revoked_at,
        revoked_at
    );
}

#[tokio::test]
async fn revoked_token_cannot_be_redeemed_even_before_expiry() {
    let store = Arc::new(InMemoryStore::new());
    let clock = Arc::new(TestClock::new());
    let user_id = seed_user(&store).await;
    let sessions = session_service(Arc::clone(&store), Arc::clone(&clock));
    let issued = sessions.issue_for_user(user_id).await.unwrap();

    sessions.revoke(&issued.token).await.unwrap();
    let err = sessions.redeem(&issued.token).await.unwrap_err();
    assert_eq!(session_error(err), SessionError::Revoked);
}

#[tokio::test]
async fn refresh_token_expires_at_its_deadline() {
    let store = Arc::new(InMemoryStore::new());
    let clock = Arc::new(TestClock::new());
    let user_id = seed_user(&store).await;
    let sessions = session_service(Arc::clone(&store), Arc::clone(&clock));
    let issued = sessions.issue_for_user(user_id).await.unwrap();

    clock.advance(Duration::days(60) - Duration::milliseconds(1));
    assert!(sessions.redeem(&issued.token).await.is_ok());

    clock.advance(Duration::milliseconds(1));
    let err = sessions.redeem(&issued.token).await.unwrap_err();
    assert_eq!(session_error(err), SessionError::Expired);
}

#[tokio::test]
async fn unknown_tokens_are_not_found() {
    let store = Arc::new(InMemoryStore::new());
    let clock = Arc::new(TestClock::new());
    let sessions = session_service(Arc::clone(&store), clock);

    let err = sessions.redeem("deadbeef").await.unwrap_err();
    assert_eq!(session_error(err), SessionError::NotFound);
    let err = sessions.revoke("deadbeef").await.unwrap_err();
    assert_eq!(session_error(err), SessionError::NotFound);
}

#[tokio::test]
async fn redeem_for_a_vanished_user_is_not_found() {
    let store = Arc::new(InMemoryStore::new());
    let clock = Arc::new(TestClock::new());
    let user_id = seed_user(&store).await;
    let sessions = session_service(Arc::clone(&store), Arc::clone(&clock));
    let issued = sessions.issue_for_user(user_id).await.unwrap();

    store.forget_user(user_id);

    let err = sessions.redeem(&issued.token).await.unwrap_err();
    assert_eq!(session_error(err), SessionError::NotFound);
}

#[tokio::test]
async fn losing_a_concurrent_revoke_reports_already_revoked() {
    let store = Arc::new(InMemoryStore::new());
    let clock = Arc::new(TestClock::new());
    let user_id = seed_user(&store).await;
    let issued = session_service(Arc::clone(&store), Arc::clone(&clock))
        .issue_for_user(user_id)
        .await
        .unwrap();

    let racing = SessionCommandService::new(
        Arc::new(LosingRevokeStore::new(Arc::clone(&store))),
        Arc::clone(&store) as _,
        support::token_manager(Arc::clone(&clock)),
        Arc::new(SequentialRefreshTokens::default()),
        clock,
    );

    let err = racing.revoke(&issued.token).await.unwrap_err();
    assert_eq!(session_error(err), SessionError::AlreadyRevoked);
    assert!(store.refresh_token(&issued.token).unwrap().revoked_at.is_some());
}

#[tokio::test]
async fn overflowing_refresh_lifetime_is_an_error_not_a_panic() {
    let store = Arc::new(InMemoryStore::new());
    let clock = Arc::new(TestClock::new());
    let user_id = seed_user(&store).await;
    let sessions = session_service(Arc::clone(&store), clock)
        .with_refresh_ttl(Duration::days(1_000_000_000));

    let err = sessions.issue_for_user(user_id).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Infrastructure(_)), "{err:?}");
    assert_eq!(store.refresh_token_count(), 0);
}
