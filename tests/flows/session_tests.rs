//! Session Flow Tests
//!
//! Registration, login and refresh rotation through the wired core.

use chat_core::application::dto::{GuestLoginCommand, MemberLoginCommand, RegisterMemberCommand};
use chat_core::domain::services::{PrincipalKind, TokenIssuer, TokenVerdict};

use crate::common::{test_application, unique_username, TEST_PASSWORD};

fn register_command(username: &str, nickname: &str) -> RegisterMemberCommand {
    RegisterMemberCommand {
        username: username.to_string(),
        nickname: nickname.to_string(),
        password: Some(TEST_PASSWORD.to_string()),
    }
}

fn login_command(username: &str, password: &str) -> MemberLoginCommand {
    MemberLoginCommand {
        username: username.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_register_login_and_refresh_rotation() {
    let app = test_application();
    let username = unique_username();

    let member_id = app
        .registration
        .register_member(register_command(&username, "Alice"))
        .await
        .expect("registration succeeds");

    let login = app
        .authentication
        .login_member(login_command(&username, TEST_PASSWORD))
        .await
        .expect("login succeeds");
    let refresh = login.refresh_token.expect("member login carries refresh");

    // The access token identifies the member.
    match app.token_issuer.validate_token(&login.access_token) {
        TokenVerdict::Valid(principal) => {
            assert_eq!(principal.subject, member_id.as_str());
            assert_eq!(principal.kind, PrincipalKind::Member);
        }
        TokenVerdict::Invalid => panic!("fresh access token must validate"),
    }

    let rotated = app
        .token_refresh
        .refresh_tokens(&refresh)
        .await
        .expect("refresh succeeds");
    let next_refresh = rotated.refresh_token.expect("refresh carries new token");
    assert_ne!(next_refresh, refresh);

    // The redeemed value is spent.
    let replay = app.token_refresh.refresh_tokens(&refresh).await;
    assert_eq!(
        replay.expect_err("spent token is rejected").code(),
        "INVALID_REFRESH_TOKEN"
    );

    // The rotated value still works.
    app.token_refresh
        .refresh_tokens(&next_refresh)
        .await
        .expect("rotated token refreshes");
}

#[tokio::test]
async fn test_duplicate_registration_is_rejected() {
    let app = test_application();
    let username = unique_username();

    app.registration
        .register_member(register_command(&username, "Alice"))
        .await
        .expect("first registration succeeds");

    let error = app
        .registration
        .register_member(register_command(&username, "Someone"))
        .await
        .expect_err("duplicate username");
    assert_eq!(error.code(), "USERNAME_OR_NICKNAME_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_login_with_wrong_password_is_rejected() {
    let app = test_application();
    let username = unique_username();

    app.registration
        .register_member(register_command(&username, "Alice"))
        .await
        .expect("registration succeeds");

    let error = app
        .authentication
        .login_member(login_command(&username, "wrong5678!"))
        .await
        .expect_err("wrong password");
    assert_eq!(error.code(), "INVALID_LOGIN_CREDENTIALS");
}

#[tokio::test]
async fn test_guest_login_issues_access_token_only() {
    let app = test_application();

    let response = app
        .authentication
        .login_guest(GuestLoginCommand {
            nickname: "Visitor".to_string(),
        })
        .await
        .expect("guest login succeeds");

    assert_eq!(response.refresh_token, None);
    match app.token_issuer.validate_token(&response.access_token) {
        TokenVerdict::Valid(principal) => assert_eq!(principal.kind, PrincipalKind::Guest),
        TokenVerdict::Invalid => panic!("fresh guest token must validate"),
    }
}

#[tokio::test]
async fn test_second_login_invalidates_previous_refresh_token() {
    let app = test_application();
    let username = unique_username();

    app.registration
        .register_member(register_command(&username, "Alice"))
        .await
        .expect("registration succeeds");

    let first = app
        .authentication
        .login_member(login_command(&username, TEST_PASSWORD))
        .await
        .expect("first login");
    let second = app
        .authentication
        .login_member(login_command(&username, TEST_PASSWORD))
        .await
        .expect("second login");

    let stale = first.refresh_token.expect("refresh token");
    let error = app
        .token_refresh
        .refresh_tokens(&stale)
        .await
        .expect_err("stale refresh token");
    assert_eq!(error.code(), "INVALID_REFRESH_TOKEN");

    app.token_refresh
        .refresh_tokens(&second.refresh_token.expect("refresh token"))
        .await
        .expect("current refresh token works");
}

#[tokio::test]
async fn test_concurrent_refreshes_redeem_at_most_once() {
    let app = test_application();
    let username = unique_username();

    app.registration
        .register_member(register_command(&username, "Alice"))
        .await
        .expect("registration succeeds");
    let login = app
        .authentication
        .login_member(login_command(&username, TEST_PASSWORD))
        .await
        .expect("login succeeds");
    let refresh = login.refresh_token.expect("refresh token");

    let (first, second) = tokio::join!(
        app.token_refresh.refresh_tokens(&refresh),
        app.token_refresh.refresh_tokens(&refresh)
    );

    assert!(
        first.is_ok() != second.is_ok(),
        "exactly one concurrent refresh may win"
    );
}

#[tokio::test]
async fn test_expired_refresh_token_is_rejected() {
    // Negative expiry makes every stored refresh token already expired.
    let mut settings = crate::common::test_settings();
    settings.jwt.refresh_token_expiry_days = -1;
    let app = chat_core::startup::Application::build(settings);
    let username = unique_username();

    app.registration
        .register_member(register_command(&username, "Alice"))
        .await
        .expect("registration succeeds");
    let login = app
        .authentication
        .login_member(login_command(&username, TEST_PASSWORD))
        .await
        .expect("login succeeds");
    let refresh = login.refresh_token.expect("refresh token");

    let error = app
        .token_refresh
        .refresh_tokens(&refresh)
        .await
        .expect_err("expired token");
    assert_eq!(error.code(), "INVALID_REFRESH_TOKEN");

    // The deleted row does not come back.
    let again = app
        .token_refresh
        .refresh_tokens(&refresh)
        .await
        .expect_err("expired token stays invalid");
    assert_eq!(again.code(), "INVALID_REFRESH_TOKEN");
}
