//! Integration tests for registration and the authentication flow.

mod helpers;

use http::StatusCode;

use helpers::TestApp;

const PASSWORD: &str = "G0lden!Harbor42";

#[tokio::test]
async fn test_register_creates_account() {
    let app = TestApp::new().await;
    let username = TestApp::unique("reg");

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": username,
                "email": format!("{username}@example.com"),
                "password": PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.body["data"]["username"], username.as_str());

    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE LOWER(username) = LOWER($1)")
            .bind(&username)
            .fetch_one(&app.db_pool)
            .await
            .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_register_duplicate_username_conflict() {
    let app = TestApp::new().await;
    let username = TestApp::unique("dup");
    app.create_test_user(&username, PASSWORD).await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": username.to_uppercase(),
                "password": PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_weak_password_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": TestApp::unique("weak"),
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new().await;
    let username = TestApp::unique("login");
    app.create_test_user(&username, PASSWORD).await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": username,
                "password": PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["access_token"].is_string());
    assert!(response.body["data"]["refresh_token"].is_string());
    assert_eq!(response.body["data"]["user"]["username"], username.as_str());
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = TestApp::new().await;
    let username = TestApp::unique("badpw");
    app.create_test_user(&username, PASSWORD).await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": username,
                "password": "wrong-password",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_nonexistent_user() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": TestApp::unique("nobody"),
                "password": PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_authenticated() {
    let app = TestApp::new().await;
    let username = TestApp::unique("me");
    app.create_test_user(&username, PASSWORD).await;
    let token = app.login(&username, PASSWORD).await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["username"], username.as_str());
}

#[tokio::test]
async fn test_me_unauthenticated() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_invalidates_token() {
    let app = TestApp::new().await;
    let username = TestApp::unique("logout");
    app.create_test_user(&username, PASSWORD).await;
    let token = app.login(&username, PASSWORD).await;

    let response = app
        .request("POST", "/api/auth/logout", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // Token should now be rejected
    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_rotates_tokens() {
    let app = TestApp::new().await;
    let username = TestApp::unique("refresh");
    app.create_test_user(&username, PASSWORD).await;

    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": username,
                "password": PASSWORD,
            })),
            None,
        )
        .await;
    let refresh_token = login.body["data"]["refresh_token"].as_str().unwrap().to_string();

    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({ "refresh_token": refresh_token })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["access_token"].is_string());

    // The old refresh token has been superseded and must be rejected.
    let replay = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({ "refresh_token": refresh_token })),
            None,
        )
        .await;
    assert_eq!(replay.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_change_password() {
    let app = TestApp::new().await;
    let username = TestApp::unique("chpw");
    app.create_test_user(&username, PASSWORD).await;
    let token = app.login(&username, PASSWORD).await;

    let new_password = "Crimson!Lantern77";

    // Wrong current password is rejected.
    let response = app
        .request(
            "PUT",
            "/api/users/me/password",
            Some(serde_json::json!({
                "current_password": "wrong-password",
                "new_password": new_password,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request(
            "PUT",
            "/api/users/me/password",
            Some(serde_json::json!({
                "current_password": PASSWORD,
                "new_password": new_password,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    // Old password no longer works; the new one does.
    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": username,
                "password": PASSWORD,
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    app.login(&username, new_password).await;
}

#[tokio::test]
async fn test_lockout_after_failed_attempts() {
    let app = TestApp::new().await;
    let username = TestApp::unique("lock");
    app.create_test_user(&username, PASSWORD).await;

    for _ in 0..5 {
        let response = app
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({
                    "username": username,
                    "password": "wrong-password",
                })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    }

    // Correct password, but the account is now locked.
    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": username,
                "password": PASSWORD,
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
