//! Integration tests for follows: idempotency, the self-follow guard,
//! the follow feed, and profile follow stats.

mod helpers;

use http::StatusCode;

use helpers::TestApp;

const PASSWORD: &str = "G0lden!Harbor42";

#[tokio::test]
async fn test_follow_requires_auth() {
    let app = TestApp::new().await;
    let author = TestApp::unique("popular");
    app.create_test_user(&author, PASSWORD).await;

    let response = app
        .request("PUT", &format!("/api/users/{author}/follow"), None, None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_follow_is_idempotent() {
    let app = TestApp::new().await;
    let follower = TestApp::unique("fan");
    let author = TestApp::unique("star");
    app.create_test_user(&follower, PASSWORD).await;
    app.create_test_user(&author, PASSWORD).await;

    let token = app.login(&follower, PASSWORD).await;

    let response = app
        .request("PUT", &format!("/api/users/{author}/follow"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["following"], true);
    assert_eq!(response.body["data"]["changed"], true);

    // Following again is a no-op, not an error.
    let response = app
        .request("PUT", &format!("/api/users/{author}/follow"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["following"], true);
    assert_eq!(response.body["data"]["changed"], false);
}

#[tokio::test]
async fn test_self_follow_rejected() {
    let app = TestApp::new().await;
    let username = TestApp::unique("narcissus");
    app.create_test_user(&username, PASSWORD).await;
    let token = app.login(&username, PASSWORD).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/users/{username}/follow"),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unfollow_is_idempotent() {
    let app = TestApp::new().await;
    let follower = TestApp::unique("exfan");
    let author = TestApp::unique("exstar");
    app.create_test_user(&follower, PASSWORD).await;
    app.create_test_user(&author, PASSWORD).await;

    let token = app.login(&follower, PASSWORD).await;

    // Unfollowing someone never followed is a quiet no-op.
    let response = app
        .request(
            "DELETE",
            &format!("/api/users/{author}/follow"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["changed"], false);

    app.request("PUT", &format!("/api/users/{author}/follow"), None, Some(&token))
        .await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/users/{author}/follow"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["following"], false);
    assert_eq!(response.body["data"]["changed"], true);
}

#[tokio::test]
async fn test_follow_feed_shows_followed_authors_posts() {
    let app = TestApp::new().await;
    let follower = TestApp::unique("reader");
    let author = TestApp::unique("writer");
    let outsider = TestApp::unique("outsider");
    app.create_test_user(&follower, PASSWORD).await;
    app.create_test_user(&author, PASSWORD).await;
    app.create_test_user(&outsider, PASSWORD).await;

    let follower_token = app.login(&follower, PASSWORD).await;
    let author_token = app.login(&author, PASSWORD).await;
    let outsider_token = app.login(&outsider, PASSWORD).await;

    app.request(
        "PUT",
        &format!("/api/users/{author}/follow"),
        None,
        Some(&follower_token),
    )
    .await;

    let text = TestApp::unique("feed post");
    app.create_post(&author_token, &text, None).await;

    // The follower sees the post in their feed.
    let feed = app
        .request("GET", "/api/feed?per_page=100", None, Some(&follower_token))
        .await;
    assert_eq!(feed.status, StatusCode::OK);
    assert!(feed.has_post_with_text(&text));

    // A user who follows nobody has an empty feed.
    let feed = app
        .request("GET", "/api/feed?per_page=100", None, Some(&outsider_token))
        .await;
    assert_eq!(feed.status, StatusCode::OK);
    assert!(!feed.has_post_with_text(&text));
}

#[tokio::test]
async fn test_unfollow_removes_posts_from_feed() {
    let app = TestApp::new().await;
    let follower = TestApp::unique("fickle");
    let author = TestApp::unique("dropped");
    app.create_test_user(&follower, PASSWORD).await;
    app.create_test_user(&author, PASSWORD).await;

    let follower_token = app.login(&follower, PASSWORD).await;
    let author_token = app.login(&author, PASSWORD).await;

    app.request(
        "PUT",
        &format!("/api/users/{author}/follow"),
        None,
        Some(&follower_token),
    )
    .await;

    let text = TestApp::unique("fleeting post");
    app.create_post(&author_token, &text, None).await;

    let feed = app
        .request("GET", "/api/feed?per_page=100", None, Some(&follower_token))
        .await;
    assert!(feed.has_post_with_text(&text));

    app.request(
        "DELETE",
        &format!("/api/users/{author}/follow"),
        None,
        Some(&follower_token),
    )
    .await;

    let feed = app
        .request("GET", "/api/feed?per_page=100", None, Some(&follower_token))
        .await;
    assert!(!feed.has_post_with_text(&text));
}

#[tokio::test]
async fn test_profile_following_flag_is_viewer_specific() {
    let app = TestApp::new().await;
    let follower = TestApp::unique("watcher");
    let author = TestApp::unique("watched");
    app.create_test_user(&follower, PASSWORD).await;
    app.create_test_user(&author, PASSWORD).await;

    let token = app.login(&follower, PASSWORD).await;
    app.request("PUT", &format!("/api/users/{author}/follow"), None, Some(&token))
        .await;

    // The follower sees following: true.
    let profile = app
        .request("GET", &format!("/api/users/{author}"), None, Some(&token))
        .await;
    assert_eq!(profile.status, StatusCode::OK);
    assert_eq!(profile.body["data"]["following"], true);
    assert_eq!(profile.body["data"]["follower_count"], 1);

    // An anonymous viewer sees following: false for the same author.
    let profile = app
        .request("GET", &format!("/api/users/{author}"), None, None)
        .await;
    assert_eq!(profile.body["data"]["following"], false);
    assert_eq!(profile.body["data"]["follower_count"], 1);
}

#[tokio::test]
async fn test_profile_post_count() {
    let app = TestApp::new().await;
    let username = TestApp::unique("counted");
    app.create_test_user(&username, PASSWORD).await;
    let token = app.login(&username, PASSWORD).await;

    app.create_post(&token, "one", None).await;
    app.create_post(&token, "two", None).await;

    let profile = app
        .request("GET", &format!("/api/users/{username}"), None, None)
        .await;
    assert_eq!(profile.status, StatusCode::OK);
    assert_eq!(profile.body["data"]["post_count"], 2);
    assert_eq!(profile.body["data"]["user"]["username"], username.as_str());
}
