//! Integration tests for posts: public pages, auth gating, publishing,
//! author-only editing, pagination, and the cached index feed.

mod helpers;

use http::StatusCode;

use helpers::TestApp;
use quillpad_core::traits::CacheProvider;

const PASSWORD: &str = "G0lden!Harbor42";

#[tokio::test]
async fn test_public_pages_accessible_to_guests() {
    let app = TestApp::new().await;
    let username = TestApp::unique("guest_author");
    app.create_test_user(&username, PASSWORD).await;
    let token = app.login(&username, PASSWORD).await;

    let slug = TestApp::unique("guest-slug");
    let group_id = app.create_test_group("Guest group", &slug).await;
    let post_id = app.create_post(&token, "Visible to everyone", Some(group_id)).await;

    for path in [
        "/api/posts".to_string(),
        format!("/api/posts/{post_id}"),
        format!("/api/groups/{slug}/posts"),
        format!("/api/users/{username}"),
        format!("/api/users/{username}/posts"),
    ] {
        let response = app.request("GET", &path, None, None).await;
        assert_eq!(response.status, StatusCode::OK, "GET {path} failed");
    }
}

#[tokio::test]
async fn test_create_requires_auth() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/posts",
            Some(serde_json::json!({ "text": "anonymous post" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_edit_requires_auth() {
    let app = TestApp::new().await;
    let username = TestApp::unique("editgate");
    app.create_test_user(&username, PASSWORD).await;
    let token = app.login(&username, PASSWORD).await;
    let post_id = app.create_post(&token, "original", None).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/posts/{post_id}"),
            Some(serde_json::json!({ "text": "edited" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_post() {
    let app = TestApp::new().await;
    let username = TestApp::unique("creator");
    let user_id = app.create_test_user(&username, PASSWORD).await;
    let token = app.login(&username, PASSWORD).await;

    let slug = TestApp::unique("create-slug");
    let group_id = app.create_test_group("Creators", &slug).await;

    let response = app
        .request(
            "POST",
            "/api/posts",
            Some(serde_json::json!({
                "text": "A brand new post",
                "group_id": group_id,
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.body["data"]["text"], "A brand new post");
    assert_eq!(response.body["data"]["author"]["username"], username.as_str());
    assert_eq!(response.body["data"]["group"]["title"], "Creators");

    assert_eq!(app.count_posts_by(user_id).await, 1);
}

#[tokio::test]
async fn test_create_post_with_empty_text_rejected() {
    let app = TestApp::new().await;
    let username = TestApp::unique("emptytext");
    app.create_test_user(&username, PASSWORD).await;
    let token = app.login(&username, PASSWORD).await;

    let response = app
        .request(
            "POST",
            "/api/posts",
            Some(serde_json::json!({ "text": "" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_edit_post() {
    let app = TestApp::new().await;
    let username = TestApp::unique("editor");
    let user_id = app.create_test_user(&username, PASSWORD).await;
    let token = app.login(&username, PASSWORD).await;
    let post_id = app.create_post(&token, "Before the edit", None).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/posts/{post_id}"),
            Some(serde_json::json!({ "text": "After the edit" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["data"]["text"], "After the edit");

    // Editing never creates a new row.
    assert_eq!(app.count_posts_by(user_id).await, 1);

    let text: String = sqlx::query_scalar("SELECT text FROM posts WHERE id = $1")
        .bind(post_id)
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(text, "After the edit");
}

#[tokio::test]
async fn test_edit_post_by_non_author_forbidden() {
    let app = TestApp::new().await;
    let author = TestApp::unique("owner");
    let other = TestApp::unique("intruder");
    app.create_test_user(&author, PASSWORD).await;
    app.create_test_user(&other, PASSWORD).await;

    let author_token = app.login(&author, PASSWORD).await;
    let post_id = app.create_post(&author_token, "mine", None).await;

    let other_token = app.login(&other, PASSWORD).await;
    let response = app
        .request(
            "PUT",
            &format!("/api/posts/{post_id}"),
            Some(serde_json::json!({ "text": "hijacked" })),
            Some(&other_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_delete_post_by_non_author_forbidden() {
    let app = TestApp::new().await;
    let author = TestApp::unique("delowner");
    let other = TestApp::unique("delintruder");
    app.create_test_user(&author, PASSWORD).await;
    app.create_test_user(&other, PASSWORD).await;

    let author_token = app.login(&author, PASSWORD).await;
    let post_id = app.create_post(&author_token, "keep me", None).await;

    let other_token = app.login(&other, PASSWORD).await;
    let response = app
        .request("DELETE", &format!("/api/posts/{post_id}"), None, Some(&other_token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request("DELETE", &format!("/api/posts/{post_id}"), None, Some(&author_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", &format!("/api/posts/{post_id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_post_returns_404() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "GET",
            "/api/posts/00000000-0000-0000-0000-000000000000",
            None,
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("GET", "/api/unexisting_page", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_author_posts_pagination() {
    let app = TestApp::new().await;
    let username = TestApp::unique("prolific");
    app.create_test_user(&username, PASSWORD).await;
    let token = app.login(&username, PASSWORD).await;

    for i in 0..13 {
        app.create_post(&token, &format!("post number {i}"), None).await;
    }

    let page1 = app
        .request("GET", &format!("/api/users/{username}/posts?page=1"), None, None)
        .await;
    assert_eq!(page1.status, StatusCode::OK);
    assert_eq!(page1.items().len(), 10);
    assert_eq!(page1.body["data"]["total_items"], 13);
    assert_eq!(page1.body["data"]["total_pages"], 2);
    assert_eq!(page1.body["data"]["has_next"], true);

    let page2 = app
        .request("GET", &format!("/api/users/{username}/posts?page=2"), None, None)
        .await;
    assert_eq!(page2.items().len(), 3);
    assert_eq!(page2.body["data"]["has_previous"], true);

    // Most-recent-first: the newest post leads page 1.
    assert_eq!(page1.items()[0]["text"], "post number 12");
}

#[tokio::test]
async fn test_index_feed_is_cached() {
    let app = TestApp::new().await;
    let username = TestApp::unique("cached");
    app.create_test_user(&username, PASSWORD).await;
    let token = app.login(&username, PASSWORD).await;

    let first_text = TestApp::unique("first post");
    app.create_post(&token, &first_text, None).await;

    // Prime the cache.
    let response = app.request("GET", "/api/posts?per_page=100", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.has_post_with_text(&first_text));

    // A post published after the page was cached is not visible yet.
    let second_text = TestApp::unique("second post");
    app.create_post(&token, &second_text, None).await;

    let response = app.request("GET", "/api/posts?per_page=100", None, None).await;
    assert!(response.has_post_with_text(&first_text));
    assert!(
        !response.has_post_with_text(&second_text),
        "Index feed should be served from cache"
    );

    // Once the cache is cleared the new post appears.
    app.state.cache.flush_all().await.unwrap();

    let response = app.request("GET", "/api/posts?per_page=100", None, None).await;
    assert!(response.has_post_with_text(&second_text));
}

#[tokio::test]
async fn test_post_detail_shows_author_post_count() {
    let app = TestApp::new().await;
    let username = TestApp::unique("detailed");
    app.create_test_user(&username, PASSWORD).await;
    let token = app.login(&username, PASSWORD).await;

    app.create_post(&token, "first", None).await;
    let post_id = app.create_post(&token, "second", None).await;

    let response = app
        .request("GET", &format!("/api/posts/{post_id}"), None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["post"]["text"], "second");
    assert_eq!(response.body["data"]["author_post_count"], 2);
    assert!(response.body["data"]["comments"].as_array().unwrap().is_empty());
}
