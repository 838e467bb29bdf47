//! Integration tests for the group directory and group feeds.

mod helpers;

use http::StatusCode;

use helpers::TestApp;

const PASSWORD: &str = "G0lden!Harbor42";

#[tokio::test]
async fn test_group_feed_only_contains_group_posts() {
    let app = TestApp::new().await;
    let username = TestApp::unique("grouper");
    app.create_test_user(&username, PASSWORD).await;
    let token = app.login(&username, PASSWORD).await;

    let slug_a = TestApp::unique("slug-a");
    let slug_b = TestApp::unique("slug-b");
    let group_a = app.create_test_group("Group A", &slug_a).await;
    app.create_test_group("Group B", &slug_b).await;

    let text = TestApp::unique("grouped post");
    app.create_post(&token, &text, Some(group_a)).await;

    let in_a = app
        .request("GET", &format!("/api/groups/{slug_a}/posts"), None, None)
        .await;
    assert_eq!(in_a.status, StatusCode::OK);
    assert!(in_a.has_post_with_text(&text));

    // The post must not leak into the other group's feed.
    let in_b = app
        .request("GET", &format!("/api/groups/{slug_b}/posts"), None, None)
        .await;
    assert_eq!(in_b.status, StatusCode::OK);
    assert!(!in_b.has_post_with_text(&text));
    assert_eq!(in_b.body["data"]["total_items"], 0);
}

#[tokio::test]
async fn test_unknown_group_returns_404() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", "/api/groups/no-such-slug-anywhere/posts", None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request("GET", "/api/groups/no-such-slug-anywhere", None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_group_detail_and_directory() {
    let app = TestApp::new().await;
    let slug = TestApp::unique("dir-slug");
    app.create_test_group("Directory group", &slug).await;

    let response = app
        .request("GET", &format!("/api/groups/{slug}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["title"], "Directory group");
    assert_eq!(response.body["data"]["slug"], slug.as_str());

    let listing = app
        .request("GET", "/api/groups?per_page=100", None, None)
        .await;
    assert_eq!(listing.status, StatusCode::OK);
    assert!(
        listing
            .items()
            .iter()
            .any(|g| g["slug"] == slug.as_str()),
        "Directory should contain the new group"
    );
}

#[tokio::test]
async fn test_create_post_with_unknown_group_rejected() {
    let app = TestApp::new().await;
    let username = TestApp::unique("ghostgroup");
    app.create_test_user(&username, PASSWORD).await;
    let token = app.login(&username, PASSWORD).await;

    let response = app
        .request(
            "POST",
            "/api/posts",
            Some(serde_json::json!({
                "text": "post into the void",
                "group_id": "00000000-0000-0000-0000-000000000000",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_edit_can_move_post_between_groups() {
    let app = TestApp::new().await;
    let username = TestApp::unique("mover");
    app.create_test_user(&username, PASSWORD).await;
    let token = app.login(&username, PASSWORD).await;

    let slug_from = TestApp::unique("from-slug");
    let slug_to = TestApp::unique("to-slug");
    let group_from = app.create_test_group("From", &slug_from).await;
    let group_to = app.create_test_group("To", &slug_to).await;

    let text = TestApp::unique("moving post");
    let post_id = app.create_post(&token, &text, Some(group_from)).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/posts/{post_id}"),
            Some(serde_json::json!({
                "text": text,
                "group_id": group_to,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let in_from = app
        .request("GET", &format!("/api/groups/{slug_from}/posts"), None, None)
        .await;
    assert!(!in_from.has_post_with_text(&text));

    let in_to = app
        .request("GET", &format!("/api/groups/{slug_to}/posts"), None, None)
        .await;
    assert!(in_to.has_post_with_text(&text));
}
