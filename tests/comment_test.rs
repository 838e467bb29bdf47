//! Integration tests for comments.

mod helpers;

use http::StatusCode;

use helpers::TestApp;

const PASSWORD: &str = "G0lden!Harbor42";

#[tokio::test]
async fn test_add_comment_requires_auth() {
    let app = TestApp::new().await;
    let username = TestApp::unique("silent");
    app.create_test_user(&username, PASSWORD).await;
    let token = app.login(&username, PASSWORD).await;
    let post_id = app.create_post(&token, "no anonymous comments", None).await;

    let response = app
        .request(
            "POST",
            &format!("/api/posts/{post_id}/comments"),
            Some(serde_json::json!({ "text": "drive-by comment" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_add_comment() {
    let app = TestApp::new().await;
    let author = TestApp::unique("commauthor");
    let commenter = TestApp::unique("commenter");
    app.create_test_user(&author, PASSWORD).await;
    app.create_test_user(&commenter, PASSWORD).await;

    let author_token = app.login(&author, PASSWORD).await;
    let post_id = app.create_post(&author_token, "comment on this", None).await;

    let commenter_token = app.login(&commenter, PASSWORD).await;
    let response = app
        .request(
            "POST",
            &format!("/api/posts/{post_id}/comments"),
            Some(serde_json::json!({ "text": "well said" })),
            Some(&commenter_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.body["data"]["text"], "well said");
    assert_eq!(response.body["data"]["author"]["username"], commenter.as_str());

    // Visible in the comment list and counted on the detail page.
    let list = app
        .request("GET", &format!("/api/posts/{post_id}/comments"), None, None)
        .await;
    assert_eq!(list.status, StatusCode::OK);
    let comments = list.body["data"].as_array().unwrap();
    assert_eq!(comments.len(), 1);

    let detail = app
        .request("GET", &format!("/api/posts/{post_id}"), None, None)
        .await;
    assert_eq!(detail.body["data"]["post"]["comment_count"], 1);
}

#[tokio::test]
async fn test_comments_ordered_oldest_first() {
    let app = TestApp::new().await;
    let username = TestApp::unique("chatty");
    app.create_test_user(&username, PASSWORD).await;
    let token = app.login(&username, PASSWORD).await;
    let post_id = app.create_post(&token, "discussion thread", None).await;

    for text in ["first", "second", "third"] {
        let response = app
            .request(
                "POST",
                &format!("/api/posts/{post_id}/comments"),
                Some(serde_json::json!({ "text": text })),
                Some(&token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let list = app
        .request("GET", &format!("/api/posts/{post_id}/comments"), None, None)
        .await;
    let texts: Vec<&str> = list.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn test_delete_own_comment_only() {
    let app = TestApp::new().await;
    let owner = TestApp::unique("commowner");
    let other = TestApp::unique("commother");
    app.create_test_user(&owner, PASSWORD).await;
    app.create_test_user(&other, PASSWORD).await;

    let owner_token = app.login(&owner, PASSWORD).await;
    let post_id = app.create_post(&owner_token, "delete test", None).await;

    let response = app
        .request(
            "POST",
            &format!("/api/posts/{post_id}/comments"),
            Some(serde_json::json!({ "text": "ephemeral" })),
            Some(&owner_token),
        )
        .await;
    let comment_id = response.body["data"]["id"].as_str().unwrap().to_string();

    let other_token = app.login(&other, PASSWORD).await;
    let response = app
        .request(
            "DELETE",
            &format!("/api/comments/{comment_id}"),
            None,
            Some(&other_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "DELETE",
            &format!("/api/comments/{comment_id}"),
            None,
            Some(&owner_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let list = app
        .request("GET", &format!("/api/posts/{post_id}/comments"), None, None)
        .await;
    assert!(list.body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_comment_on_missing_post_404() {
    let app = TestApp::new().await;
    let username = TestApp::unique("lostcomm");
    app.create_test_user(&username, PASSWORD).await;
    let token = app.login(&username, PASSWORD).await;

    let response = app
        .request(
            "POST",
            "/api/posts/00000000-0000-0000-0000-000000000000/comments",
            Some(serde_json::json!({ "text": "into the void" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
