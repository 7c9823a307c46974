//! Thread API Tests
//!
//! `POST /threads` and `GET /threads/{thread_id}`.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{access_token, body_json, TestApp};

#[tokio::test]
async fn test_post_thread_returns_added_thread() {
    let app = TestApp::new().await;

    let response = app
        .post_json_auth(
            "/threads",
            r#"{"title":"sebuah thread","body":"sebuah body thread"}"#,
            &access_token("user-123"),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["status"], "success");
    let added = &json["data"]["addedThread"];
    assert!(added["id"].as_str().unwrap().starts_with("thread-"));
    assert_eq!(added["title"], "sebuah thread");
    assert_eq!(added["owner"], "user-123");
}

#[tokio::test]
async fn test_post_thread_ignores_client_supplied_owner() {
    let app = TestApp::new().await;

    let response = app
        .post_json_auth(
            "/threads",
            r#"{"title":"judul","body":"isi","owner":"user-999"}"#,
            &access_token("user-123"),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["data"]["addedThread"]["owner"], "user-123");
}

#[tokio::test]
async fn test_post_thread_missing_property() {
    let app = TestApp::new().await;

    let response = app
        .post_json_auth("/threads", r#"{"title":"judul"}"#, &access_token("user-123"))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({
            "status": "fail",
            "message": "tidak dapat menambahkan thread baru karena property yang dibutuhkan tidak ada"
        })
    );
}

#[tokio::test]
async fn test_post_thread_wrong_data_type() {
    let app = TestApp::new().await;

    let response = app
        .post_json_auth(
            "/threads",
            r#"{"title":123,"body":["isi"]}"#,
            &access_token("user-123"),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["status"], "fail");
    assert_eq!(
        json["message"],
        "tidak dapat menambahkan thread baru karena tipe data tidak sesuai"
    );
}

#[tokio::test]
async fn test_post_thread_title_over_limit() {
    let app = TestApp::new().await;
    let body = json!({ "title": "a".repeat(51), "body": "isi" }).to_string();

    let response = app
        .post_json_auth("/threads", &body, &access_token("user-123"))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["message"],
        "tidak dapat menambahkan thread baru karena karakter title melebihi batas limit"
    );
}

#[tokio::test]
async fn test_post_thread_malformed_json() {
    let app = TestApp::new().await;

    let response = app
        .post_json_auth("/threads", r#"{"title":"#, &access_token("user-123"))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["status"], "fail");
}

#[tokio::test]
async fn test_post_thread_without_token() {
    let app = TestApp::new().await;

    let response = app
        .post_json("/threads", r#"{"title":"judul","body":"isi"}"#)
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        json!({ "status": "fail", "message": "Missing authentication" })
    );
}

#[tokio::test]
async fn test_post_thread_with_invalid_token() {
    let app = TestApp::new().await;

    let response = app
        .post_json_auth("/threads", r#"{"title":"judul","body":"isi"}"#, "not-a-jwt")
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["status"], "fail");
}

#[tokio::test]
async fn test_get_thread_detail_with_comments() {
    let app = TestApp::new().await;
    let thread_id = app.create_thread("user-123").await;
    let first = app.create_comment(&thread_id, "user-456", "komentar pertama").await;
    let second = app.create_comment(&thread_id, "user-123", "komentar kedua").await;

    let response = app.get(&format!("/threads/{thread_id}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "success");
    let thread = &json["data"]["thread"];
    assert_eq!(thread["id"], thread_id.as_str());
    assert_eq!(thread["title"], "sebuah thread");
    assert_eq!(thread["body"], "sebuah body thread");
    assert_eq!(thread["username"], "dicoding");
    assert!(thread["date"].is_string());

    let comments = thread["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["id"], first.as_str());
    assert_eq!(comments[0]["username"], "johndoe");
    assert_eq!(comments[0]["content"], "komentar pertama");
    assert_eq!(comments[1]["id"], second.as_str());
    assert_eq!(comments[1]["username"], "dicoding");
}

#[tokio::test]
async fn test_get_thread_detail_is_public() {
    let app = TestApp::new().await;
    let thread_id = app.create_thread("user-123").await;
    app.create_comment(&thread_id, "user-123", "halo").await;

    // No Authorization header
    let response = app.get(&format!("/threads/{thread_id}")).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_get_thread_detail_without_comments() {
    let app = TestApp::new().await;
    let thread_id = app.create_thread("user-123").await;

    let response = app.get(&format!("/threads/{thread_id}")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({ "status": "fail", "message": "Komentar tidak ada" })
    );
}

#[tokio::test]
async fn test_get_unknown_thread() {
    let app = TestApp::new().await;

    let response = app.get("/threads/thread-xyz").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({ "status": "fail", "message": "Gagal! Thread tidak ditemukan" })
    );
}
