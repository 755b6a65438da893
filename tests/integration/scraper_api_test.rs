// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::helpers::{app_for, app_with_timeout, get_json, unconfigured_app, TEST_USER_AGENT};

fn profile(edges: Vec<Value>) -> Value {
    json!({
        "data": { "user": { "edge_owner_to_timeline_media": { "edges": edges } } },
        "status": "ok"
    })
}

fn edge(id: usize) -> Value {
    json!({
        "node": {
            "id": id.to_string(),
            "shortcode": format!("short{}", id),
            "display_url": format!("https://example.com/image{}.jpg", id),
            "taken_at_timestamp": 1704067200,
            "is_video": id % 2 == 1,
            "edge_liked_by": { "count": 10 },
            "edge_media_to_comment": { "count": 2 },
            "edge_media_to_caption": { "edges": [{ "node": { "text": "Example post" } }] }
        }
    })
}

async fn mount_profile(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path("/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// 正常返回归一化后的帖子
#[tokio::test]
async fn returns_normalized_posts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profile"))
        .and(query_param("username", "test-user"))
        .and(header("User-Agent", TEST_USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile(vec![json!({
            "node": {
                "id": "123",
                "shortcode": "abc",
                "display_url": "https://example.com/img.jpg",
                "taken_at_timestamp": 1700000000,
                "is_video": false,
                "edge_liked_by": { "count": 42 },
                "edge_media_to_comment": { "count": 3 },
                "edge_media_to_caption": { "edges": [{ "node": { "text": "caption" } }] }
            }
        })])))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get_json(
        app_for(&server, 5),
        "/scraper/instagram/test-user/posts?limit=1",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{
            "id": "123",
            "shortcode": "abc",
            "caption": "caption",
            "imageUrl": "https://example.com/img.jpg",
            "takenAt": "2023-11-14T22:13:20.000Z",
            "likeCount": 42,
            "commentCount": 3,
            "isVideo": false
        }])
    );
}

#[tokio::test]
async fn applies_limit_and_keeps_upstream_order() {
    let server = MockServer::start().await;
    mount_profile(&server, profile((0..8).map(edge).collect())).await;

    let (status, body) = get_json(
        app_for(&server, 5),
        "/scraper/instagram/test-user/posts?limit=3",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["0", "1", "2"]);
}

#[tokio::test]
async fn uses_default_limit_when_absent_or_empty() {
    let server = MockServer::start().await;
    mount_profile(&server, profile((0..8).map(edge).collect())).await;

    for uri in [
        "/scraper/instagram/test-user/posts",
        "/scraper/instagram/test-user/posts?limit=",
    ] {
        let (status, body) = get_json(app_for(&server, 5), uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 5);
    }
}

#[tokio::test]
async fn missing_structure_returns_empty_list() {
    let server = MockServer::start().await;
    mount_profile(&server, json!({ "status": "ok" })).await;

    let (status, body) = get_json(app_for(&server, 5), "/scraper/instagram/test-user/posts").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn rejects_invalid_query_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile(vec![])))
        .expect(0)
        .mount(&server)
        .await;

    for query in ["limit=invalid", "limit=0", "limit=51", "limit=2.5", "page=2"] {
        let uri = format!("/scraper/instagram/test-user/posts?{}", query);
        let (status, body) = get_json(app_for(&server, 5), &uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "query: {}", query);
        assert_eq!(body["statusCode"], 400);
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn rejects_blank_username() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (status, body) = get_json(app_for(&server, 5), "/scraper/instagram/%20%20/posts").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Instagram username is required");
}

#[tokio::test]
async fn relays_upstream_status_and_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(429).set_body_json(json!({ "message": "Too many requests" })),
        )
        .mount(&server)
        .await;

    let (status, body) = get_json(app_for(&server, 5), "/scraper/instagram/test-user/posts").await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(
        body,
        json!({ "error": "Too many requests", "statusCode": 429 })
    );
}

#[tokio::test]
async fn upstream_timeout_is_bad_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(profile(vec![]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let app = app_with_timeout(&server, 5, Duration::from_millis(100));
    let (status, body) = get_json(app, "/scraper/instagram/test-user/posts").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["statusCode"], 502);
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn missing_configuration_is_internal_error() {
    let (status, body) = get_json(unconfigured_app(), "/scraper/instagram/test-user/posts").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");
}
