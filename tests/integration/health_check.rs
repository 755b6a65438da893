// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use feedrs::presentation::routes;
use serde_json::json;
use tower::util::ServiceExt;

use crate::helpers::get_json;

/// 健康检查测试
#[tokio::test]
async fn health_check_works() {
    let (status, body) = get_json(routes::routes(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn version_returns_crate_version() {
    let response = routes::routes()
        .oneshot(
            Request::builder()
                .uri("/version")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], env!("CARGO_PKG_VERSION").as_bytes());
}
