// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Extension, Router,
};
use feedrs::domain::models::scraper_config::ScraperConfig;
use feedrs::domain::services::scraper_service::ScraperService;
use feedrs::engines::reqwest_engine::ReqwestUpstreamClient;
use feedrs::presentation::routes;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tower::util::ServiceExt;
use url::Url;
use wiremock::MockServer;

pub const TEST_USER_AGENT: &str = "feedrs-integration";

/// 指向 mock 上游的应用
pub fn app_for(server: &MockServer, default_limit: i64) -> Router {
    app_with_timeout(server, default_limit, Duration::from_secs(10))
}

pub fn app_with_timeout(server: &MockServer, default_limit: i64, timeout: Duration) -> Router {
    let mut headers = HashMap::new();
    headers.insert("User-Agent".to_string(), TEST_USER_AGENT.to_string());
    let config = ScraperConfig::new(
        Url::parse(&format!("{}/profile", server.uri())).unwrap(),
        headers,
        default_limit,
    );
    let client = Arc::new(ReqwestUpstreamClient::new(timeout, 3).unwrap());
    let service = Arc::new(ScraperService::new(client, Some(config)));
    routes::routes().layer(Extension(service))
}

/// 未配置上游的应用
pub fn unconfigured_app() -> Router {
    let client = Arc::new(ReqwestUpstreamClient::new(Duration::from_secs(1), 3).unwrap());
    let service = Arc::new(ScraperService::new(client, None));
    routes::routes().layer(Extension(service))
}

/// 发送 GET 请求并返回状态码和 JSON 响应体
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}
