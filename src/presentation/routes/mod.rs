// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::presentation::handlers::scraper_handler;
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// 抓取服务通过 `Extension<Arc<ScraperService>>` 注入
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
        .route(
            "/scraper/instagram/{username}/posts",
            get(scraper_handler::get_instagram_posts),
        )
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
