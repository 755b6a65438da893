// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{Extension, Json, Path};
use std::sync::Arc;

use crate::{
    application::dto::feed_query::FeedQueryDto,
    domain::{models::scraped_post::ScrapedPost, services::scraper_service::ScraperService},
    presentation::{errors::AppError, extractors::validated_query::ValidatedQuery},
};

/// 获取 Instagram 用户最近的帖子
///
/// # 参数
///
/// * `service` - 抓取服务
/// * `username` - 路径中的用户名
/// * `query` - 已校验的查询参数
///
/// # 返回值
///
/// 成功时返回帖子数组，失败时返回对应状态码的错误响应
pub async fn get_instagram_posts(
    Extension(service): Extension<Arc<ScraperService>>,
    Path(username): Path<String>,
    ValidatedQuery(query): ValidatedQuery<FeedQueryDto>,
) -> Result<Json<Vec<ScrapedPost>>, AppError> {
    let posts = service.scrape(&username, query.limit()).await?;
    Ok(Json(posts))
}
