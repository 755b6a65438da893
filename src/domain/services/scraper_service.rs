// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use tracing::{error, info, warn};

use crate::domain::models::scraped_post::ScrapedPost;
use crate::domain::models::scraper_config::ScraperConfig;
use crate::domain::services::error_classifier::classify;
use crate::engines::traits::UpstreamClient;
use crate::infrastructure::instagram::normalizer::normalize;
use crate::utils::errors::ScrapeError;

/// 抓取服务
///
/// 组合上游客户端、响应归一化和错误分类：
/// 校验用户名 → 计算条数 → 请求上游 → 归一化或分类错误
pub struct ScraperService {
    client: Arc<dyn UpstreamClient>,
    config: Option<Arc<ScraperConfig>>,
}

impl ScraperService {
    /// 创建抓取服务
    ///
    /// # 参数
    ///
    /// * `client` - 上游客户端
    /// * `config` - 抓取配置，`None` 表示部署时未配置
    pub fn new(client: Arc<dyn UpstreamClient>, config: Option<ScraperConfig>) -> Self {
        Self {
            client,
            config: config.map(Arc::new),
        }
    }

    /// 获取用户最近的帖子
    ///
    /// # 参数
    ///
    /// * `username` - Instagram 用户名，去除首尾空白后不能为空
    /// * `limit` - 请求的条数，缺省时使用配置的默认值
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<ScrapedPost>)` - 按上游顺序排列的帖子
    /// * `Err(ScrapeError)` - 校验、配置、上游或传输错误
    pub async fn scrape(
        &self,
        username: &str,
        limit: Option<u32>,
    ) -> Result<Vec<ScrapedPost>, ScrapeError> {
        let result = self.run(username, limit).await;

        metrics::counter!("instagram_scrape_requests_total").increment(1);
        match &result {
            Ok(posts) => {
                metrics::counter!("instagram_scrape_posts_total").increment(posts.len() as u64);
            }
            Err(e) => {
                metrics::counter!("instagram_scrape_failures_total", "kind" => e.kind())
                    .increment(1);
            }
        }

        result
    }

    async fn run(&self, username: &str, limit: Option<u32>) -> Result<Vec<ScrapedPost>, ScrapeError> {
        let username = username.trim();
        if username.is_empty() {
            warn!("Rejected Instagram request with a blank username");
            return Err(ScrapeError::Validation(
                "Instagram username is required".to_string(),
            ));
        }

        let Some(config) = self.config.as_ref() else {
            error!(
                username = %username,
                "Instagram configuration is not available"
            );
            return Err(ScrapeError::Configuration(
                "Instagram configuration is not available".to_string(),
            ));
        };

        let limit = config.effective_limit(limit);

        match self.client.fetch(username, config).await {
            Ok(payload) => {
                let posts = normalize(&payload, limit);
                info!(
                    username = %username,
                    limit,
                    "Fetched {} Instagram posts via {}",
                    posts.len(),
                    self.client.name()
                );
                Ok(posts)
            }
            Err(failure) => Err(classify(username, failure)),
        }
    }
}

#[cfg(test)]
#[path = "scraper_service_test.rs"]
mod tests;
