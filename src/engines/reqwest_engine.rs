// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::scraper_config::ScraperConfig;
use crate::engines::traits::{UpstreamClient, UpstreamFailure};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::redirect::Policy;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// 上游客户端
///
/// 基于reqwest实现，所有请求共享同一个连接池
pub struct ReqwestUpstreamClient {
    client: reqwest::Client,
}

impl ReqwestUpstreamClient {
    /// 创建客户端
    ///
    /// # 参数
    ///
    /// * `timeout` - 单次请求超时时间
    /// * `max_redirects` - 允许跟随的最大重定向次数
    pub fn new(timeout: Duration, max_redirects: usize) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(Policy::limited(max_redirects))
            .build()?;

        Ok(Self { client })
    }

    fn build_headers(config: &ScraperConfig) -> Result<HeaderMap, UpstreamFailure> {
        let mut headers = HeaderMap::new();
        for (k, v) in &config.headers {
            let name = HeaderName::from_bytes(k.as_bytes())
                .map_err(|e| UpstreamFailure::Other(format!("Invalid header name {k}: {e}")))?;
            let value = HeaderValue::from_str(v)
                .map_err(|e| UpstreamFailure::Other(format!("Invalid value for header {k}: {e}")))?;
            headers.insert(name, value);
        }
        Ok(headers)
    }
}

#[async_trait]
impl UpstreamClient for ReqwestUpstreamClient {
    async fn fetch(
        &self,
        username: &str,
        config: &ScraperConfig,
    ) -> Result<Value, UpstreamFailure> {
        let headers = Self::build_headers(config)?;

        let start = Instant::now();
        let response = self
            .client
            .get(config.base_url.clone())
            .query(&[("username", username)])
            .headers(headers)
            .send()
            .await;
        metrics::histogram!("instagram_upstream_duration_seconds")
            .record(start.elapsed().as_secs_f64());
        let response = response?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(UpstreamFailure::Http {
                status: status.as_u16(),
                body,
            });
        }

        debug!(
            "Upstream responded {} for {} in {}ms",
            status,
            username,
            start.elapsed().as_millis()
        );

        match serde_json::from_str(&body) {
            Ok(payload) => Ok(payload),
            Err(e) => {
                warn!("Upstream body for {} is not JSON: {}", username, e);
                Ok(Value::String(body))
            }
        }
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
