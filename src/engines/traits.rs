// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::models::scraper_config::ScraperConfig;

/// 上游请求失败类型
///
/// 在上游客户端边界上区分的封闭变体，错误分类器只对这三种情况做匹配
#[derive(Error, Debug)]
pub enum UpstreamFailure {
    /// 传输层失败（超时、连接失败、DNS 解析失败等），没有上游响应
    #[error("{0}")]
    Transport(String),
    /// 上游返回了非 2xx 状态码
    #[error("Upstream request failed with status code {status}")]
    Http {
        /// 上游状态码
        status: u16,
        /// 原始响应体
        body: String,
    },
    /// 无法识别的失败，原样向上抛出
    #[error("{0}")]
    Other(String),
}

impl UpstreamFailure {
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamFailure::Transport(_) => "transport",
            UpstreamFailure::Http { .. } => "http",
            UpstreamFailure::Other(_) => "other",
        }
    }
}

impl From<reqwest::Error> for UpstreamFailure {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            return UpstreamFailure::Other(err.to_string());
        }
        // timeout / connect / request / redirect / body / decode
        UpstreamFailure::Transport(err.to_string())
    }
}

/// 上游客户端特质
///
/// 每次调用恰好发起一次出站请求，不重试
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// 以 `username` 查询参数和配置的请求头对 `config.base_url` 发起一次 GET
    ///
    /// # 返回值
    ///
    /// * `Ok(Value)` - 2xx 响应体（非 JSON 内容以字符串值返回）
    /// * `Err(UpstreamFailure)` - 传输失败、HTTP 失败或其他失败
    async fn fetch(&self, username: &str, config: &ScraperConfig)
        -> Result<Value, UpstreamFailure>;

    /// 客户端名称
    fn name(&self) -> &'static str;
}
