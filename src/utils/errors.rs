// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 抓取错误类型
///
/// 面向调用方的错误分类，每种错误对应一个 HTTP 状态码
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// 调用方输入错误
    #[error("{0}")]
    Validation(String),

    /// 上游返回非 2xx 响应
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// 网络或超时错误
    #[error("{0}")]
    Transport(String),

    /// 部署配置缺失或无效
    #[error("{0}")]
    Configuration(String),

    /// 无法识别的错误，原样抛出
    #[error("{0}")]
    Unclassified(String),
}

impl ScrapeError {
    /// 对应的 HTTP 状态码
    pub fn status_code(&self) -> u16 {
        match self {
            ScrapeError::Validation(_) => 400,
            ScrapeError::Upstream { status, .. } => *status,
            ScrapeError::Transport(_) => 502,
            ScrapeError::Configuration(_) | ScrapeError::Unclassified(_) => 500,
        }
    }

    /// 用于指标标签的错误种类
    pub fn kind(&self) -> &'static str {
        match self {
            ScrapeError::Validation(_) => "validation",
            ScrapeError::Upstream { .. } => "upstream",
            ScrapeError::Transport(_) => "transport",
            ScrapeError::Configuration(_) => "configuration",
            ScrapeError::Unclassified(_) => "unclassified",
        }
    }
}
