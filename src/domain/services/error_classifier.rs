// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::Value;
use tracing::error;

use crate::engines::traits::UpstreamFailure;
use crate::utils::errors::ScrapeError;

/// 将上游失败转换为面向调用方的错误，并记录日志
///
/// * HTTP 失败：优先使用响应体中的 `message` 字段，其次是字符串响应体，
///   都没有时使用失败本身的描述；状态码沿用上游状态码
/// * 传输失败：502，消息为失败描述
/// * 其他失败：不重新归类，作为内部错误原样抛出
pub fn classify(username: &str, failure: UpstreamFailure) -> ScrapeError {
    let kind = failure.kind();
    let own_message = failure.to_string();
    let classified = match failure {
        UpstreamFailure::Http { status, body } => ScrapeError::Upstream {
            status,
            message: extract_message(&body).unwrap_or(own_message),
        },
        UpstreamFailure::Transport(message) => ScrapeError::Transport(message),
        UpstreamFailure::Other(message) => {
            error!(
                username = %username,
                kind,
                "Unexpected error while scraping Instagram for {}: {}", username, message
            );
            return ScrapeError::Unclassified(message);
        }
    };

    error!(
        username = %username,
        kind,
        status = classified.status_code(),
        "Failed to fetch Instagram posts for {}: {}", username, classified
    );
    classified
}

/// 从上游响应体中提取错误消息
fn extract_message(body: &str) -> Option<String> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => map
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string),
        Ok(Value::String(text)) => Some(text).filter(|t| !t.is_empty()),
        Ok(_) => None,
        Err(_) => Some(body.to_string()).filter(|b| !b.trim().is_empty()),
    }
}
