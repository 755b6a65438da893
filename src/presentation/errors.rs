// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::utils::errors::ScrapeError;

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// 应用错误类型
///
/// 统一的 HTTP 错误响应：`{"error": <消息>, "statusCode": <状态码>}`
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ScrapeError> for AppError {
    fn from(err: ScrapeError) -> Self {
        match err {
            ScrapeError::Validation(message) => Self::bad_request(message),
            ScrapeError::Upstream { status, message } => Self::new(
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                message,
            ),
            ScrapeError::Transport(message) => Self::new(StatusCode::BAD_GATEWAY, message),
            // 内部错误不向调用方暴露细节，细节已记录在日志中
            ScrapeError::Configuration(_) | ScrapeError::Unclassified(_) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message,
            "statusCode": self.status.as_u16(),
        }));
        (self.status, body).into_response()
    }
}
