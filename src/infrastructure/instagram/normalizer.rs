// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use crate::domain::models::scraped_post::ScrapedPost;
use crate::infrastructure::instagram::payload::{ProfileResponse, UpstreamEdge, UpstreamNode};

/// 将上游响应归一化为帖子列表
///
/// 保持上游原有顺序，最多返回 `limit` 条。路径上任一段缺失都视为空列表，
/// 单条记录缺少字段时使用默认值，不会中断整批处理
pub fn normalize(payload: &Value, limit: u32) -> Vec<ScrapedPost> {
    ProfileResponse::from_payload(payload)
        .into_edges()
        .iter()
        .take(limit as usize)
        .map(|edge| project(UpstreamEdge::from_value(edge).node.unwrap_or_default()))
        .collect()
}

fn project(node: UpstreamNode) -> ScrapedPost {
    let caption = node.caption();
    ScrapedPost {
        id: node.id.unwrap_or_default(),
        shortcode: node.shortcode.unwrap_or_default(),
        caption,
        image_url: node.display_url.unwrap_or_default(),
        taken_at: format_timestamp(node.taken_at_timestamp.unwrap_or_default()),
        like_count: node.edge_liked_by.and_then(|e| e.count).unwrap_or(0),
        comment_count: node.edge_media_to_comment.and_then(|e| e.count).unwrap_or(0),
        is_video: node.is_video.unwrap_or(false),
    }
}

/// Unix 秒转 RFC 3339 毫秒字符串，无法表示的时间回退到纪元起点
fn format_timestamp(seconds: f64) -> String {
    let millis = (seconds * 1000.0).trunc();
    let instant = if millis.is_finite() {
        DateTime::<Utc>::from_timestamp_millis(millis as i64)
    } else {
        None
    };
    instant
        .unwrap_or_default()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}
