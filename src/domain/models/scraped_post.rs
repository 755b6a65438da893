// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 归一化后的帖子
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScrapedPost {
    pub id: String,
    pub shortcode: String,
    /// 没有标题边时为 `None`，序列化为 `null`
    pub caption: Option<String>,
    pub image_url: String,
    /// RFC 3339 格式，UTC，毫秒精度
    pub taken_at: String,
    pub like_count: u64,
    pub comment_count: u64,
    pub is_video: bool,
}
