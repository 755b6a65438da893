// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// 帖子列表查询参数
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct FeedQueryDto {
    /// 返回条数，空字符串视为未提供
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(range(min = 1, max = 50, message = "limit must be an integer between 1 and 50"))]
    pub limit: Option<i64>,
}

impl FeedQueryDto {
    /// 校验通过后的条数
    pub fn limit(&self) -> Option<u32> {
        self.limit.and_then(|l| u32::try_from(l).ok())
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<i64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom("limit must be an integer between 1 and 50")),
    }
}
