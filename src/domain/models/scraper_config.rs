// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashMap;
use url::Url;

/// 未配置或配置无效时使用的默认条数
pub const FALLBACK_LIMIT: u32 = 12;
/// 单次返回的最小条数
pub const MIN_LIMIT: u32 = 1;
/// 单次返回的最大条数
pub const MAX_LIMIT: u32 = 50;

/// 抓取器配置
///
/// 由配置层在启动时构造，核心逻辑只读
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// 上游接口地址
    pub base_url: Url,
    /// 每次请求附带的请求头
    pub headers: HashMap<String, String>,
    /// 默认返回条数，可能是无效值，由调用方回退
    pub default_limit: i64,
}

impl ScraperConfig {
    pub fn new(base_url: Url, headers: HashMap<String, String>, default_limit: i64) -> Self {
        Self {
            base_url,
            headers,
            default_limit,
        }
    }

    /// 计算实际生效的条数上限
    ///
    /// 请求未指定时使用配置的默认值，默认值非正数时回退到 12，
    /// 最终结果总是落在 `[1, 50]` 区间
    pub fn effective_limit(&self, requested: Option<u32>) -> u32 {
        let fallback = if self.default_limit > 0 {
            u32::try_from(self.default_limit).unwrap_or(MAX_LIMIT)
        } else {
            FALLBACK_LIMIT
        };
        requested
            .unwrap_or(fallback)
            .clamp(MIN_LIMIT, MAX_LIMIT)
    }
}
