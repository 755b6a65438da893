// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 帖子（scraped_post）：归一化后对外返回的帖子
/// - 抓取配置（scraper_config）：上游地址、请求头和默认条数
pub mod scraped_post;
pub mod scraper_config;
