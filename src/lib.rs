// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含入站请求的数据传输对象
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含帖子模型、抓取编排和错误分类
pub mod domain;

/// 引擎模块
///
/// 实现访问上游接口的客户端
pub mod engines;

/// 基础设施模块
///
/// 提供上游响应解析和指标导出
pub mod infrastructure;

/// 表示层模块
///
/// 处理HTTP请求和响应，包括路由、处理器和提取器
pub mod presentation;

/// 工具模块
///
/// 提供错误类型和遥测初始化
pub mod utils;
