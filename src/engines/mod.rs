// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 上游客户端模块
///
/// 定义上游客户端特质和失败类型，并提供基于reqwest的实现
pub mod reqwest_engine;
pub mod traits;
