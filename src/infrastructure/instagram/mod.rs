// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Instagram 响应解析模块
///
/// 包含上游响应结构和归一化逻辑
pub mod normalizer;
pub mod payload;
