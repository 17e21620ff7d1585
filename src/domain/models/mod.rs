// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 链接（link）：链接提取、清洗与分类标签
/// - 分类桶（bucket）：按去重键保序收集链接
/// - 产物（artifact）：发送给用户的链接列表文件
pub mod artifact;
pub mod bucket;
pub mod link;
