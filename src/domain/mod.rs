// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// - 领域模型（models）：链接、分类、分类桶与产物
/// - 仓库接口（repositories）：产物保存的抽象接口
/// - 服务（services）：分类、去重收集与存活检测
pub mod models;
pub mod repositories;
pub mod services;
