// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 编排领域服务与仓库，对表示层暴露完整的业务流程
pub mod dto;
pub mod use_cases;
