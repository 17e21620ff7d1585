// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施模块
///
/// - 指标（metrics）：Prometheus 指标记录
/// - 仓库实现（repositories）：内存产物仓库
pub mod metrics;
pub mod repositories;
