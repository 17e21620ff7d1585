// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// - 分类服务（classifier）：词法规则加一次页面探测
/// - 分类运行（classification_run）：单次运行的去重收集
/// - 存活检测（liveness）：逐个探测并过滤失效链接
pub mod classification_run;
pub mod classifier;
pub mod liveness;
