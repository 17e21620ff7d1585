// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 表示层模块
///
/// - 机器人（bot）：Telegram 更新处理
/// - 路由（routes）：健康检查、版本与指标端点
pub mod bot;
pub mod errors;
pub mod routes;
