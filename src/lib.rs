// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含上传分类与失效链接清理两个用例
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含链接模型、分类规则、去重收集与存活检测
pub mod domain;

/// 引擎模块
///
/// 实现对外HTTP探测
pub mod engines;

/// 基础设施模块
///
/// 提供产物仓库实现与指标记录
pub mod infrastructure;

/// 表示层模块
///
/// Telegram 机器人交互与状态服务
pub mod presentation;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;

/// 工作器模块
///
/// 实现后台清理任务
pub mod workers;
