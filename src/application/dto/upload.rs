// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::artifact::{Artifact, ArtifactToken};
use crate::domain::services::classification_run::RunStats;

/// 允许上传的文件扩展名
pub const ACCEPTED_EXTENSION: &str = ".txt";

/// 用户上传的文档
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    /// 原始文件名，Telegram 允许文档没有文件名
    pub file_name: Option<String>,
    /// 文件内容
    pub bytes: Vec<u8>,
}

impl UploadedDocument {
    pub fn new(file_name: Option<String>, bytes: Vec<u8>) -> Self {
        Self { file_name, bytes }
    }
}

/// 是否为可接受的文件名（`.txt`，不区分大小写）
pub fn is_accepted_file_name(file_name: Option<&str>) -> bool {
    file_name
        .map(|name| name.to_lowercase().ends_with(ACCEPTED_EXTENSION))
        .unwrap_or(false)
}

/// 分类产物及其令牌
///
/// 只有非空产物会登记到仓库并获得令牌，空产物没有清理按钮
#[derive(Debug, Clone)]
pub struct RegisteredArtifact {
    pub token: Option<ArtifactToken>,
    pub artifact: Artifact,
}

/// 一次分类运行的结果
#[derive(Debug, Clone)]
pub struct ClassificationReport {
    /// 按 频道、群组、机器人、消息 顺序排列的四个产物
    pub artifacts: Vec<RegisteredArtifact>,
    pub stats: RunStats,
}

impl ClassificationReport {
    /// 所有产物中的链接总数
    pub fn total_links(&self) -> usize {
        self.artifacts
            .iter()
            .map(|entry| entry.artifact.line_count())
            .sum()
    }
}
