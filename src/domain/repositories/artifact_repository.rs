// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::artifact::{Artifact, ArtifactToken};
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RepositoryError {
    /// 记录未找到或已过期
    #[error("Artifact not found: {0}")]
    NotFound(ArtifactToken),
}

/// 产物仓库特质
///
/// 保存已发送给用户的分类文件，供后续存活过滤按令牌取回
#[async_trait]
pub trait ArtifactRepository: Send + Sync {
    /// 保存产物并签发令牌
    async fn register(&self, artifact: Artifact) -> ArtifactToken;
    /// 根据令牌查找产物
    async fn find(&self, token: &ArtifactToken) -> Result<Artifact, RepositoryError>;
    /// 删除保存时间超过 `ttl` 的产物，返回删除数量
    async fn expire(&self, ttl: Duration) -> u64;
    /// 当前保存的产物数量
    async fn count(&self) -> usize;
}
