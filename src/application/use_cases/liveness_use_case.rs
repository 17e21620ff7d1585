// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::{
    models::artifact::{Artifact, ArtifactToken},
    repositories::artifact_repository::{ArtifactRepository, RepositoryError},
    services::liveness::LivenessProber,
};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LivenessUseCaseError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// 失效链接清理用例
///
/// 按令牌取回之前发送的产物，逐行检测存活并生成 `alive_` 前缀的新产物
pub struct LivenessUseCase<AR> {
    prober: Arc<LivenessProber>,
    artifact_repo: Arc<AR>,
}

impl<AR> LivenessUseCase<AR>
where
    AR: ArtifactRepository + 'static,
{
    pub fn new(prober: Arc<LivenessProber>, artifact_repo: Arc<AR>) -> Self {
        Self {
            prober,
            artifact_repo,
        }
    }

    /// 产物是否仍可用
    pub async fn lookup(&self, token: &ArtifactToken) -> Result<Artifact, LivenessUseCaseError> {
        Ok(self.artifact_repo.find(token).await?)
    }

    /// 过滤产物中的失效链接
    pub async fn execute(&self, token: &ArtifactToken) -> Result<Artifact, LivenessUseCaseError> {
        let artifact = self.lookup(token).await?;
        Ok(self.filter(&artifact).await)
    }

    /// 对已取回的产物执行存活过滤
    pub async fn filter(&self, artifact: &Artifact) -> Artifact {
        let started = Instant::now();
        let alive = self.prober.filter_alive(artifact.lines()).await;
        let derived = artifact.derive_alive(&alive);

        info!(
            file_name = %artifact.file_name,
            checked = artifact.line_count(),
            alive = alive.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "liveness filter completed"
        );

        derived
    }
}
