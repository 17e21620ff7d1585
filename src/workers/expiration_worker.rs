// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::artifact_repository::ArtifactRepository;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// 产物过期清理工作器
///
/// 定期删除超过保留时间的产物，过期后对应按钮会提示文件不可用
pub struct ExpirationWorker<R>
where
    R: ArtifactRepository + 'static,
{
    repository: Arc<R>,
    ttl: Duration,
    interval: Duration,
}

impl<R> ExpirationWorker<R>
where
    R: ArtifactRepository + 'static,
{
    pub fn new(repository: Arc<R>, ttl: Duration, interval: Duration) -> Self {
        Self {
            repository,
            ttl,
            interval,
        }
    }

    /// 运行工作器
    pub async fn run(&self) {
        info!(
            ttl_secs = self.ttl.as_secs(),
            interval_secs = self.interval.as_secs(),
            "Artifact expiration worker started"
        );

        let mut interval = tokio::time::interval(self.interval);

        loop {
            interval.tick().await;
            self.sweep().await;
        }
    }

    /// 执行一次清理
    pub async fn sweep(&self) -> u64 {
        let removed = self.repository.expire(self.ttl).await;
        if removed > 0 {
            info!("Cleaned up {} expired artifacts", removed);
        } else {
            debug!("No expired artifacts");
        }
        removed
    }

    /// 启动后台运行
    pub fn start(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            self.run().await;
        })
    }
}

#[cfg(test)]
#[path = "expiration_worker_test.rs"]
mod tests;
