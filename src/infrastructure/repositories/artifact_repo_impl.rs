// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::artifact::{Artifact, ArtifactToken};
use crate::domain::repositories::artifact_repository::{ArtifactRepository, RepositoryError};
use async_trait::async_trait;
use dashmap::DashMap;
use std::time::{Duration, Instant};

struct StoredArtifact {
    artifact: Artifact,
    stored_at: Instant,
}

/// 基于内存的产物仓库
///
/// 进程重启后内容丢失
#[derive(Default)]
pub struct InMemoryArtifactRepository {
    entries: DashMap<ArtifactToken, StoredArtifact>,
}

impl InMemoryArtifactRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArtifactRepository for InMemoryArtifactRepository {
    async fn register(&self, artifact: Artifact) -> ArtifactToken {
        let token = ArtifactToken::generate();
        self.entries.insert(
            token.clone(),
            StoredArtifact {
                artifact,
                stored_at: Instant::now(),
            },
        );
        token
    }

    async fn find(&self, token: &ArtifactToken) -> Result<Artifact, RepositoryError> {
        self.entries
            .get(token)
            .map(|entry| entry.artifact.clone())
            .ok_or_else(|| RepositoryError::NotFound(token.clone()))
    }

    async fn expire(&self, ttl: Duration) -> u64 {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.stored_at.elapsed() < ttl);
        before.saturating_sub(self.entries.len()) as u64
    }

    async fn count(&self) -> usize {
        self.entries.len()
    }
}
