// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::start_link_server;
use linksieve::application::use_cases::liveness_use_case::{LivenessUseCase, LivenessUseCaseError};
use linksieve::config::settings::ProbeSettings;
use linksieve::domain::models::artifact::{Artifact, ArtifactToken};
use linksieve::domain::models::link::Category;
use linksieve::domain::repositories::artifact_repository::ArtifactRepository;
use linksieve::domain::services::liveness::LivenessProber;
use linksieve::engines::reqwest_engine::ReqwestEngine;
use linksieve::infrastructure::repositories::artifact_repo_impl::InMemoryArtifactRepository;
use std::sync::Arc;

fn use_case(repo: Arc<InMemoryArtifactRepository>) -> LivenessUseCase<InMemoryArtifactRepository> {
    let engine = Arc::new(ReqwestEngine::new(&ProbeSettings::default()).unwrap());
    LivenessUseCase::new(Arc::new(LivenessProber::new(engine)), repo)
}

#[tokio::test]
async fn test_liveness_filter_over_http() {
    let base = start_link_server().await;
    let repo = Arc::new(InMemoryArtifactRepository::new());
    let content = format!(
        "{base}/gone\n{base}/alive\n{base}/broken\n\n{base}/moved\nhttp://127.0.0.1:1/refused\n",
        base = base
    );
    let token = repo
        .register(Artifact {
            file_name: "groups.txt".to_string(),
            category: Category::Group,
            content,
        })
        .await;

    let alive = use_case(repo).execute(&token).await.unwrap();

    assert_eq!(alive.file_name, "alive_groups.txt");
    assert_eq!(
        alive.content,
        format!("{base}/alive\n{base}/moved\n", base = base)
    );
}

#[tokio::test]
async fn test_liveness_filter_unknown_token() {
    let repo = Arc::new(InMemoryArtifactRepository::new());

    let err = use_case(repo)
        .execute(&ArtifactToken::from("0123456789abcdef"))
        .await
        .unwrap_err();

    assert!(matches!(err, LivenessUseCaseError::Repository(_)));
}
