// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::FixedPageEngine;
use linksieve::application::dto::upload::UploadedDocument;
use linksieve::application::use_cases::classify_use_case::{ClassifyUseCase, UploadError};
use linksieve::domain::models::link::Category;
use linksieve::domain::repositories::artifact_repository::ArtifactRepository;
use linksieve::domain::services::classifier::LinkClassifier;
use linksieve::infrastructure::repositories::artifact_repo_impl::InMemoryArtifactRepository;
use std::sync::Arc;

fn setup(
    engine: FixedPageEngine,
) -> (
    ClassifyUseCase<InMemoryArtifactRepository>,
    Arc<FixedPageEngine>,
    Arc<InMemoryArtifactRepository>,
) {
    let engine = Arc::new(engine);
    let repo = Arc::new(InMemoryArtifactRepository::new());
    let classifier = Arc::new(LinkClassifier::new(engine.clone()));
    (ClassifyUseCase::new(classifier, repo.clone()), engine, repo)
}

fn content_of(report: &linksieve::application::dto::upload::ClassificationReport, category: Category) -> String {
    report
        .artifacts
        .iter()
        .find(|entry| entry.artifact.category == category)
        .map(|entry| entry.artifact.content.clone())
        .unwrap()
}

#[tokio::test]
async fn test_end_to_end_classification() {
    let (use_case, engine, _) = setup(
        FixedPageEngine::default().with_page("https://t.me/somegroup", "<div>812 members</div>"),
    );
    let lines = [
        " check https://t.me/examplebot now",
        "dup: https://t.me/examplebot",
        "https://t.me/c/555/10",
        "https://t.me/c/555/99",
        "https://t.me/somegroup",
    ];

    let report = use_case
        .execute(UploadedDocument::new(
            Some("links.txt".to_string()),
            lines.join("\n").into_bytes(),
        ))
        .await
        .unwrap();

    assert_eq!(content_of(&report, Category::Bot), "https://t.me/examplebot\n");
    assert_eq!(content_of(&report, Category::Message), "https://t.me/c/555/10\n");
    assert_eq!(content_of(&report, Category::Group), "https://t.me/somegroup\n");
    assert_eq!(content_of(&report, Category::Channel), "");
    assert_eq!(engine.calls(), vec!["https://t.me/somegroup"]);
}

#[tokio::test]
async fn test_markdown_export_with_unreachable_pages() {
    let (use_case, _, repo) = setup(
        FixedPageEngine::default()
            .with_page("https://t.me/news", "<b>90 000 subscribers</b>")
            .with_page("https://t.me/chat", "<b>1 200 members, 40 online</b>"),
    );
    let content = "\
# Collection
* [News](https://t.me/news)
* [Chat](https://t.me/chat) and [again](https://t.me/chat)
* **https://t.me/offline.**
* Private: https://t.me/c/42/7 https://t.me/c/42/8 https://t.me/c/x/1
* [Helper](https://t.me/HelperBot/)
";

    let report = use_case
        .execute(UploadedDocument::new(
            Some("Export.TXT".to_string()),
            content.as_bytes().to_vec(),
        ))
        .await
        .unwrap();

    assert_eq!(
        content_of(&report, Category::Channel),
        "https://t.me/news\nhttps://t.me/offline.\n"
    );
    assert_eq!(content_of(&report, Category::Group), "https://t.me/chat\n");
    assert_eq!(content_of(&report, Category::Bot), "https://t.me/HelperBot/\n");
    assert_eq!(content_of(&report, Category::Message), "https://t.me/c/42/7\n");
    assert_eq!(report.stats.dropped, 1);
    assert_eq!(repo.count().await, 4);
}

#[tokio::test]
async fn test_rejected_upload_does_no_work() {
    let (use_case, engine, repo) = setup(FixedPageEngine::default());

    let err = use_case
        .execute(UploadedDocument::new(
            Some("links.pdf".to_string()),
            b"https://t.me/somegroup".to_vec(),
        ))
        .await
        .unwrap_err();

    assert_eq!(err, UploadError::UnsupportedFileType("links.pdf".to_string()));
    assert!(engine.calls().is_empty());
    assert_eq!(repo.count().await, 0);
}
