// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::{
    application::dto::upload::{
        is_accepted_file_name, ClassificationReport, RegisteredArtifact, UploadedDocument,
    },
    domain::{
        models::artifact::Artifact,
        repositories::artifact_repository::ArtifactRepository,
        services::{classification_run::ClassificationRun, classifier::LinkClassifier},
    },
    infrastructure::metrics,
    utils::text_encoding::decode_utf8_lossy_ignore,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UploadError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),
}

/// 上传文件分类用例
///
/// 解码上传内容，逐行分类去重，生成四个分类产物并登记到产物仓库
pub struct ClassifyUseCase<AR> {
    classifier: Arc<LinkClassifier>,
    artifact_repo: Arc<AR>,
}

impl<AR> ClassifyUseCase<AR>
where
    AR: ArtifactRepository + 'static,
{
    pub fn new(classifier: Arc<LinkClassifier>, artifact_repo: Arc<AR>) -> Self {
        Self {
            classifier,
            artifact_repo,
        }
    }

    /// 校验上传文件类型
    ///
    /// 在下载文件内容之前调用，不合格的文件不做任何处理
    pub fn check_upload(&self, file_name: Option<&str>) -> Result<(), UploadError> {
        if is_accepted_file_name(file_name) {
            Ok(())
        } else {
            metrics::record_upload_rejected();
            Err(UploadError::UnsupportedFileType(
                file_name.unwrap_or("<unnamed>").to_string(),
            ))
        }
    }

    /// 对上传的文档执行一次完整的分类运行
    pub async fn execute(
        &self,
        document: UploadedDocument,
    ) -> Result<ClassificationReport, UploadError> {
        self.check_upload(document.file_name.as_deref())?;

        let text = decode_utf8_lossy_ignore(&document.bytes);

        let mut run = ClassificationRun::new(&self.classifier);
        run.process_lines(text.lines()).await;
        let (buckets, stats) = run.finish();

        let mut artifacts = Vec::with_capacity(4);
        for (category, bucket) in buckets.iter() {
            let artifact = Artifact::from_bucket(category, bucket);
            let token = if artifact.is_empty() {
                None
            } else {
                Some(self.artifact_repo.register(artifact.clone()).await)
            };
            artifacts.push(RegisteredArtifact { token, artifact });
        }

        info!(
            file_name = document.file_name.as_deref().unwrap_or_default(),
            lines = stats.lines,
            extracted = stats.extracted,
            duplicates = stats.duplicates,
            dropped = stats.dropped,
            "classification run completed"
        );

        Ok(ClassificationReport { artifacts, stats })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::scripted_engine::ScriptedEngine;
    use crate::infrastructure::repositories::artifact_repo_impl::InMemoryArtifactRepository;

    fn use_case(
        engine: ScriptedEngine,
    ) -> (
        ClassifyUseCase<InMemoryArtifactRepository>,
        Arc<ScriptedEngine>,
        Arc<InMemoryArtifactRepository>,
    ) {
        let engine = Arc::new(engine);
        let repo = Arc::new(InMemoryArtifactRepository::new());
        let classifier = Arc::new(LinkClassifier::new(engine.clone()));
        (ClassifyUseCase::new(classifier, repo.clone()), engine, repo)
    }

    #[tokio::test]
    async fn test_execute_produces_four_registered_artifacts() {
        let (use_case, _, repo) = use_case(ScriptedEngine::new().respond(
            "https://t.me/somegroup",
            200,
            "7 members",
        ));
        let content = "\
 check https://t.me/examplebot now
dup: https://t.me/examplebot
https://t.me/c/555/10
https://t.me/c/555/99
https://t.me/somegroup
";

        let report = use_case
            .execute(UploadedDocument::new(
                Some("links.txt".to_string()),
                content.as_bytes().to_vec(),
            ))
            .await
            .unwrap();

        let names: Vec<&str> = report
            .artifacts
            .iter()
            .map(|a| a.artifact.file_name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["channels.txt", "groups.txt", "bots.txt", "messages.txt"]
        );

        let contents: Vec<&str> = report
            .artifacts
            .iter()
            .map(|a| a.artifact.content.as_str())
            .collect();
        assert_eq!(
            contents,
            vec![
                "",
                "https://t.me/somegroup\n",
                "https://t.me/examplebot\n",
                "https://t.me/c/555/10\n"
            ]
        );
        assert_eq!(report.total_links(), 3);

        // the empty channels file gets no token and is not stored
        assert!(report.artifacts[0].token.is_none());
        assert_eq!(repo.count().await, 3);
        for entry in &report.artifacts[1..] {
            let token = entry.token.as_ref().unwrap();
            assert_eq!(repo.find(token).await.unwrap(), entry.artifact);
        }
    }

    #[tokio::test]
    async fn test_unsupported_file_type_is_rejected_without_classification() {
        let (use_case, engine, repo) = use_case(ScriptedEngine::new());

        let result = use_case
            .execute(UploadedDocument::new(
                Some("links.csv".to_string()),
                b"https://t.me/somegroup".to_vec(),
            ))
            .await;

        assert_eq!(
            result.unwrap_err(),
            UploadError::UnsupportedFileType("links.csv".to_string())
        );
        assert!(engine.calls().is_empty());
        assert_eq!(repo.count().await, 0);
    }

    #[tokio::test]
    async fn test_unnamed_document_is_rejected() {
        let (use_case, _, _) = use_case(ScriptedEngine::new());
        assert!(use_case.check_upload(None).is_err());
        assert!(use_case.check_upload(Some("UPPER.TXT")).is_ok());
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_tolerated() {
        let (use_case, _, _) = use_case(ScriptedEngine::new());
        let mut bytes = b"https://t.me/abc".to_vec();
        bytes.push(0xFF);
        bytes.extend_from_slice(b"bot\r\nnoise\r\n");

        let report = use_case
            .execute(UploadedDocument::new(Some("x.txt".to_string()), bytes))
            .await
            .unwrap();

        let bots = &report.artifacts[2].artifact;
        assert_eq!(bots.content, "https://t.me/abcbot\n");
    }

    #[tokio::test]
    async fn test_runs_do_not_share_dedup_state() {
        let (use_case, _, _) = use_case(ScriptedEngine::new());
        let document = UploadedDocument::new(
            Some("a.txt".to_string()),
            b"https://t.me/firstbot\n".to_vec(),
        );

        let first = use_case.execute(document.clone()).await.unwrap();
        let second = use_case.execute(document).await.unwrap();

        assert_eq!(first.artifacts[2].artifact.content, "https://t.me/firstbot\n");
        assert_eq!(second.artifacts[2].artifact.content, "https://t.me/firstbot\n");
        assert!(first.artifacts[2].token.is_some());
        assert_ne!(first.artifacts[2].token, second.artifacts[2].token);
    }
}
