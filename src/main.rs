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

use linksieve::application::use_cases::classify_use_case::ClassifyUseCase;
use linksieve::application::use_cases::liveness_use_case::LivenessUseCase;
use linksieve::config::settings::Settings;
use linksieve::domain::services::classifier::LinkClassifier;
use linksieve::domain::services::liveness::LivenessProber;
use linksieve::engines::reqwest_engine::ReqwestEngine;
use linksieve::engines::traits::ProbeEngine;
use linksieve::infrastructure::repositories::artifact_repo_impl::InMemoryArtifactRepository;
use linksieve::presentation::bot::{self, BotState};
use linksieve::presentation::routes;
use linksieve::utils::telemetry;
use linksieve::workers::expiration_worker::ExpirationWorker;
use std::sync::Arc;
use teloxide::Bot;
use tracing::{error, info};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动机器人
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting linksieve...");

    // 2. Load configuration, refusing to start without a bot token
    let settings = Settings::new()?;
    info!(
        timeout_secs = settings.probe.timeout_secs,
        user_agent = %settings.probe.user_agent,
        "Configuration loaded"
    );

    // 3. Metrics recorder and optional status server
    let metrics_handle = linksieve::infrastructure::metrics::init_metrics();
    if settings.server.enabled {
        let server_settings = settings.server.clone();
        let handle = metrics_handle.clone();
        tokio::spawn(async move {
            if let Err(e) = routes::serve(&server_settings, handle).await {
                error!("Status server failed: {}", e);
            }
        });
    }

    // 4. Probe engine shared by classification and liveness checks
    let engine: Arc<dyn ProbeEngine> = Arc::new(ReqwestEngine::new(&settings.probe)?);
    let classifier = Arc::new(LinkClassifier::new(engine.clone()));
    let prober = Arc::new(LivenessProber::new(engine));

    // 5. Artifact repository and its expiration worker
    let artifact_repo = Arc::new(InMemoryArtifactRepository::new());
    ExpirationWorker::new(
        artifact_repo.clone(),
        settings.artifacts.ttl(),
        settings.artifacts.sweep_interval(),
    )
    .start();

    // 6. Run the bot until Ctrl-C
    let state = Arc::new(BotState::new(
        ClassifyUseCase::new(classifier, artifact_repo.clone()),
        LivenessUseCase::new(prober, artifact_repo),
    ));
    bot::run(Bot::new(&settings.bot.token), state).await;

    Ok(())
}
