// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::{ProbeEngine, ProbeRequest};
use crate::infrastructure::metrics;
use std::sync::Arc;
use tracing::debug;

/// 链接存活检测服务
///
/// 存活定义为跟随重定向后的最终状态码恰好为200，任何请求失败都视为失效
pub struct LivenessProber {
    engine: Arc<dyn ProbeEngine>,
}

impl LivenessProber {
    pub fn new(engine: Arc<dyn ProbeEngine>) -> Self {
        Self { engine }
    }

    /// 检测单个链接是否存活
    pub async fn is_alive(&self, url: &str) -> bool {
        let alive = match self.engine.probe(&ProbeRequest::status(url)).await {
            Ok(response) => response.status_code == 200,
            Err(e) => {
                debug!(url, error = %e, "liveness probe failed");
                false
            }
        };
        metrics::record_liveness_probe(alive);
        alive
    }

    /// 按输入顺序逐个检测，仅保留存活的链接
    ///
    /// 每行先去除首尾空白，空行直接丢弃而不发起请求
    pub async fn filter_alive<I, S>(&self, links: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut alive = Vec::new();
        for link in links {
            let link = link.as_ref().trim();
            if link.is_empty() {
                continue;
            }
            if self.is_alive(link).await {
                alive.push(link.to_string());
            }
        }
        alive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::scripted_engine::ScriptedEngine;

    fn prober(engine: ScriptedEngine) -> (LivenessProber, Arc<ScriptedEngine>) {
        let engine = Arc::new(engine);
        (LivenessProber::new(engine.clone()), engine)
    }

    #[tokio::test]
    async fn test_only_200_is_alive() {
        let (prober, _) = prober(
            ScriptedEngine::new()
                .respond("https://t.me/ok", 200, "")
                .respond("https://t.me/gone", 404, "")
                .respond("https://t.me/error", 500, "")
                .respond("https://t.me/nocontent", 204, ""),
        );

        assert!(prober.is_alive("https://t.me/ok").await);
        assert!(!prober.is_alive("https://t.me/gone").await);
        assert!(!prober.is_alive("https://t.me/error").await);
        assert!(!prober.is_alive("https://t.me/nocontent").await);
    }

    #[tokio::test]
    async fn test_probe_failure_is_not_alive() {
        let (prober, engine) = prober(ScriptedEngine::new().fail("https://t.me/down"));

        assert!(!prober.is_alive("https://t.me/down").await);
        assert_eq!(engine.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_filter_alive_keeps_order_and_drops_dead() {
        let (prober, engine) = prober(
            ScriptedEngine::new()
                .respond("https://t.me/c", 200, "")
                .respond("https://t.me/a", 200, "")
                .respond("https://t.me/b", 404, "")
                .fail("https://t.me/d"),
        );

        let alive = prober
            .filter_alive([
                "https://t.me/c\n",
                "https://t.me/b",
                "  https://t.me/a  ",
                "",
                "https://t.me/d",
            ])
            .await;

        assert_eq!(alive, vec!["https://t.me/c", "https://t.me/a"]);
        // blank line never probed, others probed sequentially in input order
        assert_eq!(
            engine.calls(),
            vec![
                "https://t.me/c",
                "https://t.me/b",
                "https://t.me/a",
                "https://t.me/d"
            ]
        );
    }

    #[tokio::test]
    async fn test_filter_alive_empty_input() {
        let (prober, engine) = prober(ScriptedEngine::new());
        let alive = prober.filter_alive(Vec::<String>::new()).await;
        assert!(alive.is_empty());
        assert!(engine.calls().is_empty());
    }
}
