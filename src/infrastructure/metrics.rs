// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::warn;

pub const LINKS_CLASSIFIED_TOTAL: &str = "linksieve_links_classified_total";
pub const CLASSIFICATION_FALLBACK_TOTAL: &str = "linksieve_classification_fallback_total";
pub const LIVENESS_PROBES_TOTAL: &str = "linksieve_liveness_probes_total";
pub const UPLOADS_REJECTED_TOTAL: &str = "linksieve_uploads_rejected_total";

/// 初始化指标系统
///
/// 安装全局 Prometheus 记录器并注册指标说明。
/// 记录器已被安装时（例如测试中重复调用）返回 `None`。
pub fn init_metrics() -> Option<PrometheusHandle> {
    let handle = match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => handle,
        Err(e) => {
            warn!("Failed to install Prometheus recorder: {}", e);
            return None;
        }
    };

    describe_counter!(
        LINKS_CLASSIFIED_TOTAL,
        "Total number of links added to a category bucket"
    );
    describe_counter!(
        CLASSIFICATION_FALLBACK_TOTAL,
        "Public links defaulted to channel because the page probe failed"
    );
    describe_counter!(
        LIVENESS_PROBES_TOTAL,
        "Total number of liveness probes, labelled by outcome"
    );
    describe_counter!(
        UPLOADS_REJECTED_TOTAL,
        "Uploaded documents rejected before classification"
    );

    Some(handle)
}

pub fn record_link_classified(category: &'static str) {
    counter!(LINKS_CLASSIFIED_TOTAL, "category" => category).increment(1);
}

pub fn record_classification_fallback() {
    counter!(CLASSIFICATION_FALLBACK_TOTAL).increment(1);
}

pub fn record_liveness_probe(alive: bool) {
    counter!(LIVENESS_PROBES_TOTAL, "alive" => if alive { "true" } else { "false" }).increment(1);
}

pub fn record_upload_rejected() {
    counter!(UPLOADS_REJECTED_TOTAL).increment(1);
}
