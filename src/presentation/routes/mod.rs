// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::ServerSettings;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Extension, Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// 创建状态服务路由
///
/// # 参数
///
/// * `metrics` - Prometheus 记录器句柄，未安装时 `/metrics` 返回 503
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes(metrics: Option<PrometheusHandle>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version))
        .route("/metrics", get(render_metrics))
        .layer(Extension(metrics))
        .layer(TraceLayer::new_for_http())
}

/// 启动状态服务
pub async fn serve(
    settings: &ServerSettings,
    metrics: Option<PrometheusHandle>,
) -> std::io::Result<()> {
    let addr = format!("{}:{}", settings.host, settings.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Status server listening on {}", addr);

    axum::serve(listener, routes(metrics)).await
}

/// 健康检查端点
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

async fn render_metrics(Extension(metrics): Extension<Option<PrometheusHandle>>) -> Response {
    match metrics {
        Some(handle) => handle.render().into_response(),
        None => (StatusCode::SERVICE_UNAVAILABLE, "metrics recorder not installed").into_response(),
    }
}
