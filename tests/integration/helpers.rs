// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use axum::{http::StatusCode, response::Redirect, routing::get, Router};
use linksieve::engines::traits::{EngineError, ProbeEngine, ProbeRequest, ProbeResponse};
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::net::TcpListener;

/// 按URL返回固定页面内容的探测引擎
#[derive(Default)]
pub struct FixedPageEngine {
    pages: HashMap<String, String>,
    calls: Mutex<Vec<String>>,
}

impl FixedPageEngine {
    pub fn with_page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), body.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProbeEngine for FixedPageEngine {
    async fn probe(&self, request: &ProbeRequest) -> Result<ProbeResponse, EngineError> {
        self.calls.lock().unwrap().push(request.url.clone());
        self.pages
            .get(&request.url)
            .map(|body| ProbeResponse {
                status_code: 200,
                body: Some(body.clone()),
                response_time_ms: 0,
            })
            .ok_or_else(|| EngineError::Other("unreachable".to_string()))
    }

    fn name(&self) -> &'static str {
        "fixed-page"
    }
}

/// 启动本地HTTP服务，返回基础地址
pub async fn start_link_server() -> String {
    let app = Router::new()
        .route("/alive", get(|| async { "ok" }))
        .route("/moved", get(|| async { Redirect::permanent("/alive") }))
        .route("/gone", get(|| async { StatusCode::NOT_FOUND }))
        .route("/broken", get(|| async { StatusCode::BAD_GATEWAY }));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}
