// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 单元测试用的脚本化探测引擎

use crate::engines::traits::{EngineError, ProbeEngine, ProbeRequest, ProbeResponse};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Clone)]
enum Scripted {
    Respond { status_code: u16, body: String },
    Fail,
}

/// 按URL返回预设响应的引擎，未登记的URL一律失败
#[derive(Default)]
pub struct ScriptedEngine {
    responses: HashMap<String, Scripted>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, url: &str, status_code: u16, body: &str) -> Self {
        self.responses.insert(
            url.to_string(),
            Scripted::Respond {
                status_code,
                body: body.to_string(),
            },
        );
        self
    }

    pub fn fail(mut self, url: &str) -> Self {
        self.responses.insert(url.to_string(), Scripted::Fail);
        self
    }

    /// 按调用顺序记录的URL
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProbeEngine for ScriptedEngine {
    async fn probe(&self, request: &ProbeRequest) -> Result<ProbeResponse, EngineError> {
        self.calls.lock().unwrap().push(request.url.clone());
        match self.responses.get(&request.url) {
            Some(Scripted::Respond { status_code, body }) => Ok(ProbeResponse {
                status_code: *status_code,
                body: request.read_body.then(|| body.clone()),
                response_time_ms: 0,
            }),
            Some(Scripted::Fail) | None => Err(EngineError::Timeout),
        }
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}
