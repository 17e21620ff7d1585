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

use crate::config::settings::ProbeSettings;
use crate::engines::traits::{EngineError, ProbeEngine, ProbeRequest, ProbeResponse};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::redirect::Policy;
use std::time::Instant;
use tracing::trace;

/// 重定向跟随上限
const MAX_REDIRECTS: usize = 10;

/// 探测引擎
///
/// 基于reqwest实现的HTTP探测引擎，所有请求共享同一组请求头和超时
#[derive(Clone)]
pub struct ReqwestEngine {
    client: reqwest::Client,
}

impl ReqwestEngine {
    /// 根据探测配置创建引擎
    ///
    /// # 参数
    ///
    /// * `settings` - 探测配置（超时、User-Agent）
    ///
    /// # 返回值
    ///
    /// * `Ok(ReqwestEngine)` - 创建成功
    /// * `Err(EngineError)` - 请求头非法或客户端构建失败
    pub fn new(settings: &ProbeSettings) -> Result<Self, EngineError> {
        let mut headers = HeaderMap::new();
        let user_agent = HeaderValue::from_str(&settings.user_agent)
            .map_err(|e| EngineError::Other(format!("Invalid user agent: {}", e)))?;
        headers.insert(USER_AGENT, user_agent);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(settings.timeout())
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ProbeEngine for ReqwestEngine {
    /// 执行HTTP探测
    ///
    /// # 参数
    ///
    /// * `request` - 探测请求
    ///
    /// # 返回值
    ///
    /// * `Ok(ProbeResponse)` - 收到响应（任意状态码）
    /// * `Err(EngineError)` - 网络错误、超时或响应体读取失败
    async fn probe(&self, request: &ProbeRequest) -> Result<ProbeResponse, EngineError> {
        let start = Instant::now();
        let response = self
            .client
            .get(&request.url)
            .send()
            .await
            .map_err(map_request_error)?;

        let status_code = response.status().as_u16();
        let body = if request.read_body {
            Some(response.text().await.map_err(map_request_error)?)
        } else {
            None
        };

        let response_time_ms = start.elapsed().as_millis() as u64;
        trace!(url = %request.url, status_code, response_time_ms, "probe completed");

        Ok(ProbeResponse {
            status_code,
            body,
            response_time_ms,
        })
    }

    /// 获取引擎名称
    fn name(&self) -> &'static str {
        "reqwest"
    }
}

fn map_request_error(e: reqwest::Error) -> EngineError {
    if e.is_timeout() {
        EngineError::Timeout
    } else {
        EngineError::RequestFailed(e)
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
