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

use async_trait::async_trait;
use thiserror::Error;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 超时
    #[error("Timeout")]
    Timeout,
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

/// 探测请求
#[derive(Debug, Clone)]
pub struct ProbeRequest {
    /// 目标URL
    pub url: String,
    /// 是否读取响应体
    pub read_body: bool,
}

impl ProbeRequest {
    /// 读取页面内容的请求，用于公开链接分类
    pub fn page(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            read_body: true,
        }
    }

    /// 只关心状态码的请求，用于存活检测
    pub fn status(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            read_body: false,
        }
    }
}

/// 探测响应
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    /// 跟随重定向后的最终HTTP状态码
    pub status_code: u16,
    /// 响应内容（仅当请求要求读取时）
    pub body: Option<String>,
    /// 响应时间（毫秒）
    pub response_time_ms: u64,
}

/// 探测引擎特质
///
/// 所有网络失败都以 `Err` 返回，由调用方决定失败时的语义
#[async_trait]
pub trait ProbeEngine: Send + Sync {
    /// 执行一次GET探测，不重试
    async fn probe(&self, request: &ProbeRequest) -> Result<ProbeResponse, EngineError>;

    /// 引擎名称
    fn name(&self) -> &'static str;
}
