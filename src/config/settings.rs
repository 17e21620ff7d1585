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

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// 兼容部署习惯的令牌环境变量
pub const BOT_TOKEN_ENV: &str = "BOT_TOKEN";

/// 配置加载错误
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Bot token is not set (set BOT_TOKEN or LINKSIEVE__BOT__TOKEN)")]
    MissingToken,

    #[error("Invalid setting {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// 应用程序配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 机器人配置
    pub bot: BotSettings,
    /// 探测配置
    pub probe: ProbeSettings,
    /// 产出文件配置
    pub artifacts: ArtifactSettings,
    /// 状态服务配置
    pub server: ServerSettings,
}

/// 机器人配置设置
#[derive(Clone, Deserialize)]
pub struct BotSettings {
    /// Telegram 机器人令牌
    #[serde(default)]
    pub token: String,
}

impl std::fmt::Debug for BotSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotSettings")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// 探测配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ProbeSettings {
    /// 单次请求超时时间（秒）
    pub timeout_secs: u64,
    /// 所有探测请求共享的 User-Agent
    pub user_agent: String,
}

impl ProbeSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 7,
            user_agent: "Mozilla/5.0".to_string(),
        }
    }
}

/// 产出文件配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactSettings {
    /// 产出文件保留时间（秒）
    pub ttl_secs: u64,
    /// 过期清理间隔（秒）
    pub sweep_interval_secs: u64,
}

impl ArtifactSettings {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }
}

/// 状态服务配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 是否启动健康检查与指标服务
    pub enabled: bool,
    /// 监听主机地址
    pub host: String,
    /// 监听端口
    pub port: u16,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次合并默认值、`config/default`、`config/{APP_ENVIRONMENT}`、
    /// `LINKSIEVE__*` 环境变量以及 `BOT_TOKEN`
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(SettingsError)` - 配置加载失败或缺少令牌
    pub fn new() -> Result<Self, SettingsError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("LINKSIEVE").separator("__"))
            .set_override_option(
                "bot.token",
                std::env::var(BOT_TOKEN_ENV).ok().filter(|t| !t.trim().is_empty()),
            )?;

        Self::from_builder(builder)
    }

    /// 内置默认值
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let probe = ProbeSettings::default();
        Config::builder()
            .set_default("bot.token", "")?
            .set_default("probe.timeout_secs", probe.timeout_secs)?
            .set_default("probe.user_agent", probe.user_agent)?
            .set_default("artifacts.ttl_secs", 24 * 60 * 60)?
            .set_default("artifacts.sweep_interval_secs", 60 * 60)?
            .set_default("server.enabled", false)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)
    }

    /// 从已组装的配置源构建并校验
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, SettingsError> {
        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// 校验配置
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.bot.token.trim().is_empty() {
            return Err(SettingsError::MissingToken);
        }
        if self.probe.timeout_secs == 0 {
            return Err(SettingsError::Invalid {
                key: "probe.timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.probe.user_agent.trim().is_empty() {
            return Err(SettingsError::Invalid {
                key: "probe.user_agent",
                reason: "must not be empty".to_string(),
            });
        }
        if self.artifacts.sweep_interval_secs == 0 {
            return Err(SettingsError::Invalid {
                key: "artifacts.sweep_interval_secs",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
