// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::bucket::DedupKey;
use crate::domain::models::link::{Category, Link};
use crate::engines::traits::{ProbeEngine, ProbeRequest};
use crate::infrastructure::metrics;
use std::sync::Arc;
use tracing::debug;

/// 单个链接的分类结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: Category,
    pub key: DedupKey,
}

/// 纯词法判定的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexicalVerdict {
    /// 无需网络即可确定分类
    Decided(Classification),
    /// 私有会话链接但 `/c/` 后没有数字，直接丢弃
    Dropped,
    /// 公开链接，需要请求页面区分群组和频道
    NeedsProbe,
}

/// 不发起网络请求的分类判定
///
/// 判定顺序：`/c/` 消息链接 > 以 `bot` 结尾的机器人 > 需要探测
pub fn classify_lexically(link: &Link) -> LexicalVerdict {
    if link.is_private_chat() {
        return match link.chat_id() {
            Some(id) => LexicalVerdict::Decided(Classification {
                category: Category::Message,
                key: DedupKey::ChatId(id.to_string()),
            }),
            None => LexicalVerdict::Dropped,
        };
    }

    if link.is_bot() {
        return LexicalVerdict::Decided(Classification {
            category: Category::Bot,
            key: DedupKey::Link(link.as_str().to_string()),
        });
    }

    LexicalVerdict::NeedsProbe
}

/// 根据公开页面内容判定群组或频道
///
/// 页面包含 `members` 为群组，其余情况（包括 `subscribers`）均为频道
pub fn category_from_page(body: &str) -> Category {
    let body = body.to_lowercase();
    if body.contains("members") {
        Category::Group
    } else {
        // "subscribers" and unrecognised pages both land here
        Category::Channel
    }
}

/// 链接分类服务
pub struct LinkClassifier {
    engine: Arc<dyn ProbeEngine>,
}

impl LinkClassifier {
    pub fn new(engine: Arc<dyn ProbeEngine>) -> Self {
        Self { engine }
    }

    /// 对单个链接进行分类
    ///
    /// # 参数
    ///
    /// * `link` - 已提取的链接
    ///
    /// # 返回值
    ///
    /// * `Some(Classification)` - 分类及其去重键
    /// * `None` - 格式错误的私有会话链接，应被静默丢弃
    pub async fn classify(&self, link: &Link) -> Option<Classification> {
        match classify_lexically(link) {
            LexicalVerdict::Decided(classification) => Some(classification),
            LexicalVerdict::Dropped => {
                debug!(url = %link, "dropping private chat link without numeric id");
                None
            }
            LexicalVerdict::NeedsProbe => Some(Classification {
                category: self.classify_public(link).await,
                key: DedupKey::Link(link.as_str().to_string()),
            }),
        }
    }

    /// 通过一次页面请求区分公开群组和频道
    ///
    /// 请求失败时默认归为频道，分类流程不会因网络错误中断
    pub async fn classify_public(&self, link: &Link) -> Category {
        match self.engine.probe(&ProbeRequest::page(link.as_str())).await {
            Ok(response) => category_from_page(response.body.as_deref().unwrap_or_default()),
            Err(e) => {
                metrics::record_classification_fallback();
                debug!(
                    url = %link,
                    engine = self.engine.name(),
                    error = %e,
                    "public link probe failed, defaulting to channel"
                );
                Category::Channel
            }
        }
    }
}

#[cfg(test)]
#[path = "classifier_test.rs"]
mod tests;
