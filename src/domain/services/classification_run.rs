// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::bucket::CategoryBuckets;
use crate::domain::models::link::{self, LINK_MARKER};
use crate::domain::services::classifier::LinkClassifier;
use crate::infrastructure::metrics;
use tracing::trace;

/// 单次运行的统计信息
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// 处理的行数
    pub lines: usize,
    /// 提取出的链接数（含重复）
    pub extracted: usize,
    /// 因缺少会话ID被丢弃的链接数
    pub dropped: usize,
    /// 因重复被丢弃的链接数
    pub duplicates: usize,
}

/// 一次分类运行
///
/// 持有本次运行的分类桶和去重状态，按输入行顺序依次处理链接。
/// 不同运行之间不共享任何可变状态。
pub struct ClassificationRun<'a> {
    classifier: &'a LinkClassifier,
    buckets: CategoryBuckets,
    stats: RunStats,
}

impl<'a> ClassificationRun<'a> {
    pub fn new(classifier: &'a LinkClassifier) -> Self {
        Self {
            classifier,
            buckets: CategoryBuckets::new(),
            stats: RunStats::default(),
        }
    }

    /// 处理一行原始文本
    ///
    /// 先清洗装饰字符，不含 `t.me/` 的行直接跳过
    pub async fn process_line(&mut self, raw: &str) {
        self.stats.lines += 1;

        let line = link::normalize(raw);
        if !line.contains(LINK_MARKER) {
            return;
        }

        for link in link::extract(&line) {
            self.stats.extracted += 1;

            let Some(classification) = self.classifier.classify(&link).await else {
                self.stats.dropped += 1;
                continue;
            };

            let category = classification.category;
            if self.buckets.collect(category, classification.key, link) {
                metrics::record_link_classified(category.as_str());
            } else {
                trace!(%category, "duplicate link discarded");
                self.stats.duplicates += 1;
            }
        }
    }

    /// 依次处理多行文本
    pub async fn process_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.process_line(line.as_ref()).await;
        }
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// 结束运行，交出分类桶
    pub fn finish(self) -> (CategoryBuckets, RunStats) {
        (self.buckets, self.stats)
    }
}
