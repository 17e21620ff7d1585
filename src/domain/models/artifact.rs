// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::bucket::Bucket;
use super::link::Category;
use std::fmt;
use uuid::Uuid;

/// 存活过滤产物的文件名前缀
pub const ALIVE_PREFIX: &str = "alive_";

/// 产物引用令牌
///
/// 注册产物时签发，嵌入按钮回调数据中，需满足 Telegram 64 字节的回调长度限制
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactToken(String);

impl ArtifactToken {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ArtifactToken {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ArtifactToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 内存中的链接列表文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// 发送给用户时使用的文件名
    pub file_name: String,
    /// 来源分类
    pub category: Category,
    /// 每行一个链接，以换行结尾
    pub content: String,
}

impl Artifact {
    /// 由分类桶生成产物
    pub fn from_bucket(category: Category, bucket: &Bucket) -> Self {
        Self {
            file_name: category.file_name().to_string(),
            category,
            content: bucket.serialize(),
        }
    }

    /// 由存活链接生成派生产物，文件名加上 `alive_` 前缀
    pub fn derive_alive(&self, alive: &[String]) -> Self {
        let mut content = String::new();
        for link in alive {
            content.push_str(link);
            content.push('\n');
        }
        Self {
            file_name: format!("{}{}", ALIVE_PREFIX, self.file_name),
            category: self.category,
            content,
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.lines()
    }

    pub fn line_count(&self) -> usize {
        self.content.lines().filter(|l| !l.trim().is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.content.into_bytes()
    }
}
