// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::link::{Category, Link};
use std::collections::HashSet;

/// 去重键
///
/// 消息链接按会话ID去重，其余分类按链接文本去重
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DedupKey {
    ChatId(String),
    Link(String),
}

/// 单个分类的有序去重集合
///
/// 保留首次插入顺序，每个去重键最多出现一次
#[derive(Debug, Default, Clone)]
pub struct Bucket {
    links: Vec<Link>,
    seen: HashSet<DedupKey>,
}

impl Bucket {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入链接
    ///
    /// # 返回值
    ///
    /// 键此前未出现时插入并返回true，否则丢弃并返回false
    pub fn insert(&mut self, key: DedupKey, link: Link) -> bool {
        if !self.seen.insert(key) {
            return false;
        }
        self.links.push(link);
        true
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// 序列化为每行一个链接、每行以换行结尾的文本
    pub fn serialize(&self) -> String {
        let mut out = String::with_capacity(self.links.iter().map(|l| l.as_str().len() + 1).sum());
        for link in &self.links {
            out.push_str(link.as_str());
            out.push('\n');
        }
        out
    }
}

/// 一次分类运行持有的四个分类桶
///
/// 每次运行独立创建，桶之间不做跨分类去重
#[derive(Debug, Default, Clone)]
pub struct CategoryBuckets {
    channels: Bucket,
    groups: Bucket,
    bots: Bucket,
    messages: Bucket,
}

impl CategoryBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> &Bucket {
        match category {
            Category::Channel => &self.channels,
            Category::Group => &self.groups,
            Category::Bot => &self.bots,
            Category::Message => &self.messages,
        }
    }

    fn get_mut(&mut self, category: Category) -> &mut Bucket {
        match category {
            Category::Channel => &mut self.channels,
            Category::Group => &mut self.groups,
            Category::Bot => &mut self.bots,
            Category::Message => &mut self.messages,
        }
    }

    /// 将已分类的链接收集到对应的桶中
    pub fn collect(&mut self, category: Category, key: DedupKey, link: Link) -> bool {
        self.get_mut(category).insert(key, link)
    }

    /// 所有桶中的链接总数
    pub fn total(&self) -> usize {
        Category::ALL.iter().map(|c| self.get(*c).len()).sum()
    }

    /// 按固定分类顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = (Category, &Bucket)> {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}
