// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// 链接匹配模式：`http(s)://t.me/` 后跟任意非空白字符
///
/// 贪婪匹配到下一个空白字符为止，结尾的标点符号会被视为链接的一部分
static LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://t\.me/\S+").expect("Failed to compile link regex"));

/// 私有会话消息链接中的会话ID
static CHAT_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/c/(\d+)").expect("Failed to compile chat id regex"));

/// 清洗时移除的 Markdown 装饰字符
const DECORATION_CHARS: [char; 5] = ['*', '(', ')', '[', ']'];

/// 快速预筛选标记，不包含该标记的行不会进入正则提取
pub const LINK_MARKER: &str = "t.me/";

/// 链接分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// 公开频道
    Channel,
    /// 公开群组
    Group,
    /// 机器人
    Bot,
    /// 私有会话中的消息永久链接
    Message,
}

impl Category {
    /// 输出顺序固定为 频道、群组、机器人、消息
    pub const ALL: [Category; 4] = [
        Category::Channel,
        Category::Group,
        Category::Bot,
        Category::Message,
    ];

    /// 分类的复数名称，用于文件名和说明文字
    pub fn plural(&self) -> &'static str {
        match self {
            Category::Channel => "channels",
            Category::Group => "groups",
            Category::Bot => "bots",
            Category::Message => "messages",
        }
    }

    /// 分类对应的输出文件名
    pub fn file_name(&self) -> &'static str {
        match self {
            Category::Channel => "channels.txt",
            Category::Group => "groups.txt",
            Category::Bot => "bots.txt",
            Category::Message => "messages.txt",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Channel => "channel",
            Category::Group => "group",
            Category::Bot => "bot",
            Category::Message => "message",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 从文本中提取出的 t.me 链接
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Link(String);

impl Link {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 私有会话链接 (`/c/<id>/...`) 的会话ID
    ///
    /// # 返回值
    ///
    /// * `Some(id)` - `/c/` 后紧跟数字
    /// * `None` - 链接不含 `/c/` 或其后没有数字
    pub fn chat_id(&self) -> Option<&str> {
        CHAT_ID_PATTERN
            .captures(&self.0)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// 是否指向私有会话（包含 `/c/` 路径段）
    pub fn is_private_chat(&self) -> bool {
        self.0.contains("/c/")
    }

    /// 去掉结尾斜杠后的最后一个路径段
    pub fn last_segment(&self) -> &str {
        let trimmed = self.0.trim_end_matches('/');
        trimmed.rsplit('/').next().unwrap_or(trimmed)
    }

    /// 最后一个路径段以 `bot` 结尾（不区分大小写）
    pub fn is_bot(&self) -> bool {
        self.last_segment().to_lowercase().ends_with("bot")
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Link {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// 清洗一行文本
///
/// 移除所有 `*`、`(`、`)`、`[`、`]` 字符并去除首尾空白
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !DECORATION_CHARS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// 提取一行文本中的所有链接
///
/// 按首次出现顺序返回，不重叠。返回的迭代器是惰性的，
/// 重新调用即可重新遍历。
pub fn extract(line: &str) -> impl Iterator<Item = Link> + '_ {
    LINK_PATTERN
        .find_iter(line)
        .map(|m| Link(m.as_str().to_string()))
}
