// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::artifact::ArtifactToken;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

/// 失效链接清理按钮的回调前缀
pub const CLEAN_PREFIX: &str = "clean::";

const CLEAN_BUTTON_LABEL: &str = "🧹 Remove dead links";

/// 生成清理按钮的回调数据
pub fn clean_callback_data(token: &ArtifactToken) -> String {
    format!("{}{}", CLEAN_PREFIX, token)
}

/// 解析清理按钮的回调数据
///
/// 前缀不匹配或令牌为空时返回 `None`
pub fn parse_clean_callback(data: &str) -> Option<ArtifactToken> {
    data.strip_prefix(CLEAN_PREFIX)
        .filter(|token| !token.is_empty())
        .map(ArtifactToken::from)
}

/// 附加在每个分类文件上的清理按钮
pub fn clean_keyboard(token: &ArtifactToken) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        CLEAN_BUTTON_LABEL,
        clean_callback_data(token),
    )]])
}
