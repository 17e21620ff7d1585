// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 发送给用户的文本

use crate::domain::models::link::Category;

pub const WELCOME: &str = "🤖 Telegram link sorter\n\n\
    📄 Send me a .txt file and I will split its t.me links into:\n\
    • channels\n\
    • groups\n\
    • bots\n\
    • message links\n\n\
    Each file comes with a button that removes dead links.";

pub const TXT_ONLY: &str = "❌ Please send a .txt file only";

pub const FILE_TOO_LARGE: &str = "❌ The file is too large for the bot to download";

pub const RECEIVED: &str = "📥 File received, sorting links...";

pub const SORTED: &str = "✅ Sorting finished, sending files";

pub const FILE_UNAVAILABLE: &str = "❌ File is no longer available";

pub const CHECKING: &str = "⏳ Checking which links are alive...";

pub const ALIVE_ONLY: &str = "✅ Live links only";

pub const PROCESSING_FAILED: &str = "⚠️ Something went wrong while processing the file";

/// 分类文件的说明文字
pub fn category_caption(category: Category) -> String {
    format!("📄 {}", category.plural())
}

/// 空文件无法作为文档上传时的替代提示
pub fn empty_file(file_name: &str) -> String {
    format!("📄 {}: no links", file_name)
}
