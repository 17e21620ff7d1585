// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 机器人交互层错误类型
///
/// 只包含与 Telegram 通信失败相关的错误；业务上的拒绝（如文件类型不符）
/// 以回复消息的形式处理，不作为错误向上传播
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Telegram request failed: {0}")]
    Request(#[from] teloxide::RequestError),

    #[error("File download failed: {0}")]
    Download(#[from] teloxide::DownloadError),
}
