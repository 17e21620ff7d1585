// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::keyboards::{clean_keyboard, parse_clean_callback};
use super::messages;
use super::BotState;
use crate::application::dto::upload::{RegisteredArtifact, UploadedDocument};
use crate::domain::models::artifact::Artifact;
use crate::domain::repositories::artifact_repository::ArtifactRepository;
use crate::presentation::errors::BotError;
use teloxide::net::Download;
use teloxide::prelude::*;
use teloxide::types::{Document, InputFile, MaybeInaccessibleMessage, MessageId};
use tracing::{info, warn};

/// Bot API 允许机器人下载的最大文件大小
const MAX_DOWNLOAD_BYTES: u32 = 20 * 1024 * 1024;

/// 处理 `/start` 命令
pub async fn handle_start(bot: &Bot, msg: &Message) -> Result<(), BotError> {
    bot.send_message(msg.chat.id, messages::WELCOME).await?;
    Ok(())
}

/// 是否为 `/start` 命令（允许 `/start@botname` 形式）
pub fn is_start_command(text: &str) -> bool {
    text.split_whitespace()
        .next()
        .map(|cmd| cmd == "/start" || cmd.starts_with("/start@"))
        .unwrap_or(false)
}

/// 处理上传的文档
///
/// 文件类型校验在下载之前完成，不合格的文件只回复提示
pub async fn handle_document<AR>(
    bot: &Bot,
    state: &BotState<AR>,
    msg: &Message,
    doc: &Document,
) -> Result<(), BotError>
where
    AR: ArtifactRepository + 'static,
{
    let chat_id = msg.chat.id;
    let file_name = doc.file_name.clone();

    if let Err(e) = state.classify.check_upload(file_name.as_deref()) {
        info!(chat_id = chat_id.0, error = %e, "rejecting upload");
        bot.send_message(chat_id, messages::TXT_ONLY).await?;
        return Ok(());
    }

    if doc.file.size > MAX_DOWNLOAD_BYTES {
        warn!(chat_id = chat_id.0, size = doc.file.size, "upload exceeds download limit");
        bot.send_message(chat_id, messages::FILE_TOO_LARGE).await?;
        return Ok(());
    }

    let file = bot.get_file(doc.file.id.clone()).await?;
    let mut bytes = Vec::with_capacity(doc.file.size as usize);
    bot.download_file(&file.path, &mut bytes).await?;

    let status = bot.send_message(chat_id, messages::RECEIVED).await?;

    info!(
        chat_id = chat_id.0,
        file_name = file_name.as_deref().unwrap_or_default(),
        size = bytes.len(),
        "processing uploaded file"
    );

    let report = match state
        .classify
        .execute(UploadedDocument::new(file_name, bytes))
        .await
    {
        Ok(report) => report,
        Err(e) => {
            // The name was accepted above; only reachable if the rules diverge.
            warn!(chat_id = chat_id.0, error = %e, "classification rejected upload");
            bot.edit_message_text(chat_id, status.id, messages::PROCESSING_FAILED)
                .await?;
            return Ok(());
        }
    };

    bot.edit_message_text(chat_id, status.id, messages::SORTED).await?;
    info!(chat_id = chat_id.0, links = report.total_links(), "sending sorted files");

    for RegisteredArtifact { token, artifact } in report.artifacts {
        let Some(token) = token else {
            bot.send_message(chat_id, messages::empty_file(&artifact.file_name))
                .await?;
            continue;
        };

        let caption = messages::category_caption(artifact.category);
        bot.send_document(chat_id, to_input_file(artifact))
            .caption(caption)
            .reply_markup(clean_keyboard(&token))
            .await?;
    }

    Ok(())
}

/// 处理清理按钮
///
/// 先应答回调以结束按钮的加载状态，非本机器人的回调数据随后忽略
pub async fn handle_clean_callback<AR>(
    bot: &Bot,
    state: &BotState<AR>,
    q: CallbackQuery,
) -> Result<(), BotError>
where
    AR: ArtifactRepository + 'static,
{
    bot.answer_callback_query(q.id.clone()).await?;

    let Some(token) = q.data.as_deref().and_then(parse_clean_callback) else {
        return Ok(());
    };

    let origin = match &q.message {
        Some(MaybeInaccessibleMessage::Regular(m)) => Some((m.chat.id, m.id)),
        _ => None,
    };
    let chat_id = origin
        .map(|(chat_id, _)| chat_id)
        .unwrap_or_else(|| ChatId::from(q.from.id));

    let artifact = match state.liveness.lookup(&token).await {
        Ok(artifact) => artifact,
        Err(e) => {
            info!(chat_id = chat_id.0, error = %e, "clean requested for unavailable file");
            notify(bot, chat_id, origin, messages::FILE_UNAVAILABLE).await?;
            return Ok(());
        }
    };

    notify(bot, chat_id, origin, messages::CHECKING).await?;

    let alive = state.liveness.filter(&artifact).await;

    if alive.is_empty() {
        bot.send_message(chat_id, messages::empty_file(&alive.file_name))
            .await?;
        return Ok(());
    }

    bot.send_document(chat_id, to_input_file(alive))
        .caption(messages::ALIVE_ONLY)
        .await?;

    Ok(())
}

/// 优先修改原文件消息的说明文字，原消息不可访问时改为发送新消息
async fn notify(
    bot: &Bot,
    chat_id: ChatId,
    origin: Option<(ChatId, MessageId)>,
    text: &str,
) -> Result<(), BotError> {
    match origin {
        Some((chat_id, message_id)) => {
            bot.edit_message_caption(chat_id, message_id)
                .caption(text)
                .await?;
        }
        None => {
            bot.send_message(chat_id, text).await?;
        }
    }
    Ok(())
}

fn to_input_file(artifact: Artifact) -> InputFile {
    let file_name = artifact.file_name.clone();
    InputFile::memory(artifact.into_bytes()).file_name(file_name)
}

#[cfg(test)]
#[path = "handlers_test.rs"]
mod tests;
