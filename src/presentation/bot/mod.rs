// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Telegram 机器人交互层
///
/// 接收上传的文件和按钮回调，调用分类与存活检测用例
pub mod handlers;
pub mod keyboards;
pub mod messages;

use crate::application::use_cases::classify_use_case::ClassifyUseCase;
use crate::application::use_cases::liveness_use_case::LivenessUseCase;
use crate::domain::repositories::artifact_repository::ArtifactRepository;
use crate::presentation::errors::BotError;
use std::sync::Arc;
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use tracing::{debug, error, info, warn};

/// 处理器共享的状态
pub struct BotState<AR> {
    pub classify: ClassifyUseCase<AR>,
    pub liveness: LivenessUseCase<AR>,
}

impl<AR> BotState<AR>
where
    AR: ArtifactRepository + 'static,
{
    pub fn new(classify: ClassifyUseCase<AR>, liveness: LivenessUseCase<AR>) -> Self {
        Self { classify, liveness }
    }
}

/// 构建更新处理树
///
/// 消息分支处理 `/start` 与文档上传，回调分支处理清理按钮。
/// 不同聊天的更新由调度器并发处理，同一聊天内按顺序处理。
pub fn schema<AR>() -> UpdateHandler<BotError>
where
    AR: ArtifactRepository + 'static,
{
    dptree::entry()
        .branch(
            Update::filter_message()
                .branch(
                    dptree::filter(|msg: Message| msg.text().is_some_and(handlers::is_start_command))
                        .endpoint(|bot: Bot, msg: Message| async move {
                            if let Err(e) = handlers::handle_start(&bot, &msg).await {
                                error!(chat_id = msg.chat.id.0, "start handler error: {}", e);
                            }
                            Ok(())
                        }),
                )
                .branch(
                    dptree::filter_map(|msg: Message| msg.document().cloned()).endpoint(
                        |bot: Bot, state: Arc<BotState<AR>>, msg: Message, doc: teloxide::types::Document| async move {
                            if let Err(e) = handlers::handle_document(&bot, &state, &msg, &doc).await {
                                error!(chat_id = msg.chat.id.0, "document handler error: {}", e);
                                if let Err(e) = bot
                                    .send_message(msg.chat.id, messages::PROCESSING_FAILED)
                                    .await
                                {
                                    warn!(chat_id = msg.chat.id.0, "failed to send error notice: {}", e);
                                }
                            }
                            Ok(())
                        },
                    ),
                ),
        )
        .branch(Update::filter_callback_query().endpoint(
            |bot: Bot, state: Arc<BotState<AR>>, q: CallbackQuery| async move {
                let user_id = q.from.id.0;
                if let Err(e) = handlers::handle_clean_callback(&bot, &state, q).await {
                    error!(user_id, "callback handler error: {}", e);
                }
                Ok(())
            },
        ))
}

/// 启动长轮询，直到收到 Ctrl-C
pub async fn run<AR>(bot: Bot, state: Arc<BotState<AR>>)
where
    AR: ArtifactRepository + 'static,
{
    info!("Starting Telegram dispatcher with long polling");

    Dispatcher::builder(bot, schema::<AR>())
        .dependencies(dptree::deps![state])
        .default_handler(|upd| async move {
            debug!("Unhandled update: {:?}", upd.kind);
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "Error in update handler",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Telegram dispatcher stopped");
}
