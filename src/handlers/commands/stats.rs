//! Progress commands: /stats and /reset

use teloxide::{Bot, types::{ChatId, Message}, prelude::*};
use crate::config::BotVariant;
use crate::handlers::{reply::send_screen, screens};
use crate::handlers::reply::Screen;
use crate::services::ServiceFactory;
use crate::utils::errors::Result;
use crate::utils::logging::log_user_action;
use super::sender_id;

/// Handle /stats command
pub async fn handle_stats(bot: &Bot, msg: &Message, services: &ServiceFactory) -> Result<()> {
    let user_id = sender_id(msg)?;
    send_stats(bot, msg.chat.id, user_id, services).await
}

/// Progress screen of the configured variant, shared with the menu buttons
pub async fn stats_screen(user_id: i64, services: &ServiceFactory) -> Screen {
    let settings = &services.settings;
    match settings.bot.variant {
        BotVariant::Catalog => {
            let progress = services
                .deck_service
                .progress(user_id, &settings.content.sections)
                .await;
            screens::catalog_stats(&progress)
        }
        BotVariant::Trainer => {
            let section = settings.content.trainer_section;
            let progress = services.deck_service.progress(user_id, &[section]).await;
            match progress.first() {
                Some(p) => screens::trainer_stats(p),
                None => screens::trainer_welcome(section),
            }
        }
        BotVariant::Quiz => screens::quiz_stats(&services.game_manager.level_progress(user_id).await),
    }
}

pub async fn send_stats(bot: &Bot, chat_id: ChatId, user_id: i64, services: &ServiceFactory) -> Result<()> {
    let screen = stats_screen(user_id, services).await;
    send_screen(bot, chat_id, screen).await?;
    log_user_action(user_id, "stats", None);
    Ok(())
}

/// Handle /reset command
pub async fn handle_reset(bot: &Bot, msg: &Message, services: &ServiceFactory) -> Result<()> {
    let user_id = sender_id(msg)?;
    let removed = services.reset_user(user_id).await;

    let text = if removed {
        "🔄 Прогресс сброшен. Начните заново с помощью команды /start"
    } else {
        "Прогресса пока нет. Начните с команды /start"
    };
    bot.send_message(msg.chat.id, text).await?;

    log_user_action(user_id, "reset", Some(if removed { "progress cleared" } else { "no progress" }));
    Ok(())
}
