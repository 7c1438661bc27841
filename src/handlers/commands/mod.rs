//! Command handlers module
//! 
//! This module contains handlers for all bot commands like /start, /help, etc.

pub mod start;
pub mod help;
pub mod stats;
pub mod export;

use teloxide::{Bot, types::Message, utils::command::BotCommands};
use tracing::error;
use crate::utils::errors::{Result, TechCardsError};
use crate::services::ServiceFactory;
use crate::handlers::reply::send_error_message;

/// All available bot commands
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Доступные команды:")]
pub enum Command {
    #[command(description = "Главное меню")]
    Start,
    #[command(description = "Справка")]
    Help,
    #[command(description = "Моя статистика")]
    Stats,
    #[command(description = "Сбросить прогресс")]
    Reset,
    #[command(description = "Вся теория одним HTML-файлом")]
    Export,
}

/// Main command dispatcher
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    services: ServiceFactory,
) -> Result<()> {
    let chat_id = msg.chat.id;
    let result = match cmd {
        Command::Start => start::handle_start(&bot, &msg, &services).await,
        Command::Help => help::handle_help(&bot, &msg, &services).await,
        Command::Stats => stats::handle_stats(&bot, &msg, &services).await,
        Command::Reset => stats::handle_reset(&bot, &msg, &services).await,
        Command::Export => export::handle_export(&bot, &msg, &services).await,
    };

    if let Err(e) = result {
        error!(error = %e, severity = %e.severity(), command = ?cmd, "Error handling command");
        send_error_message(&bot, chat_id).await;
        if !e.is_recoverable() {
            return Err(e);
        }
    }
    Ok(())
}

/// Telegram id of the message author
pub(crate) fn sender_id(msg: &Message) -> Result<i64> {
    msg.from
        .as_ref()
        .map(|user| user.id.0 as i64)
        .ok_or_else(|| TechCardsError::InvalidInput("No user in message".to_string()))
}
