//! Help command handler

use teloxide::{Bot, types::Message, prelude::*, utils::command::BotCommands};
use crate::config::BotVariant;
use crate::services::ServiceFactory;
use crate::utils::errors::Result;
use super::Command;

/// Handle /help command
pub async fn handle_help(bot: &Bot, msg: &Message, services: &ServiceFactory) -> Result<()> {
    let intro = match services.settings.bot.variant {
        BotVariant::Catalog => "🤖 Бот для подготовки к собеседованиям: выберите раздел и тему, бот покажет теорию и примеры.",
        BotVariant::Trainer => "🤖 Бот-тренажёр: карточки с теорией показываются в случайном порядке и не повторяются.",
        BotVariant::Quiz => "🤖 Бот-викторина: теория, краткое резюме и вопрос, за правильные ответы начисляются очки.",
    };
    let help_text = format!("{}\n\n{}", intro, Command::descriptions());

    bot.send_message(msg.chat.id, help_text).await?;
    Ok(())
}
