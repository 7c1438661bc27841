//! Message handlers module
//! 
//! The bots are driven by buttons; free text only gets a hint

use teloxide::{Bot, types::Message, prelude::*};
use tracing::debug;
use crate::utils::errors::Result;

pub const TEXT_HINT: &str = "Я понимаю только кнопки и команды. Откройте меню с помощью команды /start или посмотрите /help";

/// Handle incoming non-command messages in private chats
pub async fn handle_message(bot: Bot, msg: Message) -> Result<()> {
    let chat_id = msg.chat.id;
    if !chat_id.is_user() {
        return Ok(());
    }

    debug!(chat_id = ?chat_id, has_text = msg.text().is_some(), "Replying with usage hint");
    bot.send_message(chat_id, TEXT_HINT).await?;
    Ok(())
}
