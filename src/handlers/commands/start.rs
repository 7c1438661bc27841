//! Start command handler
//!
//! Shows the main menu of the configured bot variant

use teloxide::{Bot, types::Message};
use tracing::debug;
use crate::config::BotVariant;
use crate::handlers::{reply::send_screen, screens};
use crate::services::ServiceFactory;
use crate::utils::errors::Result;
use crate::utils::logging::log_user_action;
use super::sender_id;

/// Handle /start command - main entry point of every variant
pub async fn handle_start(bot: &Bot, msg: &Message, services: &ServiceFactory) -> Result<()> {
    let user_id = sender_id(msg)?;
    let chat_id = msg.chat.id;
    let variant = services.settings.bot.variant;

    debug!(user_id = user_id, chat_id = ?chat_id, variant = ?variant, "Processing /start command");

    let screen = match variant {
        BotVariant::Catalog => screens::catalog_welcome(&services.settings.content.sections),
        BotVariant::Trainer => screens::trainer_welcome(services.settings.content.trainer_section),
        BotVariant::Quiz => screens::quiz_welcome(),
    };
    send_screen(bot, chat_id, screen).await?;

    log_user_action(user_id, "start", None);
    Ok(())
}
