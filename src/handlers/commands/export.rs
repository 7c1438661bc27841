//! Export command handler

use teloxide::{Bot, types::{InputFile, Message}, prelude::*};
use tracing::info;
use crate::services::ServiceFactory;
use crate::utils::errors::Result;
use crate::utils::logging::log_user_action;
use super::sender_id;

/// Handle /export command - sends the whole theory as an HTML page
pub async fn handle_export(bot: &Bot, msg: &Message, services: &ServiceFactory) -> Result<()> {
    let user_id = sender_id(msg)?;
    let (file_name, bytes) = services.exporter.html_document();
    let size = bytes.len();

    bot.send_document(msg.chat.id, InputFile::memory(bytes).file_name(file_name.clone()))
        .caption(format!("📄 {}", services.exporter.title()))
        .await?;

    info!(user_id = user_id, file_name = %file_name, size = size, "Theory document sent");
    log_user_action(user_id, "export", Some(&file_name));
    Ok(())
}
