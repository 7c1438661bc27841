//! Topic menus of the interview preparation bot

use tracing::debug;
use crate::handlers::commands::stats::stats_screen;
use crate::handlers::{reply::edit_screen, screens};
use crate::models::Section;
use crate::utils::errors::Result;
use crate::utils::logging::log_user_action;
use super::CallbackContext;

pub async fn show_menu(ctx: &CallbackContext<'_>) -> Result<()> {
    let screen = screens::catalog_menu(&ctx.services.settings.content.sections);
    edit_screen(ctx.bot, ctx.chat_id, ctx.message_id, screen).await
}

pub async fn show_section(ctx: &CallbackContext<'_>, section: Section) -> Result<()> {
    let cards = ctx.services.catalog.deck(section);
    debug!(user_id = ctx.user_id, section = %section, topics = cards.len(), "Showing topic list");
    edit_screen(ctx.bot, ctx.chat_id, ctx.message_id, screens::topic_list(section, cards)).await
}

pub async fn show_topic(ctx: &CallbackContext<'_>, section: Section, index: usize) -> Result<()> {
    let card = ctx.services.deck_service.view_topic(ctx.user_id, section, index).await?;
    let screen = screens::topic(section, card, ctx.message_limit());
    edit_screen(ctx.bot, ctx.chat_id, ctx.message_id, screen).await
}

pub async fn show_stats(ctx: &CallbackContext<'_>) -> Result<()> {
    let screen = stats_screen(ctx.user_id, ctx.services).await;
    edit_screen(ctx.bot, ctx.chat_id, ctx.message_id, screen).await?;
    log_user_action(ctx.user_id, "stats", None);
    Ok(())
}
