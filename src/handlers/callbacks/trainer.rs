//! Card trainer: random cards of one section without repeats
//!
//! Every screen is sent as a new message so studied cards stay in the chat.

use crate::handlers::{reply::send_screen, screens};
use crate::utils::errors::Result;
use crate::utils::logging::log_user_action;
use super::{CallbackContext, TrainerAction};

pub async fn handle_trainer_callback(ctx: &CallbackContext<'_>, action: TrainerAction) -> Result<()> {
    let section = ctx.services.settings.content.trainer_section;
    match action {
        TrainerAction::Intro => send_screen(ctx.bot, ctx.chat_id, screens::trainer_intro(section)).await,
        TrainerAction::Rules => send_screen(ctx.bot, ctx.chat_id, screens::trainer_rules()).await,
        TrainerAction::Begin | TrainerAction::Next => show_next_card(ctx).await,
        TrainerAction::Restart => {
            ctx.services.deck_service.restart(ctx.user_id, section).await;
            log_user_action(ctx.user_id, "trainer_restart", Some(section.key()));
            show_next_card(ctx).await
        }
        TrainerAction::Stats => {
            let progress = ctx.services.deck_service.progress(ctx.user_id, &[section]).await;
            match progress.first() {
                Some(p) => send_screen(ctx.bot, ctx.chat_id, screens::trainer_stats(p)).await,
                None => Ok(()),
            }
        }
    }
}

async fn show_next_card(ctx: &CallbackContext<'_>) -> Result<()> {
    let section = ctx.services.settings.content.trainer_section;
    let screen = match ctx.services.deck_service.draw_card(ctx.user_id, section).await {
        Some(draw) => {
            let card = ctx.services.catalog.card(section, draw.index)?;
            screens::trainer_card(&draw, card, ctx.message_limit())
        }
        None => screens::trainer_done(),
    };
    send_screen(ctx.bot, ctx.chat_id, screen).await
}
