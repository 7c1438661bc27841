//! Quiz: theory, summary and question screens with score and levels

use tracing::debug;
use crate::handlers::{reply::send_screen, screens};
use crate::utils::errors::{Result, TechCardsError};
use crate::utils::logging::log_user_action;
use super::{CallbackContext, QuizAction};

pub async fn handle_quiz_callback(ctx: &CallbackContext<'_>, action: QuizAction) -> Result<()> {
    let game = &ctx.services.game_manager;
    match action {
        QuizAction::Start => show_current_step(ctx).await,
        QuizAction::Rules => {
            let rules = ctx.services.settings.game_rules();
            send_screen(ctx.bot, ctx.chat_id, screens::quiz_rules(&rules)).await
        }
        QuizAction::Next { question, from } => {
            match game.next_step(ctx.user_id, question, from).await {
                Ok(_) => {}
                Err(TechCardsError::InvalidStateTransition { from, to }) => {
                    debug!(user_id = ctx.user_id, from = %from, to = %to, "Stale quiz button, showing current step");
                }
                Err(e) => return Err(e),
            }
            show_current_step(ctx).await
        }
        QuizAction::Answer { question, option } => match game.check_answer(ctx.user_id, question, option).await {
            Ok(outcome) => {
                let screen = screens::quiz_answer(&outcome, ctx.message_limit());
                send_screen(ctx.bot, ctx.chat_id, screen).await
            }
            Err(TechCardsError::InvalidStateTransition { from, .. }) => {
                debug!(user_id = ctx.user_id, step = %from, "Answer to a question not on screen");
                show_current_step(ctx).await
            }
            Err(e) => Err(e),
        },
        QuizAction::Stats => {
            let progress = game.level_progress(ctx.user_id).await;
            send_screen(ctx.bot, ctx.chat_id, screens::quiz_stats(&progress)).await?;
            log_user_action(ctx.user_id, "quiz_stats", None);
            Ok(())
        }
        QuizAction::Restart => {
            game.restart(ctx.user_id).await;
            log_user_action(ctx.user_id, "quiz_restart", None);
            show_current_step(ctx).await
        }
    }
}

async fn show_current_step(ctx: &CallbackContext<'_>) -> Result<()> {
    let game = &ctx.services.game_manager;
    let screen = match game.current_question(ctx.user_id).await {
        Some(current) => screens::quiz_step(&current, ctx.message_limit()),
        None => screens::quiz_finished(game.level_progress(ctx.user_id).await.score),
    };
    send_screen(ctx.bot, ctx.chat_id, screen).await
}
