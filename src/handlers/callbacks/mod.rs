//! Callback query handlers module
//!
//! This module contains handlers for all inline keyboard button callbacks.
//! Callback data has the form `action[:arg[:arg]]`.

pub mod catalog;
pub mod quiz;
pub mod trainer;

use teloxide::{Bot, types::{CallbackQuery, ChatId, MessageId}, prelude::*};
use tracing::{info, debug, warn, error};
use crate::handlers::reply::send_error_message;
use crate::models::Section;
use crate::services::ServiceFactory;
use crate::state::GameStep;
use crate::utils::errors::{Result, TechCardsError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainerAction {
    Intro,
    Rules,
    Begin,
    Next,
    Restart,
    Stats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    Start,
    Rules,
    /// Continue from the screen `from` of question `question`
    Next { question: u64, from: GameStep },
    Answer { question: u64, option: usize },
    Stats,
    Restart,
}

/// Parsed callback data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    Menu,
    Stats,
    Section(Section),
    Topic(Section, usize),
    Trainer(TrainerAction),
    Quiz(QuizAction),
}

impl CallbackAction {
    pub fn parse(data: &str) -> Result<Self> {
        let parts: Vec<&str> = data.split(':').collect();
        let invalid = || TechCardsError::InvalidCallback(data.to_string());
        let index = |s: &str| s.parse::<usize>().map_err(|_| invalid());
        let serial = |s: &str| s.parse::<u64>().map_err(|_| invalid());

        let action = match parts.as_slice() {
            ["menu"] => CallbackAction::Menu,
            ["stats"] => CallbackAction::Stats,
            ["section", key] => CallbackAction::Section(Section::from_key(key)?),
            ["topic", key, i] => CallbackAction::Topic(Section::from_key(key)?, index(*i)?),
            ["trainer", action] => CallbackAction::Trainer(match *action {
                "intro" => TrainerAction::Intro,
                "rules" => TrainerAction::Rules,
                "begin" => TrainerAction::Begin,
                "next" => TrainerAction::Next,
                "restart" => TrainerAction::Restart,
                "stats" => TrainerAction::Stats,
                _ => return Err(invalid()),
            }),
            ["quiz", "answer", q, i] => CallbackAction::Quiz(QuizAction::Answer {
                question: serial(*q)?,
                option: index(*i)?,
            }),
            ["quiz", "next", q, step] => CallbackAction::Quiz(QuizAction::Next {
                question: serial(*q)?,
                from: GameStep::from_key(*step).ok_or_else(invalid)?,
            }),
            ["quiz", action] => CallbackAction::Quiz(match *action {
                "start" => QuizAction::Start,
                "rules" => QuizAction::Rules,
                "stats" => QuizAction::Stats,
                "restart" => QuizAction::Restart,
                _ => return Err(invalid()),
            }),
            _ => return Err(invalid()),
        };
        Ok(action)
    }
}

/// Where and for whom a callback is handled
pub struct CallbackContext<'a> {
    pub bot: &'a Bot,
    pub chat_id: ChatId,
    /// Message carrying the pressed keyboard
    pub message_id: Option<MessageId>,
    pub user_id: i64,
    pub services: &'a ServiceFactory,
}

impl CallbackContext<'_> {
    pub fn message_limit(&self) -> usize {
        self.services.settings.bot.message_limit
    }
}

/// Main callback query dispatcher
pub async fn handle_callback_query(
    bot: Bot,
    query: CallbackQuery,
    services: ServiceFactory,
) -> Result<()> {
    let user_id = query.from.id.0 as i64;
    let chat_id = query
        .message
        .as_ref()
        .map(|m| m.chat().id)
        .unwrap_or(ChatId(user_id));
    let message_id = query.message.as_ref().map(|m| m.id());

    debug!(user_id = user_id, chat_id = ?chat_id, callback_data = ?query.data, "Processing callback query");

    // Answer the callback query first to remove loading state
    if let Err(e) = bot.answer_callback_query(query.id.clone()).await {
        warn!(error = %e, callback_id = ?query.id, "Failed to answer callback query");
    }

    let Some(data) = query.data.as_deref() else {
        return Ok(());
    };
    let action = match CallbackAction::parse(data) {
        Ok(action) => action,
        Err(e) => {
            warn!(user_id = user_id, callback_data = %data, error = %e, "Ignoring callback");
            return Ok(());
        }
    };

    let ctx = CallbackContext {
        bot: &bot,
        chat_id,
        message_id,
        user_id,
        services: &services,
    };
    let result = match action {
        CallbackAction::Menu => catalog::show_menu(&ctx).await,
        CallbackAction::Stats => catalog::show_stats(&ctx).await,
        CallbackAction::Section(section) => catalog::show_section(&ctx, section).await,
        CallbackAction::Topic(section, index) => catalog::show_topic(&ctx, section, index).await,
        CallbackAction::Trainer(action) => trainer::handle_trainer_callback(&ctx, action).await,
        CallbackAction::Quiz(action) => quiz::handle_quiz_callback(&ctx, action).await,
    };

    match result {
        Ok(()) => {
            info!(user_id = user_id, action = ?action, "Callback query processed successfully");
            Ok(())
        }
        Err(e) => {
            error!(user_id = user_id, action = ?action, error = %e, severity = %e.severity(), "Error handling callback query");
            send_error_message(&bot, chat_id).await;
            if e.is_recoverable() {
                Ok(())
            } else {
                Err(e)
            }
        }
    }
}
