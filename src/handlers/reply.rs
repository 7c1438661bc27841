//! Sending rendered screens to Telegram
//!
//! A screen is one or more HTML messages; the keyboard is attached to the
//! last one so it stays under the text it refers to.

use teloxide::{
    prelude::*,
    types::{ChatId, InlineKeyboardMarkup, MessageId, ParseMode},
    ApiError, RequestError,
};
use tracing::{debug, warn};
use crate::utils::errors::Result;

/// Reply sent when a handler fails
pub const GENERIC_ERROR_MESSAGE: &str = "Произошла ошибка при обработке запроса. \
    Пожалуйста, попробуйте еще раз или начните сначала с помощью команды /start";

#[derive(Debug, Clone)]
pub struct Screen {
    pub messages: Vec<String>,
    pub keyboard: Option<InlineKeyboardMarkup>,
}

impl Screen {
    pub fn new(messages: Vec<String>) -> Self {
        Self { messages, keyboard: None }
    }

    /// Single HTML message
    pub fn html(text: impl Into<String>) -> Self {
        Self::new(vec![text.into()])
    }

    pub fn with_keyboard(mut self, keyboard: InlineKeyboardMarkup) -> Self {
        self.keyboard = Some(keyboard);
        self
    }
}

/// Send every message of the screen as a new message
pub async fn send_screen(bot: &Bot, chat_id: ChatId, screen: Screen) -> Result<()> {
    let last = screen.messages.len().saturating_sub(1);
    for (i, text) in screen.messages.into_iter().enumerate() {
        let request = bot.send_message(chat_id, text).parse_mode(ParseMode::Html);
        match (&screen.keyboard, i == last) {
            (Some(keyboard), true) => request.reply_markup(keyboard.clone()).await?,
            _ => request.await?,
        };
    }
    Ok(())
}

/// Replace `message_id` with the first message of the screen and send the rest;
/// without a message to edit the whole screen is sent
pub async fn edit_screen(
    bot: &Bot,
    chat_id: ChatId,
    message_id: Option<MessageId>,
    screen: Screen,
) -> Result<()> {
    let Some(message_id) = message_id else {
        return send_screen(bot, chat_id, screen).await;
    };
    let mut messages = screen.messages.into_iter();
    let Some(first) = messages.next() else {
        return Ok(());
    };
    let rest: Vec<String> = messages.collect();

    let request = bot
        .edit_message_text(chat_id, message_id, first)
        .parse_mode(ParseMode::Html);
    let result = match (&screen.keyboard, rest.is_empty()) {
        (Some(keyboard), true) => request.reply_markup(keyboard.clone()).await,
        _ => request.await,
    };
    match result {
        Ok(_) => {}
        Err(RequestError::Api(ApiError::MessageNotModified)) => {
            debug!(chat_id = ?chat_id, "Message already shows this screen");
        }
        Err(e) => return Err(e.into()),
    }

    if !rest.is_empty() {
        send_screen(bot, chat_id, Screen { messages: rest, keyboard: screen.keyboard }).await?;
    }
    Ok(())
}

/// Tell the user something went wrong; failures are only logged
pub async fn send_error_message(bot: &Bot, chat_id: ChatId) {
    if let Err(e) = bot.send_message(chat_id, GENERIC_ERROR_MESSAGE).await {
        warn!(error = %e, chat_id = ?chat_id, "Failed to send error message");
    }
}
