//! Rendering module
//!
//! Turns card texts into Telegram HTML messages and into exported documents.

pub mod blocks;
pub mod card;
pub mod document;
pub mod telegram;

pub use card::{card_messages, quiz_question_messages, quiz_summary_messages, quiz_theory_messages};
pub use document::{theory_html, theory_markdown};
pub use telegram::{message_len, MessageBuilder, MIN_MESSAGE_LIMIT};
