//! Bot handlers module
//! 
//! This module contains all Telegram bot handlers organized by type:
//! - Command handlers for bot commands
//! - Callback handlers for inline keyboard interactions
//! - Message handlers for free text
//!
//! Screens and keyboards are shared by commands and callbacks.

pub mod commands;
pub mod callbacks;
pub mod messages;
pub mod keyboards;
pub mod reply;
pub mod screens;

// Re-export commonly used handler functions
pub use commands::{handle_command, Command};
pub use callbacks::{handle_callback_query, CallbackAction};
pub use messages::handle_message;
pub use reply::{Screen, GENERIC_ERROR_MESSAGE};
