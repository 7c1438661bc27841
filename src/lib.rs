//! TechCards Telegram Bots
//!
//! Flashcard bots for interview preparation: topic menus per section, a card
//! trainer that never repeats a card and a quiz with score and levels.
//! Content is static, user progress lives in memory only.

#![allow(non_snake_case)]

pub mod config;
pub mod content;
pub mod handlers;
pub mod models;
pub mod render;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{TechCardsError, Result};

// Re-export main components for easy access
pub use content::Catalog;
pub use services::ServiceFactory;
pub use state::StateStorage;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
