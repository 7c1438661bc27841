//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the TechCards bots.

use tracing::{info, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::models::Section;
use crate::utils::errors::{TechCardsError, Result};

/// Initialize logging based on configuration.
///
/// The returned guard flushes the file writer; keep it alive for the whole run.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.directory, &config.file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(non_blocking))
        .try_init()
        .map_err(|e| TechCardsError::Config(format!("Failed to install tracing subscriber: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log user actions with structured data
pub fn log_user_action(user_id: i64, action: &str, details: Option<&str>) {
    info!(
        user_id = user_id,
        action = action,
        details = details,
        "User action performed"
    );
}

/// Log a card shown to a user
pub fn log_card_view(user_id: i64, section: Section, index: usize, viewed: usize, total: usize) {
    debug!(
        user_id = user_id,
        section = section.key(),
        index = index,
        viewed = viewed,
        total = total,
        "Card shown"
    );
}

/// Log a quiz answer
pub fn log_quiz_answer(user_id: i64, level: u32, correct: bool, score: u32) {
    info!(
        user_id = user_id,
        level = level,
        correct = correct,
        score = score,
        "Quiz answer checked"
    );
}

/// Log a level transition in the quiz
pub fn log_level_change(user_id: i64, from_level: u32, to_level: u32, score: u32) {
    info!(
        user_id = user_id,
        from_level = from_level,
        to_level = to_level,
        score = score,
        "Quiz level changed"
    );
}
