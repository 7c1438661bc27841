//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use std::collections::HashSet;
use crate::render::MIN_MESSAGE_LIMIT;
use crate::utils::errors::{TechCardsError, Result};
use super::Settings;

/// Telegram rejects longer text messages
pub const TELEGRAM_MESSAGE_LIMIT: usize = 4096;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_content_config(&settings.content)?;
    validate_quiz_config(&settings.quiz)?;
    validate_export_config(&settings.export)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.is_empty() {
        return Err(TechCardsError::Config(
            "Bot token is required (TECHCARDS_BOT__TOKEN or TELEGRAM_TOKEN)".to_string()
        ));
    }

    if !(MIN_MESSAGE_LIMIT..=TELEGRAM_MESSAGE_LIMIT).contains(&config.message_limit) {
        return Err(TechCardsError::Config(format!(
            "Message limit must be between {} and {}",
            MIN_MESSAGE_LIMIT, TELEGRAM_MESSAGE_LIMIT
        )));
    }

    Ok(())
}

/// Validate content configuration
fn validate_content_config(config: &super::ContentConfig) -> Result<()> {
    if config.sections.is_empty() {
        return Err(TechCardsError::Config(
            "At least one catalog section must be configured".to_string()
        ));
    }

    let mut seen = HashSet::new();
    for section in &config.sections {
        if !seen.insert(section) {
            return Err(TechCardsError::Config(
                format!("Section {} is listed twice", section)
            ));
        }
    }

    if let Some(ref directory) = config.directory {
        if directory.trim().is_empty() {
            return Err(TechCardsError::Config(
                "Content directory must not be empty when set".to_string()
            ));
        }
    }

    Ok(())
}

/// Validate quiz rules
fn validate_quiz_config(config: &super::QuizConfig) -> Result<()> {
    if config.questions_per_level == 0 {
        return Err(TechCardsError::Config(
            "Questions per level must be greater than 0".to_string()
        ));
    }

    if config.points_per_level == 0 {
        return Err(TechCardsError::Config(
            "Points per level must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate export configuration
fn validate_export_config(config: &super::ExportConfig) -> Result<()> {
    if config.output_dir.trim().is_empty() {
        return Err(TechCardsError::Config(
            "Export output directory is required".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(TechCardsError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(TechCardsError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    if config.directory.is_empty() || config.file_name.is_empty() {
        return Err(TechCardsError::Config(
            "Log directory and file name are required".to_string()
        ));
    }

    Ok(())
}
