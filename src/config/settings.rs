//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};
use crate::models::Section;

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    pub content: ContentConfig,
    pub quiz: QuizConfig,
    pub export: ExportConfig,
    pub logging: LoggingConfig,
}

/// Which bot the process runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BotVariant {
    /// Topic menus per section (interview preparation bot)
    Catalog,
    /// Random cards without replacement from one section
    Trainer,
    /// Theory, summary and question with score and levels
    Quiz,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
    pub variant: BotVariant,
    /// Maximum length of one outgoing message
    pub message_limit: usize,
}

/// Content configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Directory with JSON documents overriding the embedded content
    pub directory: Option<String>,
    /// Sections listed in the catalog main menu, in order
    pub sections: Vec<Section>,
    /// Deck served by the trainer variant
    pub trainer_section: Section,
}

/// Quiz rules
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuizConfig {
    pub questions_per_level: u32,
    pub points_per_level: u32,
}

/// Theory export configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    pub output_dir: String,
    pub title: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub directory: String,
    pub file_name: String,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let defaults = Settings::default();
        let sections: Vec<String> = defaults
            .content
            .sections
            .iter()
            .map(|s| s.key().to_string())
            .collect();

        let settings = config::Config::builder()
            .set_default("bot.token", defaults.bot.token.clone())?
            .set_default("bot.variant", "catalog")?
            .set_default("bot.message_limit", defaults.bot.message_limit as i64)?
            .set_default("content.sections", sections)?
            .set_default("content.trainer_section", defaults.content.trainer_section.key())?
            .set_default("quiz.questions_per_level", defaults.quiz.questions_per_level as i64)?
            .set_default("quiz.points_per_level", defaults.quiz.points_per_level as i64)?
            .set_default("export.output_dir", defaults.export.output_dir.clone())?
            .set_default("export.title", defaults.export.title.clone())?
            .set_default("logging.level", defaults.logging.level.clone())?
            .set_default("logging.directory", defaults.logging.directory.clone())?
            .set_default("logging.file_name", defaults.logging.file_name.clone())?
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("TECHCARDS")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("content.sections")
                    .try_parsing(true),
            )
            .build()?;

        let mut settings: Settings = settings.try_deserialize()?;
        if settings.bot.token.is_empty() {
            settings.bot.token = token_from_env().unwrap_or_default();
        }
        Ok(settings)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::TechCardsError> {
        super::validation::validate_settings(self)
    }

    pub fn game_rules(&self) -> crate::state::GameRules {
        crate::state::GameRules {
            questions_per_level: self.quiz.questions_per_level,
            points_per_level: self.quiz.points_per_level,
        }
    }
}

/// Token variables used by earlier deployments of the bots
fn token_from_env() -> Option<String> {
    ["TELEGRAM_TOKEN", "BOT_TOKEN"]
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.is_empty())
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
                variant: BotVariant::Catalog,
                message_limit: 4096,
            },
            content: ContentConfig {
                directory: None,
                sections: vec![
                    Section::JavaCore,
                    Section::Spring,
                    Section::Database,
                    Section::DockerK8s,
                    Section::Algorithms,
                    Section::AlgorithmCatalog,
                    Section::SystemDesign,
                    Section::Kafka,
                ],
                trainer_section: Section::Kafka,
            },
            quiz: QuizConfig {
                questions_per_level: 5,
                points_per_level: 100,
            },
            export: ExportConfig {
                output_dir: "export".to_string(),
                title: "Теория для подготовки к собеседованию".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                directory: "logs".to_string(),
                file_name: "techcards.log".to_string(),
            },
        }
    }
}
