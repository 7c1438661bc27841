//! Configuration loading from the environment

use serial_test::serial;
use TechCards::config::{BotVariant, Settings};
use TechCards::models::Section;

const VARS: &[&str] = &[
    "TECHCARDS_BOT__TOKEN",
    "TECHCARDS_BOT__VARIANT",
    "TECHCARDS_BOT__MESSAGE_LIMIT",
    "TECHCARDS_CONTENT__SECTIONS",
    "TECHCARDS_QUIZ__POINTS_PER_LEVEL",
    "TELEGRAM_TOKEN",
    "BOT_TOKEN",
];

fn clear_env() {
    for var in VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let settings = Settings::new().expect("defaults load");

    assert_eq!(settings.bot.variant, BotVariant::Catalog);
    assert_eq!(settings.bot.message_limit, 4096);
    assert_eq!(settings.content.trainer_section, Section::Kafka);
    assert_eq!(settings.quiz.questions_per_level, 5);
    assert!(settings.bot.token.is_empty());
    assert!(settings.validate().is_err(), "a token is required");
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    std::env::set_var("TECHCARDS_BOT__TOKEN", "12345:test_token");
    std::env::set_var("TECHCARDS_BOT__VARIANT", "quiz");
    std::env::set_var("TECHCARDS_BOT__MESSAGE_LIMIT", "2000");
    std::env::set_var("TECHCARDS_CONTENT__SECTIONS", "kafka,system_design");
    std::env::set_var("TECHCARDS_QUIZ__POINTS_PER_LEVEL", "60");

    let settings = Settings::new().expect("environment settings load");
    clear_env();

    assert_eq!(settings.bot.token, "12345:test_token");
    assert_eq!(settings.bot.variant, BotVariant::Quiz);
    assert_eq!(settings.bot.message_limit, 2000);
    assert_eq!(settings.content.sections, vec![Section::Kafka, Section::SystemDesign]);
    assert_eq!(settings.game_rules().points_per_level, 60);
    assert!(settings.validate().is_ok());
}

#[test]
#[serial]
fn test_legacy_token_variable() {
    clear_env();
    std::env::set_var("BOT_TOKEN", "777:legacy");

    let settings = Settings::new().expect("settings load");
    clear_env();

    assert_eq!(settings.bot.token, "777:legacy");
}
