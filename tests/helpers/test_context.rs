//! Test context
//!
//! Bundles a mock Telegram server, a bot pointing at it and the services of
//! one bot variant.

use std::sync::Once;
use serde_json::Value;
use teloxide::Bot;
use TechCards::config::{BotVariant, Settings};
use TechCards::content::Catalog;
use TechCards::services::ServiceFactory;

use super::telegram_mock::{test_bot_token, TelegramMockServer};

static INIT: Once = Once::new();

/// Initialize logging for tests (called once)
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

pub struct TestContext {
    pub telegram_mock: TelegramMockServer,
    pub bot: Bot,
    pub services: ServiceFactory,
}

impl TestContext {
    /// Context with default mocks for the given variant
    pub async fn new(variant: BotVariant) -> Self {
        Self::with_settings(test_settings(variant)).await
    }

    pub async fn with_settings(settings: Settings) -> Self {
        init_test_logging();

        let telegram_mock = TelegramMockServer::new().await;
        telegram_mock.setup_default_mocks().await;
        let bot = telegram_mock.bot();
        let catalog = Catalog::builtin().expect("embedded content is valid");
        let services = ServiceFactory::new(settings, catalog);

        Self { telegram_mock, bot, services }
    }

    pub async fn verify_telegram_calls(&self, endpoint: &str, times: usize) {
        self.telegram_mock.verify_endpoint_called(endpoint, times).await;
    }

    /// Last request body sent to a method
    pub async fn last_request(&self, endpoint: &str) -> Value {
        self.telegram_mock
            .requests_to(endpoint)
            .await
            .pop()
            .unwrap_or_else(|| panic!("no {} request was made", endpoint))
    }

    /// Forget recorded requests, mocks stay mounted
    pub async fn clear_requests(&self) {
        self.telegram_mock.reset().await;
        self.telegram_mock.setup_default_mocks().await;
    }
}

/// Settings for a variant with the test token
pub fn test_settings(variant: BotVariant) -> Settings {
    let mut settings = Settings::default();
    settings.bot.token = test_bot_token();
    settings.bot.variant = variant;
    settings
}
