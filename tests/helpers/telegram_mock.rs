//! Mock Telegram API Server for testing
//!
//! This module provides a mock HTTP server that simulates the Telegram Bot API
//! for testing purposes. It uses wiremock to create configurable mock responses.
//! Method names are matched case-insensitively, Telegram accepts both
//! `sendMessage` and `SendMessage`.

use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path_regex},
    Mock, MockServer, ResponseTemplate,
};

/// Mock Telegram API server for testing
pub struct TelegramMockServer {
    pub server: MockServer,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub success: bool,
    pub delay_ms: Option<u64>,
    pub custom_response: Option<Value>,
}

impl Default for MockResponseConfig {
    fn default() -> Self {
        Self {
            success: true,
            delay_ms: None,
            custom_response: None,
        }
    }
}

fn bot_message(extra: Value) -> Value {
    let mut message = json!({
        "message_id": 123,
        "from": {
            "id": 12345,
            "is_bot": true,
            "first_name": "TechCardsBot",
            "username": "techcards_bot"
        },
        "chat": {
            "id": test_user_id(),
            "first_name": "TestUser",
            "type": "private"
        },
        "date": 1640995200
    });
    if let (Some(message), Some(extra)) = (message.as_object_mut(), extra.as_object()) {
        for (key, value) in extra {
            message.insert(key.clone(), value.clone());
        }
    }
    message
}

impl TelegramMockServer {
    /// Create a new mock Telegram API server
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Bot talking to this server
    pub fn bot(&self) -> teloxide::Bot {
        teloxide::Bot::new(test_bot_token())
            .set_api_url(self.server.uri().parse().expect("mock server uri is a valid url"))
    }

    async fn mock_method(&self, name: &str, ok_result: Value, error: &str, config: MockResponseConfig) {
        let response_body = config.custom_response.unwrap_or_else(|| {
            if config.success {
                json!({ "ok": true, "result": ok_result })
            } else {
                json!({ "ok": false, "error_code": 400, "description": error })
            }
        });

        let mut response = ResponseTemplate::new(if config.success { 200 } else { 400 })
            .set_body_json(response_body);

        if let Some(delay) = config.delay_ms {
            response = response.set_delay(std::time::Duration::from_millis(delay));
        }

        Mock::given(method("POST"))
            .and(path_regex(format!("(?i)/bot[^/]+/{}$", name)))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Setup mock for sendMessage endpoint
    pub async fn mock_send_message(&self, config: MockResponseConfig) {
        let result = bot_message(json!({ "text": "Test message" }));
        self.mock_method("sendMessage", result, "Bad Request: message text is empty", config).await;
    }

    /// Setup mock for editMessageText endpoint
    pub async fn mock_edit_message_text(&self, config: MockResponseConfig) {
        let result = bot_message(json!({ "edit_date": 1640995260, "text": "Edited test message" }));
        self.mock_method("editMessageText", result, "Bad Request: message not found", config).await;
    }

    /// Setup mock for answerCallbackQuery endpoint
    pub async fn mock_answer_callback_query(&self, config: MockResponseConfig) {
        self.mock_method("answerCallbackQuery", json!(true), "Bad Request: query is too old", config).await;
    }

    /// Setup mock for sendDocument endpoint
    pub async fn mock_send_document(&self, config: MockResponseConfig) {
        let result = bot_message(json!({
            "document": {
                "file_id": "BQACAgIAAxkBAAIBZ2F",
                "file_unique_id": "AgADZ2F",
                "file_name": "theory.html",
                "mime_type": "text/html",
                "file_size": 2048
            },
            "caption": "Theory"
        }));
        self.mock_method("sendDocument", result, "Bad Request: file is empty", config).await;
    }

    /// Setup all common mocks with default success responses
    pub async fn setup_default_mocks(&self) {
        let config = MockResponseConfig::default();

        self.mock_send_message(config.clone()).await;
        self.mock_edit_message_text(config.clone()).await;
        self.mock_answer_callback_query(config.clone()).await;
        self.mock_send_document(config).await;
    }

    /// Setup mocks for error scenarios
    pub async fn setup_error_mocks(&self) {
        let config = MockResponseConfig {
            success: false,
            delay_ms: None,
            custom_response: None,
        };

        self.mock_send_message(config.clone()).await;
        self.mock_edit_message_text(config.clone()).await;
        self.mock_answer_callback_query(config.clone()).await;
        self.mock_send_document(config).await;
    }

    /// Reset all mocks and recorded requests
    pub async fn reset(&self) {
        self.server.reset().await;
    }

    /// JSON bodies of the requests sent to a method, in order
    pub async fn requests_to(&self, endpoint: &str) -> Vec<Value> {
        let endpoint = endpoint.to_lowercase();
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|req| req.url.path().to_lowercase().ends_with(&format!("/{}", endpoint)))
            .map(|req| serde_json::from_slice(&req.body).unwrap_or(Value::Null))
            .collect()
    }

    /// Texts of all messages sent or edited, in order
    pub async fn sent_texts(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter_map(|req| serde_json::from_slice::<Value>(&req.body).ok())
            .filter_map(|body| body.get("text").and_then(Value::as_str).map(str::to_string))
            .collect()
    }

    /// Verify that a specific endpoint was called
    pub async fn verify_endpoint_called(&self, endpoint: &str, times: usize) {
        let endpoint_lower = endpoint.to_lowercase();
        let received_requests = self.server.received_requests().await.unwrap_or_default();
        let matching_requests = received_requests
            .iter()
            .filter(|req| req.url.path().to_lowercase().ends_with(&format!("/{}", endpoint_lower)))
            .count();

        assert_eq!(
            matching_requests, times,
            "Expected {} calls to {}, but got {}",
            times, endpoint, matching_requests
        );
    }
}

/// Callback data of every button in a request's inline keyboard
pub fn keyboard_callbacks(body: &Value) -> Vec<String> {
    body.pointer("/reply_markup/inline_keyboard")
        .and_then(Value::as_array)
        .map(|rows| {
            rows.iter()
                .filter_map(Value::as_array)
                .flatten()
                .filter_map(|button| button.get("callback_data").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Helper function to create a test bot token
pub fn test_bot_token() -> String {
    "12345:test_token".to_string()
}

/// Helper function to create test user ID, also the private chat ID
pub fn test_user_id() -> i64 {
    987654321
}

/// Helper function to create test group chat ID
pub fn test_group_chat_id() -> i64 {
    -1001234567890
}
