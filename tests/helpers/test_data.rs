//! Test data builders
//!
//! Telegram updates are built from JSON the way the Bot API sends them, so the
//! fixtures do not depend on teloxide struct layouts.

use serde_json::{json, Value};
use teloxide::types::{CallbackQuery, Message};

/// Helper function to create a test user JSON object
pub fn create_test_user(user_id: i64, first_name: &str) -> Value {
    json!({
        "id": user_id,
        "is_bot": false,
        "first_name": first_name,
        "username": "testuser",
        "language_code": "ru"
    })
}

fn create_test_chat(chat_id: i64) -> Value {
    if chat_id > 0 {
        json!({ "id": chat_id, "type": "private", "first_name": "TestUser" })
    } else {
        json!({ "id": chat_id, "type": "supergroup", "title": "Test Group" })
    }
}

fn message_json(user_id: i64, chat_id: i64, text: &str) -> Value {
    let mut message = json!({
        "message_id": 1,
        "from": create_test_user(user_id, "TestUser"),
        "chat": create_test_chat(chat_id),
        "date": 1640995200,
        "text": text
    });
    if text.starts_with('/') {
        let length = text.split_whitespace().next().map(|c| c.encode_utf16().count()).unwrap_or(0);
        message["entities"] = json!([{ "type": "bot_command", "offset": 0, "length": length }]);
    }
    message
}

/// Helper function to create a test text message
pub fn create_test_message(user_id: i64, chat_id: i64, text: &str) -> Message {
    serde_json::from_value(message_json(user_id, chat_id, text)).expect("valid message fixture")
}

/// Helper function to create a test callback query pressed under a bot message
pub fn create_test_callback_query(user_id: i64, chat_id: i64, data: &str) -> CallbackQuery {
    let mut message = message_json(12345, chat_id, "Test message");
    message["message_id"] = json!(77);
    message["from"] = json!({ "id": 12345, "is_bot": true, "first_name": "TechCardsBot" });

    serde_json::from_value(json!({
        "id": format!("callback_{}", user_id),
        "from": create_test_user(user_id, "TestUser"),
        "message": message,
        "chat_instance": "test_chat_instance",
        "data": data
    }))
    .expect("valid callback fixture")
}
