//! Integration tests for the Kafka card trainer

mod helpers;

use std::collections::HashSet;
use helpers::*;
use serial_test::serial;
use TechCards::config::BotVariant;
use TechCards::handlers::{handle_callback_query, handle_command, Command};
use TechCards::models::Section;

async fn press(ctx: &TestContext, data: &str) {
    let query = create_test_callback_query(test_user_id(), test_user_id(), data);
    handle_callback_query(ctx.bot.clone(), query, ctx.services.clone())
        .await
        .expect("callback should be handled");
}

#[tokio::test]
#[serial]
async fn test_start_shows_trainer_menu() {
    let ctx = TestContext::new(BotVariant::Trainer).await;
    let msg = create_test_message(test_user_id(), test_user_id(), "/start");

    handle_command(ctx.bot.clone(), msg, Command::Start, ctx.services.clone()).await.unwrap();

    let request = ctx.last_request("sendMessage").await;
    assert!(request["text"].as_str().unwrap().contains("Apache Kafka в игровом формате"));
    assert_eq!(
        keyboard_callbacks(&request),
        vec!["trainer:intro", "trainer:rules", "trainer:stats"]
    );
}

#[tokio::test]
#[serial]
async fn test_intro_then_begin_shows_first_card() {
    let ctx = TestContext::new(BotVariant::Trainer).await;

    press(&ctx, "trainer:intro").await;
    let intro = ctx.last_request("sendMessage").await;
    assert_eq!(keyboard_callbacks(&intro), vec!["trainer:begin"]);

    press(&ctx, "trainer:begin").await;
    let card = ctx.last_request("sendMessage").await;
    assert!(card["text"].as_str().unwrap().starts_with("📚 Теория (Карточка 1 из 15)"));
    assert_eq!(keyboard_callbacks(&card), vec!["trainer:next"]);
}

#[tokio::test]
#[serial]
async fn test_every_card_once_then_congratulation() {
    let ctx = TestContext::new(BotVariant::Trainer).await;
    let total = ctx.services.catalog.total_cards(Section::Kafka);
    let titles: HashSet<&str> = ctx
        .services
        .catalog
        .deck(Section::Kafka)
        .iter()
        .map(|card| card.title.as_str())
        .collect();

    press(&ctx, "trainer:begin").await;
    for _ in 1..total {
        press(&ctx, "trainer:next").await;
    }

    let texts = ctx.telegram_mock.sent_texts().await;
    assert_eq!(texts.len(), total);
    let mut shown = HashSet::new();
    for (i, text) in texts.iter().enumerate() {
        assert!(text.contains(&format!("Карточка {} из {}", i + 1, total)));
        let title = titles
            .iter()
            .find(|title| text.contains(&format!("из {})\n\n<b>{}</b>", total, title)))
            .expect("card title is shown");
        assert!(shown.insert(*title), "card {} shown twice", title);
    }

    press(&ctx, "trainer:next").await;
    let done = ctx.last_request("sendMessage").await;
    assert!(done["text"].as_str().unwrap().contains("Вы изучили все доступные карточки"));
    assert_eq!(keyboard_callbacks(&done), vec!["trainer:restart"]);

    press(&ctx, "trainer:restart").await;
    let restarted = ctx.last_request("sendMessage").await;
    assert!(restarted["text"].as_str().unwrap().contains("Карточка 1 из 15"));
}

#[tokio::test]
#[serial]
async fn test_stats_count_viewed_cards() {
    let ctx = TestContext::new(BotVariant::Trainer).await;
    press(&ctx, "trainer:begin").await;
    press(&ctx, "trainer:next").await;
    press(&ctx, "trainer:stats").await;

    let stats = ctx.last_request("sendMessage").await;
    assert!(stats["text"].as_str().unwrap().contains("Изучено карточек: 2 из 15"));

    let msg = create_test_message(test_user_id(), test_user_id(), "/stats");
    handle_command(ctx.bot.clone(), msg, Command::Stats, ctx.services.clone()).await.unwrap();
    let command_stats = ctx.last_request("sendMessage").await;
    assert_eq!(command_stats["text"], stats["text"]);
}
