//! Inline keyboards
//!
//! Callback data follows `action[:arg[:arg]]`, see [`super::callbacks`].

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use crate::models::{Card, Question, Section};
use crate::state::GameStep;
use crate::utils::helpers::truncate_text;

const MAX_BUTTON_LABEL: usize = 60;

pub fn catalog_main_menu(sections: &[Section]) -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = sections
        .iter()
        .map(|section| {
            vec![InlineKeyboardButton::callback(
                section.title(),
                format!("section:{}", section.key()),
            )]
        })
        .collect();
    rows.push(vec![InlineKeyboardButton::callback("Статистика", "stats")]);
    InlineKeyboardMarkup::new(rows)
}

/// One button per card of the section plus "Назад"
pub fn topic_menu(section: Section, cards: &[Card]) -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = cards
        .iter()
        .enumerate()
        .map(|(index, card)| {
            vec![InlineKeyboardButton::callback(
                truncate_text(&card.title, MAX_BUTTON_LABEL),
                format!("topic:{}:{}", section.key(), index),
            )]
        })
        .collect();
    rows.push(vec![InlineKeyboardButton::callback("Назад", "menu")]);
    InlineKeyboardMarkup::new(rows)
}

pub fn back_to_topics(section: Section) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        "Назад к темам",
        format!("section:{}", section.key()),
    )]])
}

pub fn back_to_menu() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback("Назад", "menu")]])
}

pub fn trainer_main_menu() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback("Начать обучение", "trainer:intro")],
        vec![InlineKeyboardButton::callback("Правила игры", "trainer:rules")],
        vec![InlineKeyboardButton::callback("Моя статистика", "trainer:stats")],
    ])
}

pub fn trainer_begin() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        "Да, начинаем!",
        "trainer:begin",
    )]])
}

pub fn trainer_next_card() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        "Следующая карточка",
        "trainer:next",
    )]])
}

pub fn trainer_restart() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        "Начать заново",
        "trainer:restart",
    )]])
}

pub fn quiz_main_menu() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback("Начать игру", "quiz:start")],
        vec![InlineKeyboardButton::callback("Правила игры", "quiz:rules")],
        vec![InlineKeyboardButton::callback("Моя статистика", "quiz:stats")],
    ])
}

/// "Next" button of the `from` screen of question `serial`
pub fn quiz_continue(label: &str, serial: u64, from: GameStep) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        label,
        format!("quiz:next:{}:{}", serial, from.as_str()),
    )]])
}

/// Answer options, one per row
pub fn quiz_options(question: &Question, serial: u64) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(
        question
            .options
            .iter()
            .enumerate()
            .map(|(index, option)| {
                vec![InlineKeyboardButton::callback(
                    option.clone(),
                    format!("quiz:answer:{}:{}", serial, index),
                )]
            })
            .collect::<Vec<_>>(),
    )
}

pub fn quiz_after_answer() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback("Следующий вопрос", "quiz:start")],
        vec![InlineKeyboardButton::callback("Моя статистика", "quiz:stats")],
    ])
}

pub fn quiz_restart() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        "Сыграть заново",
        "quiz:restart",
    )]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::InlineKeyboardButtonKind;

    fn callback_data(markup: &InlineKeyboardMarkup) -> Vec<String> {
        markup
            .inline_keyboard
            .iter()
            .flatten()
            .filter_map(|button| match &button.kind {
                InlineKeyboardButtonKind::CallbackData(data) => Some(data.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_catalog_menu_lists_sections_and_stats() {
        let markup = catalog_main_menu(&[Section::JavaCore, Section::Spring]);
        assert_eq!(
            callback_data(&markup),
            vec!["section:java_core", "section:spring", "stats"]
        );
        assert_eq!(markup.inline_keyboard[1][0].text, "Spring Framework");
    }

    #[test]
    fn test_topic_menu_indices() {
        let cards = vec![
            Card::new("Основы Docker", "…", ""),
            Card::new("Kubernetes", "…", ""),
        ];
        let markup = topic_menu(Section::DockerK8s, &cards);
        assert_eq!(
            callback_data(&markup),
            vec!["topic:docker_k8s:0", "topic:docker_k8s:1", "menu"]
        );
    }

    #[test]
    fn test_callback_data_fits_telegram_limit() {
        let cards: Vec<Card> = (0..100).map(|i| Card::new(&format!("Тема {}", i), "…", "")).collect();
        let markup = topic_menu(Section::AlgorithmCatalog, &cards);
        assert!(callback_data(&markup).iter().all(|data| data.len() <= 64));
    }

    #[test]
    fn test_quiz_buttons_carry_question_serial() {
        let question: Question = serde_json::from_value(serde_json::json!({
            "text": "Что такое JVM?",
            "options": ["Виртуальная машина", "Компилятор"],
            "correct_answer": "Виртуальная машина",
            "explanation": "",
            "points": 20,
            "theory": "",
            "summary": ""
        }))
        .unwrap();

        assert_eq!(
            callback_data(&quiz_options(&question, 12)),
            vec!["quiz:answer:12:0", "quiz:answer:12:1"]
        );
        assert_eq!(
            callback_data(&quiz_continue("К вопросу", 12, GameStep::Summary)),
            vec!["quiz:next:12:summary"]
        );
        let widest = quiz_continue("К вопросу", u64::MAX, GameStep::Question);
        assert!(callback_data(&widest)[0].len() <= 64);
    }
}
