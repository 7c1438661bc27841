//! Screens shown by the three bot variants

use crate::models::{Card, Section};
use crate::render::{card_messages, quiz_question_messages, quiz_summary_messages, quiz_theory_messages, MessageBuilder};
use crate::services::{AnswerOutcome, CardDraw, CurrentQuestion, LevelEvent, LevelProgress, SectionProgress};
use crate::state::{GameRules, GameStep};
use crate::utils::helpers::{escape_html, progress_bar};
use super::keyboards;
use super::reply::Screen;

pub fn catalog_welcome(sections: &[Section]) -> Screen {
    Screen::html(
        "Привет! Я бот для подготовки к собеседованиям по Java и смежным технологиям.\n\
         Выберите раздел для изучения:",
    )
    .with_keyboard(keyboards::catalog_main_menu(sections))
}

pub fn catalog_menu(sections: &[Section]) -> Screen {
    Screen::html("Выберите раздел для изучения:").with_keyboard(keyboards::catalog_main_menu(sections))
}

pub fn topic_list(section: Section, cards: &[Card]) -> Screen {
    Screen::html(escape_html(section.menu_prompt())).with_keyboard(keyboards::topic_menu(section, cards))
}

pub fn topic(section: Section, card: &Card, limit: usize) -> Screen {
    Screen::new(card_messages(card, None, limit)).with_keyboard(keyboards::back_to_topics(section))
}

pub fn catalog_stats(progress: &[SectionProgress]) -> Screen {
    let mut text = String::from("<b>Ваша статистика:</b>\n");
    for p in progress {
        text.push_str(&format!(
            "\n{}: {}/{} тем",
            escape_html(p.section.title()),
            p.viewed,
            p.total
        ));
        if p.is_complete() {
            text.push_str(" ✅");
        }
    }
    Screen::html(text).with_keyboard(keyboards::back_to_menu())
}

pub fn trainer_welcome(section: Section) -> Screen {
    Screen::html(format!(
        "👋 Привет! Я бот для изучения {} в игровом формате.\n\nВыберите действие:",
        escape_html(section.title())
    ))
    .with_keyboard(keyboards::trainer_main_menu())
}

pub fn trainer_intro(section: Section) -> Screen {
    Screen::html(format!(
        "🎮 Отлично! Давайте начнем изучение {}.\n\n\
         Вы будете изучать теорию по карточкам, каждая из которых содержит подробное объяснение темы.\n\n\
         Готовы начать?",
        escape_html(section.title())
    ))
    .with_keyboard(keyboards::trainer_begin())
}

pub fn trainer_rules() -> Screen {
    Screen::html(
        "📖 Как это работает:\n\n\
         1. Каждая карточка содержит подробное объяснение темы\n\
         2. Карточки показываются в случайном порядке и не повторяются\n\
         3. Вы можете изучать карточки в своем темпе\n\n\
         Удачи в обучении! 🚀",
    )
}

pub fn trainer_card(draw: &CardDraw, card: &Card, limit: usize) -> Screen {
    let header = format!("📚 Теория (Карточка {} из {})", draw.position, draw.total);
    Screen::new(card_messages(card, Some(&header), limit)).with_keyboard(keyboards::trainer_next_card())
}

pub fn trainer_done() -> Screen {
    Screen::html(
        "Поздравляем! Вы изучили все доступные карточки! 🎉\n\
         Новые карточки будут добавлены в ближайшее время.",
    )
    .with_keyboard(keyboards::trainer_restart())
}

pub fn trainer_stats(progress: &SectionProgress) -> Screen {
    let mut text = format!(
        "📊 Ваш прогресс:\n\nИзучено карточек: {} из {}\n{}",
        progress.viewed,
        progress.total,
        progress_bar(progress.viewed, progress.total, 10)
    );
    if progress.is_complete() {
        text.push_str("\n\n🎉 Все карточки изучены!");
    }
    Screen::html(text)
}

pub fn quiz_welcome() -> Screen {
    Screen::html(
        "👋 Привет! Я бот-викторина по Apache Kafka.\n\n\
         Изучайте теорию, отвечайте на вопросы, набирайте очки и переходите на новые уровни.\n\n\
         Выберите действие:",
    )
    .with_keyboard(keyboards::quiz_main_menu())
}

pub fn quiz_rules(rules: &GameRules) -> Screen {
    Screen::html(format!(
        "📖 Правила игры:\n\n\
         1. Перед каждым вопросом вы читаете теорию и краткое резюме\n\
         2. За правильный ответ начисляются очки\n\
         3. Уровень состоит из {} вопросов\n\
         4. Для перехода на следующий уровень нужно набрать {} очков, умноженных на номер уровня\n\
         5. Если очков не хватает, уровень начинается заново, набранные очки сохраняются\n\n\
         Удачи! 🚀",
        rules.questions_per_level, rules.points_per_level
    ))
    .with_keyboard(keyboards::quiz_main_menu())
}

/// Theory, summary or question screen of the question in progress
pub fn quiz_step(current: &CurrentQuestion<'_>, limit: usize) -> Screen {
    match current.step {
        GameStep::Theory => Screen::new(quiz_theory_messages(current.question, current.level, limit))
            .with_keyboard(keyboards::quiz_continue("Далее: краткое резюме", current.serial, GameStep::Theory)),
        GameStep::Summary => Screen::new(quiz_summary_messages(current.question, limit))
            .with_keyboard(keyboards::quiz_continue("К вопросу", current.serial, GameStep::Summary)),
        GameStep::Question => Screen::new(quiz_question_messages(
            current.question,
            current.answered,
            current.per_level,
            limit,
        ))
        .with_keyboard(keyboards::quiz_options(current.question, current.serial)),
    }
}

pub fn quiz_answer(outcome: &AnswerOutcome, limit: usize) -> Screen {
    let verdict = if outcome.correct {
        format!("✅ Правильно! +{} очков", outcome.points_awarded)
    } else {
        format!("❌ Неправильно. Правильный ответ: {}", outcome.correct_answer)
    };
    let mut builder = MessageBuilder::new(limit).bold(&verdict);
    if !outcome.explanation.trim().is_empty() {
        builder = builder.text(&outcome.explanation);
    }
    builder = builder.text(&format!(
        "🏆 Счёт: {}\nВопрос {} из {} на уровне {}",
        outcome.score, outcome.answered, outcome.per_level, outcome.level
    ));

    let keyboard = match &outcome.event {
        Some(LevelEvent::Advanced { to, .. }) => {
            builder = builder.bold(&format!("🎉 Поздравляем! Вы перешли на уровень {}!", to));
            keyboards::quiz_after_answer()
        }
        Some(LevelEvent::Retry { level, required }) => {
            builder = builder.text(&format!(
                "😔 Уровень {} не пройден: нужно набрать {} очков. Попробуйте еще раз!",
                level, required
            ));
            keyboards::quiz_after_answer()
        }
        Some(LevelEvent::Finished) => {
            builder = builder.bold(&format!("🏁 Вы прошли все уровни! Итоговый счёт: {}", outcome.score));
            keyboards::quiz_restart()
        }
        None => keyboards::quiz_after_answer(),
    };
    Screen::new(builder.build()).with_keyboard(keyboard)
}

pub fn quiz_finished(score: u32) -> Screen {
    Screen::html(format!(
        "🏁 Вы прошли все уровни! Итоговый счёт: {}\n\nМожно сыграть еще раз.",
        score
    ))
    .with_keyboard(keyboards::quiz_restart())
}

pub fn quiz_stats(progress: &LevelProgress) -> Screen {
    let level = if progress.finished {
        "все уровни пройдены".to_string()
    } else {
        format!("{} из {}", progress.level, progress.max_level)
    };
    Screen::html(format!(
        "📊 Ваш прогресс:\n\n\
         Уровень: {}\n\
         Очки: {}\n\
         Отвечено вопросов: {} из {}\n\
         Для перехода нужно: {} очков",
        level, progress.score, progress.answered, progress.per_level, progress.points_to_next_level
    ))
    .with_keyboard(keyboards::quiz_main_menu())
}
