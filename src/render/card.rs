//! Card screens

use crate::models::{Card, Question};
use super::telegram::MessageBuilder;

/// Full card: title, theory, recap, model answer and examples
pub fn card_messages(card: &Card, header: Option<&str>, limit: usize) -> Vec<String> {
    let mut builder = MessageBuilder::new(limit);
    if let Some(header) = header {
        builder = builder.text(header);
    }
    builder = builder.bold(&card.title).rich(&card.theory);

    if !card.summary.trim().is_empty() {
        builder = builder.section("Кратко:", &card.summary);
    }
    if let Some(answer) = card.answer.as_deref().filter(|a| !a.trim().is_empty()) {
        builder = builder.section("Ответ:", answer);
    }
    if let Some(explanation) = card.explanation.as_deref().filter(|e| !e.trim().is_empty()) {
        builder = builder.section("Практические примеры:", explanation);
    }
    builder.build()
}

/// First quiz step: the theory behind the question
pub fn quiz_theory_messages(question: &Question, level: u32, limit: usize) -> Vec<String> {
    MessageBuilder::new(limit)
        .bold(&format!("📚 Уровень {}: теория", level))
        .rich(&question.theory)
        .build()
}

/// Second quiz step: short recap
pub fn quiz_summary_messages(question: &Question, limit: usize) -> Vec<String> {
    MessageBuilder::new(limit)
        .bold("📝 Краткое резюме")
        .rich(&question.summary)
        .build()
}

/// Third quiz step: the question itself, options go to the keyboard
pub fn quiz_question_messages(question: &Question, answered: u32, per_level: u32, limit: usize) -> Vec<String> {
    MessageBuilder::new(limit)
        .bold(&format!("❓ Вопрос {} из {}", answered + 1, per_level))
        .rich(&question.text)
        .build()
}
