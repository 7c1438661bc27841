use serde::{Deserialize, Serialize};

/// Flashcard with theory for one interview topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub theory: String,
    pub summary: String,
    /// Practical examples, usually with fenced code blocks
    #[serde(default)]
    pub explanation: Option<String>,
    /// Model answer for the interview question
    #[serde(default)]
    pub answer: Option<String>,
}

impl Card {
    pub fn new(title: impl Into<String>, theory: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            theory: theory.into(),
            summary: summary.into(),
            explanation: None,
            answer: None,
        }
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    pub fn with_answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = Some(answer.into());
        self
    }
}
