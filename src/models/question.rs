//! Quiz questions and levels

use serde::{Deserialize, Serialize};

/// Multiple-choice question preceded by a theory card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
    pub points: u32,
    /// Full theory shown before the question
    pub theory: String,
    /// Short recap shown between theory and question
    pub summary: String,
}

impl Question {
    pub fn is_correct(&self, option_index: usize) -> bool {
        self.options
            .get(option_index)
            .map(|option| option == &self.correct_answer)
            .unwrap_or(false)
    }

    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|option| option == &self.correct_answer)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizLevel {
    pub level: u32,
    pub questions: Vec<Question>,
}
