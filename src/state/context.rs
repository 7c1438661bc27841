//! Per-user learning state
//!
//! This module tracks which cards a user has already seen and where the user
//! stands in the quiz: level, score and the current step of a question.

use std::collections::{BTreeMap, BTreeSet};
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::models::Section;

/// Quiz thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    pub questions_per_level: u32,
    pub points_per_level: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            questions_per_level: 5,
            points_per_level: 100,
        }
    }
}

/// Stage of the current quiz question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStep {
    Theory,
    Summary,
    Question,
}

impl GameStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStep::Theory => "theory",
            GameStep::Summary => "summary",
            GameStep::Question => "question",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "theory" => Some(GameStep::Theory),
            "summary" => Some(GameStep::Summary),
            "question" => Some(GameStep::Question),
            _ => None,
        }
    }
}

/// Quiz progress of one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub current_level: u32,
    pub score: u32,
    pub questions_answered: u32,
    /// Question indices already asked on the current level
    pub asked: BTreeSet<usize>,
    /// Index of the question in progress on the current level
    pub current_question: Option<usize>,
    /// Number of questions picked so far; identifies the question in progress
    /// in callback data
    pub question_serial: u64,
    pub current_step: GameStep,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            current_level: 1,
            score: 0,
            questions_answered: 0,
            asked: BTreeSet::new(),
            current_question: None,
            question_serial: 0,
            current_step: GameStep::Theory,
        }
    }
}

impl GameState {
    pub fn is_level_complete(&self, rules: &GameRules) -> bool {
        self.questions_answered >= rules.questions_per_level
    }

    pub fn add_points(&mut self, points: u32) {
        self.score += points;
    }

    /// Score needed to leave the current level; the threshold grows with the level
    pub fn points_to_next_level(&self, rules: &GameRules) -> u32 {
        rules.points_per_level * self.current_level
    }

    pub fn can_advance_level(&self, rules: &GameRules) -> bool {
        self.score >= self.points_to_next_level(rules)
    }

    pub fn advance_level(&mut self, rules: &GameRules) -> bool {
        if !self.can_advance_level(rules) {
            return false;
        }
        self.current_level += 1;
        self.reset_level();
        true
    }

    /// Start the current level over, score is kept
    pub fn reset_level(&mut self) {
        self.questions_answered = 0;
        self.asked.clear();
        self.current_question = None;
        self.current_step = GameStep::Theory;
    }

    pub fn next_step(&mut self) -> GameStep {
        self.current_step = match self.current_step {
            GameStep::Theory => GameStep::Summary,
            GameStep::Summary => GameStep::Question,
            GameStep::Question => GameStep::Theory,
        };
        self.current_step
    }
}

/// Everything the bot remembers about a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserState {
    pub user_id: i64,
    /// Viewed card indices per section
    pub viewed: BTreeMap<Section, BTreeSet<usize>>,
    /// Card last drawn by the trainer
    pub current_card: Option<(Section, usize)>,
    pub game: GameState,
    pub updated_at: DateTime<Utc>,
}

impl UserState {
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            viewed: BTreeMap::new(),
            current_card: None,
            game: GameState::default(),
            updated_at: Utc::now(),
        }
    }

    pub fn mark_viewed(&mut self, section: Section, index: usize) -> bool {
        self.viewed.entry(section).or_default().insert(index)
    }

    pub fn viewed_count(&self, section: Section) -> usize {
        self.viewed.get(&section).map(BTreeSet::len).unwrap_or(0)
    }

    pub fn is_viewed(&self, section: Section, index: usize) -> bool {
        self.viewed.get(&section).map(|v| v.contains(&index)).unwrap_or(false)
    }

    pub fn forget_section(&mut self, section: Section) {
        self.viewed.remove(&section);
        if matches!(self.current_card, Some((s, _)) if s == section) {
            self.current_card = None;
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
