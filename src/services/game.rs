//! Quiz game manager
//!
//! Each question goes through three screens: theory, summary and the question
//! itself. Answers add points; after a full level the score decides whether
//! the user moves up or plays the level again.

use std::sync::Arc;
use rand::seq::IteratorRandom;
use tracing::{debug, info};
use crate::content::Catalog;
use crate::models::Question;
use crate::state::{GameRules, GameState, GameStep, StateStorage};
use crate::utils::errors::{Result, TechCardsError};
use crate::utils::logging::{log_level_change, log_quiz_answer};

/// Question in progress together with the user's position in the level
#[derive(Debug, Clone)]
pub struct CurrentQuestion<'a> {
    pub question: &'a Question,
    /// Serial of this question, carried by its buttons
    pub serial: u64,
    pub level: u32,
    pub step: GameStep,
    pub answered: u32,
    pub per_level: u32,
}

/// What happened to the level after an answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelEvent {
    Advanced { from: u32, to: u32 },
    /// Level finished below the threshold and starts over
    Retry { level: u32, required: u32 },
    /// Last level passed
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub points_awarded: u32,
    pub correct_answer: String,
    pub explanation: String,
    pub score: u32,
    pub level: u32,
    pub answered: u32,
    pub per_level: u32,
    pub event: Option<LevelEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelProgress {
    pub level: u32,
    pub max_level: u32,
    pub score: u32,
    pub answered: u32,
    pub per_level: u32,
    pub points_to_next_level: u32,
    pub step: GameStep,
    pub finished: bool,
}

#[derive(Clone)]
pub struct GameManager {
    catalog: Arc<Catalog>,
    storage: StateStorage,
    rules: GameRules,
}

impl GameManager {
    pub fn new(catalog: Arc<Catalog>, storage: StateStorage, rules: GameRules) -> Self {
        Self { catalog, storage, rules }
    }

    /// Rules of a level: the per-level count never exceeds the questions it has
    pub fn rules_for(&self, level: u32) -> GameRules {
        let available = self
            .catalog
            .level(level)
            .map(|l| l.questions.len() as u32)
            .unwrap_or(0);
        GameRules {
            questions_per_level: self.rules.questions_per_level.min(available),
            points_per_level: self.rules.points_per_level,
        }
    }

    /// Question in progress, a fresh one is picked when none is; `None` once
    /// the user is past the last level
    pub async fn current_question(&self, user_id: i64) -> Option<CurrentQuestion<'_>> {
        let (level, index, serial, step, answered) = self
            .storage
            .update(user_id, |state| {
                let index = self.ensure_question(&mut state.game)?;
                let game = &state.game;
                Some((game.current_level, index, game.question_serial, game.current_step, game.questions_answered))
            })
            .await?;

        let question = self.catalog.question(level, index)?;
        Some(CurrentQuestion {
            question,
            serial,
            level,
            step,
            answered,
            per_level: self.rules_for(level).questions_per_level,
        })
    }

    /// Move from theory to summary and from summary to the question.
    /// `serial` and `from` name the screen the button was shown on; a button
    /// of an earlier screen is rejected.
    pub async fn next_step(&self, user_id: i64, serial: u64, from: GameStep) -> Result<GameStep> {
        let step = self
            .storage
            .update(user_id, |state| {
                if self.ensure_question(&mut state.game).is_none() {
                    return Err(TechCardsError::InvalidStateTransition {
                        from: "finished".to_string(),
                        to: GameStep::Theory.as_str().to_string(),
                    });
                }
                let game = &mut state.game;
                if game.current_step == GameStep::Question
                    || game.current_step != from
                    || game.question_serial != serial
                {
                    return Err(TechCardsError::InvalidStateTransition {
                        from: game.current_step.as_str().to_string(),
                        to: format!("next after {} of question {}", from.as_str(), serial),
                    });
                }
                Ok(game.next_step())
            })
            .await?;
        debug!(user_id = user_id, step = step.as_str(), "Quiz step advanced");
        Ok(step)
    }

    /// Check the chosen option of the question in progress; `serial` must be
    /// the one the options were shown with
    pub async fn check_answer(&self, user_id: i64, serial: u64, option: usize) -> Result<AnswerOutcome> {
        let outcome = self
            .storage
            .update(user_id, |state| {
                let game = &mut state.game;
                let index = match (game.current_step, game.current_question) {
                    (GameStep::Question, Some(index)) if game.question_serial == serial => index,
                    (step, _) => {
                        return Err(TechCardsError::InvalidStateTransition {
                            from: step.as_str().to_string(),
                            to: "answer".to_string(),
                        })
                    }
                };
                let level = game.current_level;
                let question = self.catalog.question(level, index).ok_or_else(|| {
                    TechCardsError::Content(format!("Question {} missing on level {}", index, level))
                })?;

                let correct = question.is_correct(option);
                let points_awarded = if correct { question.points } else { 0 };
                game.add_points(points_awarded);
                game.questions_answered += 1;
                game.current_question = None;
                game.current_step = GameStep::Theory;

                let rules = self.rules_for(level);
                let answered = game.questions_answered;
                let event = if game.is_level_complete(&rules) {
                    Some(self.finish_level(game, &rules))
                } else {
                    None
                };

                Ok(AnswerOutcome {
                    correct,
                    points_awarded,
                    correct_answer: question.correct_answer.clone(),
                    explanation: question.explanation.clone(),
                    score: game.score,
                    level,
                    answered,
                    per_level: rules.questions_per_level,
                    event,
                })
            })
            .await?;

        log_quiz_answer(user_id, outcome.level, outcome.correct, outcome.score);
        match outcome.event {
            Some(LevelEvent::Advanced { from, to }) => log_level_change(user_id, from, to, outcome.score),
            Some(LevelEvent::Finished) => info!(user_id = user_id, score = outcome.score, "Quiz finished"),
            Some(LevelEvent::Retry { level, required }) => {
                info!(user_id = user_id, level = level, required = required, score = outcome.score, "Quiz level restarted")
            }
            None => {}
        }
        Ok(outcome)
    }

    pub async fn level_progress(&self, user_id: i64) -> LevelProgress {
        let game = self
            .storage
            .load(user_id)
            .await
            .map(|state| state.game)
            .unwrap_or_default();
        let rules = self.rules_for(game.current_level);
        LevelProgress {
            level: game.current_level,
            max_level: self.catalog.max_level(),
            score: game.score,
            answered: game.questions_answered,
            per_level: rules.questions_per_level,
            points_to_next_level: game.points_to_next_level(&rules),
            step: game.current_step,
            finished: self.is_finished(&game),
        }
    }

    /// Start the whole quiz over
    pub async fn restart(&self, user_id: i64) {
        self.storage
            .update(user_id, |state| state.game = GameState::default())
            .await;
        debug!(user_id = user_id, "Quiz restarted");
    }

    fn is_finished(&self, game: &GameState) -> bool {
        self.rules_for(game.current_level).questions_per_level == 0
    }

    fn finish_level(&self, game: &mut GameState, rules: &GameRules) -> LevelEvent {
        let from = game.current_level;
        if game.advance_level(rules) {
            if self.is_finished(game) {
                LevelEvent::Finished
            } else {
                LevelEvent::Advanced { from, to: game.current_level }
            }
        } else {
            game.reset_level();
            LevelEvent::Retry {
                level: from,
                required: game.points_to_next_level(rules),
            }
        }
    }

    /// Pick a not yet asked question of the current level when none is in progress
    fn ensure_question(&self, game: &mut GameState) -> Option<usize> {
        if let Some(index) = game.current_question {
            return Some(index);
        }
        let total = self.catalog.level(game.current_level)?.questions.len();
        if total == 0 {
            return None;
        }
        let mut rng = rand::thread_rng();
        let index = match (0..total).filter(|i| !game.asked.contains(i)).choose(&mut rng) {
            Some(index) => index,
            None => {
                game.asked.clear();
                (0..total).choose(&mut rng)?
            }
        };
        game.asked.insert(index);
        game.current_question = Some(index);
        game.question_serial += 1;
        game.current_step = GameStep::Theory;
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn manager(rules: GameRules) -> GameManager {
        GameManager::new(Arc::new(Catalog::builtin().unwrap()), StateStorage::new(), rules)
    }

    async fn answer_current(game: &GameManager, user_id: i64, correctly: bool) -> AnswerOutcome {
        let current = game.current_question(user_id).await.unwrap();
        let (question, serial) = (current.question.clone(), current.serial);
        game.next_step(user_id, serial, GameStep::Theory).await.unwrap();
        game.next_step(user_id, serial, GameStep::Summary).await.unwrap();
        let correct = question.correct_index().unwrap();
        let option = if correctly { correct } else { (correct + 1) % question.options.len() };
        game.check_answer(user_id, serial, option).await.unwrap()
    }

    #[tokio::test]
    async fn test_steps_cycle_through_question() {
        let game = manager(GameRules::default());
        let current = game.current_question(1).await.unwrap();
        assert_eq!(current.level, 1);
        assert_eq!(current.serial, 1);
        assert_eq!(current.step, GameStep::Theory);

        let serial = current.serial;
        assert_eq!(game.next_step(1, serial, GameStep::Theory).await.unwrap(), GameStep::Summary);
        assert_eq!(game.next_step(1, serial, GameStep::Summary).await.unwrap(), GameStep::Question);
        assert_matches!(
            game.next_step(1, serial, GameStep::Question).await,
            Err(TechCardsError::InvalidStateTransition { .. })
        );
    }

    #[tokio::test]
    async fn test_next_from_earlier_screen_is_rejected() {
        let game = manager(GameRules::default());
        let serial = game.current_question(1).await.unwrap().serial;
        game.next_step(1, serial, GameStep::Theory).await.unwrap();

        assert_matches!(
            game.next_step(1, serial, GameStep::Theory).await,
            Err(TechCardsError::InvalidStateTransition { from, .. }) if from == "summary"
        );
        assert_matches!(
            game.next_step(1, serial + 1, GameStep::Summary).await,
            Err(TechCardsError::InvalidStateTransition { .. })
        );
        assert_eq!(game.level_progress(1).await.step, GameStep::Summary);
    }

    #[tokio::test]
    async fn test_answer_for_previous_question_is_rejected() {
        let game = manager(GameRules::default());
        let first = game.current_question(3).await.unwrap().serial;
        answer_current(&game, 3, true).await;

        let second = game.current_question(3).await.unwrap().serial;
        assert_eq!(second, first + 1);
        game.next_step(3, second, GameStep::Theory).await.unwrap();
        game.next_step(3, second, GameStep::Summary).await.unwrap();

        assert_matches!(
            game.check_answer(3, first, 0).await,
            Err(TechCardsError::InvalidStateTransition { from, .. }) if from == "question"
        );
        let progress = game.level_progress(3).await;
        assert_eq!(progress.answered, 1);
        assert_eq!(progress.score, 20);
        assert_eq!(progress.step, GameStep::Question);
    }

    #[tokio::test]
    async fn test_answer_requires_question_step() {
        let game = manager(GameRules::default());
        let serial = game.current_question(1).await.unwrap().serial;
        assert_matches!(
            game.check_answer(1, serial, 0).await,
            Err(TechCardsError::InvalidStateTransition { from, .. }) if from == "theory"
        );
    }

    #[tokio::test]
    async fn test_questions_not_repeated_within_level() {
        let game = manager(GameRules::default());
        let mut texts = Vec::new();
        for _ in 0..4 {
            texts.push(game.current_question(2).await.unwrap().question.text.clone());
            answer_current(&game, 2, false).await;
        }
        texts.sort();
        texts.dedup();
        assert_eq!(texts.len(), 4);
    }

    #[tokio::test]
    async fn test_correct_answers_advance_level() {
        let game = manager(GameRules::default());
        let mut last = None;
        for _ in 0..5 {
            last = Some(answer_current(&game, 5, true).await);
        }
        let outcome = last.unwrap();
        assert!(outcome.correct);
        assert_eq!(outcome.score, 100);
        assert_eq!(outcome.event, Some(LevelEvent::Advanced { from: 1, to: 2 }));

        let progress = game.level_progress(5).await;
        assert_eq!(progress.level, 2);
        assert_eq!(progress.answered, 0);
        assert_eq!(progress.points_to_next_level, 200);
        assert!(!progress.finished);
    }

    #[tokio::test]
    async fn test_low_score_restarts_level_keeping_score() {
        let game = manager(GameRules::default());
        answer_current(&game, 6, true).await;
        let mut last = None;
        for _ in 0..4 {
            last = Some(answer_current(&game, 6, false).await);
        }
        let outcome = last.unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.points_awarded, 0);
        assert_eq!(outcome.event, Some(LevelEvent::Retry { level: 1, required: 100 }));

        let progress = game.level_progress(6).await;
        assert_eq!(progress.level, 1);
        assert_eq!(progress.score, 20);
        assert_eq!(progress.answered, 0);
    }

    #[tokio::test]
    async fn test_passing_last_level_finishes_game() {
        let game = manager(GameRules { questions_per_level: 5, points_per_level: 10 });
        for _ in 0..5 {
            answer_current(&game, 7, true).await;
        }
        let mut last = None;
        for _ in 0..5 {
            last = Some(answer_current(&game, 7, true).await);
        }
        assert_eq!(last.unwrap().event, Some(LevelEvent::Finished));
        assert!(game.current_question(7).await.is_none());
        assert!(game.level_progress(7).await.finished);

        game.restart(7).await;
        assert_eq!(game.current_question(7).await.unwrap().level, 1);
    }

    #[test]
    fn test_per_level_count_is_capped() {
        let game = manager(GameRules { questions_per_level: 50, points_per_level: 100 });
        assert_eq!(game.rules_for(1).questions_per_level, 5);
        assert_eq!(game.rules_for(99).questions_per_level, 0);
    }
}
