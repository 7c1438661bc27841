//! Data models module
//!
//! This module contains the static content records served by the bots

pub mod algorithm;
pub mod card;
pub mod question;
pub mod section;

pub use algorithm::{Algorithm, AlgorithmExample, Difficulty};
pub use card::Card;
pub use question::{Question, QuizLevel};
pub use section::Section;
