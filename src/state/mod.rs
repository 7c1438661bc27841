//! State management module
//!
//! This module handles per-user progress kept in memory

pub mod context;
pub mod storage;

// Re-export commonly used state components
pub use context::{GameRules, GameState, GameStep, UserState};
pub use storage::{StateStorage, StorageStats};
