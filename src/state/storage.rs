//! State storage implementation
//!
//! Process-wide in-memory map of user states. Nothing is persisted: a restart
//! forgets every user's progress.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;
use super::context::UserState;

/// In-memory user state storage shared between handlers
#[derive(Clone, Default)]
pub struct StateStorage {
    users: Arc<Mutex<HashMap<i64, UserState>>>,
}

/// Storage statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageStats {
    pub total_users: usize,
    pub users_in_quiz: usize,
    pub cards_viewed: usize,
}

impl StateStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of a user's state
    pub async fn load(&self, user_id: i64) -> Option<UserState> {
        self.users.lock().await.get(&user_id).cloned()
    }

    /// Mutate a user's state, creating it on first use
    pub async fn update<F, R>(&self, user_id: i64, f: F) -> R
    where
        F: FnOnce(&mut UserState) -> R,
    {
        let mut users = self.users.lock().await;
        let state = users.entry(user_id).or_insert_with(|| {
            debug!(user_id = user_id, "Creating state for new user");
            UserState::new(user_id)
        });
        let result = f(state);
        state.touch();
        result
    }

    /// Forget everything about a user
    pub async fn reset(&self, user_id: i64) -> bool {
        let removed = self.users.lock().await.remove(&user_id).is_some();
        debug!(user_id = user_id, removed = removed, "User state reset");
        removed
    }

    pub async fn stats(&self) -> StorageStats {
        let users = self.users.lock().await;
        StorageStats {
            total_users: users.len(),
            users_in_quiz: users
                .values()
                .filter(|u| u.game.score > 0 || u.game.current_question.is_some() || u.game.current_level > 1)
                .count(),
            cards_viewed: users
                .values()
                .map(|u| u.viewed.values().map(|v| v.len()).sum::<usize>())
                .sum(),
        }
    }
}
