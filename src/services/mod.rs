//! Services module
//!
//! This module contains the card, quiz and export logic shared by the handlers

pub mod deck;
pub mod export;
pub mod game;

// Re-export commonly used services
pub use deck::{CardDraw, DeckService, SectionProgress};
pub use export::{ExportedFiles, TheoryExporter};
pub use game::{AnswerOutcome, CurrentQuestion, GameManager, LevelEvent, LevelProgress};

use std::sync::Arc;
use crate::config::settings::Settings;
use crate::content::Catalog;
use crate::state::{StateStorage, StorageStats};

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub settings: Settings,
    pub catalog: Arc<Catalog>,
    pub storage: StateStorage,
    pub deck_service: DeckService,
    pub game_manager: GameManager,
    pub exporter: TheoryExporter,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services sharing one state storage
    pub fn new(settings: Settings, catalog: Catalog) -> Self {
        let catalog = Arc::new(catalog);
        let storage = StateStorage::new();

        let deck_service = DeckService::new(catalog.clone(), storage.clone());
        let game_manager = GameManager::new(catalog.clone(), storage.clone(), settings.game_rules());
        let exporter = TheoryExporter::new(
            catalog.clone(),
            settings.export.clone(),
            settings.content.sections.clone(),
        );

        Self {
            settings,
            catalog,
            storage,
            deck_service,
            game_manager,
            exporter,
        }
    }

    /// Forget all progress of a user
    pub async fn reset_user(&self, user_id: i64) -> bool {
        self.storage.reset(user_id).await
    }

    pub async fn stats(&self) -> StorageStats {
        self.storage.stats().await
    }
}
