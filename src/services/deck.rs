//! Deck service
//!
//! Card browsing for the catalog and trainer bots: topic lookups, random
//! draws without replacement and per-section progress.

use std::sync::Arc;
use rand::seq::IteratorRandom;
use rand::Rng;
use tracing::{debug, info};
use crate::content::Catalog;
use crate::models::{Card, Section};
use crate::state::{StateStorage, UserState};
use crate::utils::errors::Result;
use crate::utils::logging::log_card_view;

/// Card picked by the trainer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDraw {
    pub section: Section,
    pub index: usize,
    /// Cards viewed so far, this one included
    pub position: usize,
    pub total: usize,
}

/// Progress of a user in one section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionProgress {
    pub section: Section,
    pub viewed: usize,
    pub total: usize,
}

impl SectionProgress {
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.viewed >= self.total
    }
}

#[derive(Clone)]
pub struct DeckService {
    catalog: Arc<Catalog>,
    storage: StateStorage,
}

impl DeckService {
    pub fn new(catalog: Arc<Catalog>, storage: StateStorage) -> Self {
        Self { catalog, storage }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Draw a random card the user has not seen yet; `None` once the deck is exhausted
    pub async fn draw_card(&self, user_id: i64, section: Section) -> Option<CardDraw> {
        let total = self.catalog.total_cards(section);
        let draw = self
            .storage
            .update(user_id, |state| {
                let index = pick_unviewed(state, section, total, &mut rand::thread_rng())?;
                state.mark_viewed(section, index);
                state.current_card = Some((section, index));
                Some(CardDraw {
                    section,
                    index,
                    position: state.viewed_count(section),
                    total,
                })
            })
            .await;

        match &draw {
            Some(d) => log_card_view(user_id, section, d.index, d.position, d.total),
            None => info!(user_id = user_id, section = %section, "All cards of the section viewed"),
        }
        draw
    }

    /// Card picked from the topic list, marked as viewed
    pub async fn view_topic(&self, user_id: i64, section: Section, index: usize) -> Result<&Card> {
        let card = self.catalog.card(section, index)?;
        let viewed = self
            .storage
            .update(user_id, |state| {
                state.mark_viewed(section, index);
                state.viewed_count(section)
            })
            .await;
        log_card_view(user_id, section, index, viewed, self.catalog.total_cards(section));
        Ok(card)
    }

    pub async fn progress(&self, user_id: i64, sections: &[Section]) -> Vec<SectionProgress> {
        let state = self.storage.load(user_id).await;
        sections
            .iter()
            .map(|section| SectionProgress {
                section: *section,
                viewed: state.as_ref().map(|s| s.viewed_count(*section)).unwrap_or(0),
                total: self.catalog.total_cards(*section),
            })
            .collect()
    }

    /// Forget viewed cards of one section so the deck can be studied again
    pub async fn restart(&self, user_id: i64, section: Section) {
        self.storage.update(user_id, |state| state.forget_section(section)).await;
        debug!(user_id = user_id, section = %section, "Section progress cleared");
    }
}

fn pick_unviewed<R: Rng + ?Sized>(
    state: &UserState,
    section: Section,
    total: usize,
    rng: &mut R,
) -> Option<usize> {
    (0..total)
        .filter(|index| !state.is_viewed(section, *index))
        .choose(rng)
}
