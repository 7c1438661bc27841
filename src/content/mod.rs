//! Static content module
//!
//! This module loads the flashcard decks, the algorithm catalog and the
//! quiz levels into an in-memory catalog.

pub mod loader;

pub use loader::Catalog;
