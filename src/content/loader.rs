//! Content catalog loading
//!
//! Decks, the algorithm catalog and quiz levels are JSON documents. The
//! documents under `content/` are embedded into the binary; a content directory
//! can override any of them file by file.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use serde::Deserialize;
use tokio::fs;
use tracing::{info, warn, debug};
use crate::models::{Algorithm, Card, Question, QuizLevel, Section};
use crate::utils::errors::{TechCardsError, Result};

const ALGORITHM_CATALOG_FILE: &str = "algorithm_catalog.json";
const QUIZ_FILE: &str = "quiz.json";

#[derive(Debug, Deserialize)]
struct DeckFile {
    section: Section,
    cards: Vec<Card>,
}

#[derive(Debug, Deserialize)]
struct AlgorithmCatalogFile {
    algorithms: Vec<Algorithm>,
}

#[derive(Debug, Deserialize)]
struct QuizFile {
    levels: Vec<QuizLevel>,
}

/// Sections backed by a plain deck file
const DECK_SECTIONS: [Section; 7] = [
    Section::Kafka,
    Section::JavaCore,
    Section::Spring,
    Section::Database,
    Section::DockerK8s,
    Section::Algorithms,
    Section::SystemDesign,
];

fn builtin_document(file_name: &str) -> Option<&'static str> {
    let document = match file_name {
        "kafka.json" => include_str!("../../content/kafka.json"),
        "java_core.json" => include_str!("../../content/java_core.json"),
        "spring.json" => include_str!("../../content/spring.json"),
        "database.json" => include_str!("../../content/database.json"),
        "docker_k8s.json" => include_str!("../../content/docker_k8s.json"),
        "algorithms.json" => include_str!("../../content/algorithms.json"),
        "system_design.json" => include_str!("../../content/system_design.json"),
        ALGORITHM_CATALOG_FILE => include_str!("../../content/algorithm_catalog.json"),
        QUIZ_FILE => include_str!("../../content/quiz.json"),
        _ => return None,
    };
    Some(document)
}

fn deck_file_name(section: Section) -> String {
    format!("{}.json", section.key())
}

/// All static content served by the bots
#[derive(Debug, Clone)]
pub struct Catalog {
    decks: BTreeMap<Section, Vec<Card>>,
    algorithms: Vec<Algorithm>,
    levels: Vec<QuizLevel>,
}

impl Catalog {
    /// Catalog built from the embedded documents
    pub fn builtin() -> Result<Self> {
        let mut documents = BTreeMap::new();
        for file_name in Self::file_names() {
            let document = builtin_document(&file_name)
                .ok_or_else(|| TechCardsError::Content(format!("No embedded document {}", file_name)))?;
            documents.insert(file_name, document.to_string());
        }
        Self::from_documents(&documents)
    }

    /// Catalog loaded from a content directory, embedded documents fill the gaps
    pub async fn load(directory: &Path) -> Result<Self> {
        if !directory.exists() {
            return Err(TechCardsError::Config(format!(
                "Content directory not found: {}",
                directory.display()
            )));
        }

        let mut documents = BTreeMap::new();
        for file_name in Self::file_names() {
            let path = directory.join(&file_name);
            let document = if path.exists() {
                info!(path = %path.display(), "Loading content file");
                fs::read_to_string(&path).await?
            } else {
                debug!(file = %file_name, "Content file not found in directory, using embedded copy");
                builtin_document(&file_name)
                    .map(str::to_string)
                    .ok_or_else(|| TechCardsError::Content(format!("No embedded document {}", file_name)))?
            };
            documents.insert(file_name, document);
        }

        Self::from_documents(&documents)
    }

    fn file_names() -> Vec<String> {
        let mut names: Vec<String> = DECK_SECTIONS.iter().map(|s| deck_file_name(*s)).collect();
        names.push(ALGORITHM_CATALOG_FILE.to_string());
        names.push(QUIZ_FILE.to_string());
        names
    }

    fn from_documents(documents: &BTreeMap<String, String>) -> Result<Self> {
        let document = |name: &str| -> Result<&String> {
            documents
                .get(name)
                .ok_or_else(|| TechCardsError::Content(format!("Missing content document {}", name)))
        };

        let mut decks = BTreeMap::new();
        for section in DECK_SECTIONS {
            let file_name = deck_file_name(section);
            let deck: DeckFile = serde_json::from_str(document(&file_name)?)
                .map_err(|e| TechCardsError::Content(format!("{}: {}", file_name, e)))?;
            if deck.section != section {
                return Err(TechCardsError::Content(format!(
                    "{} declares section {} instead of {}",
                    file_name, deck.section, section
                )));
            }
            validate_cards(section, &deck.cards)?;
            decks.insert(section, deck.cards);
        }

        let catalog: AlgorithmCatalogFile = serde_json::from_str(document(ALGORITHM_CATALOG_FILE)?)
            .map_err(|e| TechCardsError::Content(format!("{}: {}", ALGORITHM_CATALOG_FILE, e)))?;
        let algorithm_cards: Vec<Card> = catalog.algorithms.iter().map(Algorithm::to_card).collect();
        validate_cards(Section::AlgorithmCatalog, &algorithm_cards)?;
        decks.insert(Section::AlgorithmCatalog, algorithm_cards);

        let quiz: QuizFile = serde_json::from_str(document(QUIZ_FILE)?)
            .map_err(|e| TechCardsError::Content(format!("{}: {}", QUIZ_FILE, e)))?;
        let mut levels = quiz.levels;
        validate_levels(&mut levels)?;

        for (section, cards) in &decks {
            if cards.is_empty() {
                warn!(section = %section, "Deck is empty");
            }
        }

        let catalog = Self {
            decks,
            algorithms: catalog.algorithms,
            levels,
        };
        info!(
            decks = catalog.decks.len(),
            cards = catalog.decks.values().map(Vec::len).sum::<usize>(),
            quiz_levels = catalog.levels.len(),
            "Content catalog loaded"
        );
        Ok(catalog)
    }

    pub fn deck(&self, section: Section) -> &[Card] {
        self.decks.get(&section).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn card(&self, section: Section, index: usize) -> Result<&Card> {
        self.deck(section).get(index).ok_or_else(|| TechCardsError::CardNotFound {
            section: section.key().to_string(),
            index,
        })
    }

    pub fn total_cards(&self, section: Section) -> usize {
        self.deck(section).len()
    }

    pub fn algorithms(&self) -> &[Algorithm] {
        &self.algorithms
    }

    pub fn level(&self, level: u32) -> Option<&QuizLevel> {
        self.levels.iter().find(|l| l.level == level)
    }

    pub fn question(&self, level: u32, index: usize) -> Option<&Question> {
        self.level(level).and_then(|l| l.questions.get(index))
    }

    pub fn max_level(&self) -> u32 {
        self.levels.iter().map(|l| l.level).max().unwrap_or(0)
    }
}

fn validate_cards(section: Section, cards: &[Card]) -> Result<()> {
    for (index, card) in cards.iter().enumerate() {
        if card.title.trim().is_empty() || card.theory.trim().is_empty() {
            return Err(TechCardsError::Content(format!(
                "Card {} in {} has an empty title or theory",
                index, section
            )));
        }
    }
    Ok(())
}

fn validate_levels(levels: &mut [QuizLevel]) -> Result<()> {
    levels.sort_by_key(|l| l.level);

    let mut seen = HashSet::new();
    for level in levels.iter() {
        if !seen.insert(level.level) {
            return Err(TechCardsError::Content(format!("Duplicate quiz level {}", level.level)));
        }
    }
    for (position, level) in levels.iter().enumerate() {
        if level.level as usize != position + 1 {
            return Err(TechCardsError::Content(format!(
                "Quiz levels must be numbered 1, 2, 3... without gaps, found {} at position {}",
                level.level,
                position + 1
            )));
        }
        if level.questions.is_empty() {
            return Err(TechCardsError::Content(format!("Quiz level {} has no questions", level.level)));
        }
    }

    for level in levels.iter() {
        for question in &level.questions {
            if question.options.len() < 2 {
                return Err(TechCardsError::Content(format!(
                    "Question '{}' on level {} needs at least two options",
                    question.text, level.level
                )));
            }
            if question.correct_index().is_none() {
                return Err(TechCardsError::Content(format!(
                    "Question '{}' on level {} has no option matching its correct answer",
                    question.text, level.level
                )));
            }
        }
    }
    Ok(())
}
