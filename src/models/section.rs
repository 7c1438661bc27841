//! Content sections

use serde::{Deserialize, Serialize};
use crate::utils::errors::{TechCardsError, Result};

/// A deck of cards shown as one entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Kafka,
    JavaCore,
    Spring,
    Database,
    DockerK8s,
    Algorithms,
    AlgorithmCatalog,
    SystemDesign,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Kafka,
        Section::JavaCore,
        Section::Spring,
        Section::Database,
        Section::DockerK8s,
        Section::Algorithms,
        Section::AlgorithmCatalog,
        Section::SystemDesign,
    ];

    /// Stable key used in callback data, config files and content file names
    pub fn key(&self) -> &'static str {
        match self {
            Section::Kafka => "kafka",
            Section::JavaCore => "java_core",
            Section::Spring => "spring",
            Section::Database => "database",
            Section::DockerK8s => "docker_k8s",
            Section::Algorithms => "algorithms",
            Section::AlgorithmCatalog => "algorithm_catalog",
            Section::SystemDesign => "system_design",
        }
    }

    pub fn from_key(key: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|section| section.key() == key)
            .ok_or_else(|| TechCardsError::UnknownSection(key.to_string()))
    }

    /// Button and heading title
    pub fn title(&self) -> &'static str {
        match self {
            Section::Kafka => "Apache Kafka",
            Section::JavaCore => "Java Core",
            Section::Spring => "Spring Framework",
            Section::Database => "Базы данных",
            Section::DockerK8s => "Docker & Kubernetes",
            Section::Algorithms => "Алгоритмы",
            Section::AlgorithmCatalog => "Алгоритмические задачи",
            Section::SystemDesign => "System Design",
        }
    }

    /// Prompt shown above the topic list
    pub fn menu_prompt(&self) -> &'static str {
        match self {
            Section::Kafka => "Выберите тему по Apache Kafka:",
            Section::JavaCore => "Выберите тему по Java Core:",
            Section::Spring => "Выберите тему по Spring:",
            Section::Database => "Выберите тему по базам данных:",
            Section::DockerK8s => "Выберите тему по Docker и Kubernetes:",
            Section::Algorithms => "Выберите тему по алгоритмам:",
            Section::AlgorithmCatalog => "Выберите алгоритм:",
            Section::SystemDesign => "Выберите тему по проектированию систем:",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
