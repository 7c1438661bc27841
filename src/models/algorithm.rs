//! Algorithm catalog models

use serde::{Deserialize, Serialize};
use super::card::Card;

/// Difficulty of an algorithm problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "легкая",
            Difficulty::Medium => "средняя",
            Difficulty::Hard => "сложная",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

/// Worked input/output example
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmExample {
    pub input: String,
    pub output: String,
    pub explanation: String,
}

/// Algorithm problem with reference implementations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Algorithm {
    pub title: String,
    pub description: String,
    pub complexity: String,
    pub theory: String,
    pub visualization_url: String,
    pub java_code: String,
    #[serde(default)]
    pub python_code: Option<String>,
    #[serde(default)]
    pub leetcode_problems: Vec<String>,
    #[serde(default)]
    pub examples: Vec<AlgorithmExample>,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub difficulty: Difficulty,
}

fn default_category() -> String {
    "general".to_string()
}

impl Algorithm {
    /// Present the algorithm as a regular card; code samples go into fenced blocks
    pub fn to_card(&self) -> Card {
        let mut theory = format!(
            "{}\n\n{}\n\nКатегория: {}, сложность: {}\n\n{}",
            self.description,
            self.complexity,
            self.category,
            self.difficulty.label(),
            self.theory
        );

        if !self.examples.is_empty() {
            theory.push_str("\n\n**Примеры:**");
            for example in &self.examples {
                theory.push_str(&format!(
                    "\n\nВход: {}\nВыход: {}\n{}",
                    example.input, example.output, example.explanation
                ));
            }
        }

        let mut explanation = format!("Java:\n```java\n{}\n```", self.java_code);
        if let Some(python) = &self.python_code {
            explanation.push_str(&format!("\n\nPython:\n```python\n{}\n```", python));
        }
        if !self.leetcode_problems.is_empty() {
            explanation.push_str("\n\nЗадачи на LeetCode:");
            for problem in &self.leetcode_problems {
                explanation.push_str(&format!("\n- {}", problem));
            }
        }
        explanation.push_str(&format!("\n\nВизуализация: {}", self.visualization_url));

        Card::new(self.title.clone(), theory, self.description.clone()).with_explanation(explanation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary_search() -> Algorithm {
        Algorithm {
            title: "Бинарный поиск".to_string(),
            description: "Поиск в отсортированном массиве".to_string(),
            complexity: "O(log n)".to_string(),
            theory: "Делим область поиска пополам.".to_string(),
            visualization_url: "https://visualgo.net/en/binarysearch".to_string(),
            java_code: "int mid = left + (right - left) / 2;".to_string(),
            python_code: None,
            leetcode_problems: vec!["704. Binary Search".to_string()],
            examples: vec![AlgorithmExample {
                input: "arr = [1, 3, 5], target = 3".to_string(),
                output: "1".to_string(),
                explanation: "Элемент найден на позиции 1.".to_string(),
            }],
            category: "поиск".to_string(),
            difficulty: Difficulty::Easy,
        }
    }

    #[test]
    fn test_to_card_layout() {
        let card = binary_search().to_card();
        assert_eq!(card.title, "Бинарный поиск");
        assert!(card.theory.contains("сложность: легкая"));
        assert!(card.theory.contains("Выход: 1"));

        let explanation = card.explanation.unwrap();
        assert!(explanation.starts_with("Java:\n```java\n"));
        assert!(!explanation.contains("```python"));
        assert!(explanation.contains("- 704. Binary Search"));
        assert!(explanation.ends_with("https://visualgo.net/en/binarysearch"));
    }

    #[test]
    fn test_defaults_when_fields_missing() {
        let json = r#"{
            "title": "t", "description": "d", "complexity": "c", "theory": "th",
            "visualization_url": "u", "java_code": "j"
        }"#;
        let algorithm: Algorithm = serde_json::from_str(json).unwrap();
        assert_eq!(algorithm.category, "general");
        assert_eq!(algorithm.difficulty, Difficulty::Medium);
        assert!(algorithm.examples.is_empty());
    }
}
