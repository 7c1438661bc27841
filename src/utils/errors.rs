//! Error handling for TechCards
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for TechCards application
#[derive(Error, Debug)]
pub enum TechCardsError {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Content error: {0}")]
    Content(String),

    #[error("Unknown section: {0}")]
    UnknownSection(String),

    #[error("Card not found: {section} #{index}")]
    CardNotFound { section: String, index: usize },

    #[error("Invalid callback data: {0}")]
    InvalidCallback(String),

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for TechCards operations
pub type Result<T> = std::result::Result<T, TechCardsError>;

impl TechCardsError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            TechCardsError::Telegram(_) => true,
            TechCardsError::Config(_) => false,
            TechCardsError::ConfigLoad(_) => false,
            TechCardsError::Content(_) => false,
            TechCardsError::UnknownSection(_) => true,
            TechCardsError::CardNotFound { .. } => true,
            TechCardsError::InvalidCallback(_) => true,
            TechCardsError::InvalidStateTransition { .. } => true,
            TechCardsError::Serialization(_) => false,
            TechCardsError::Io(_) => true,
            TechCardsError::InvalidInput(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TechCardsError::Config(_) => ErrorSeverity::Critical,
            TechCardsError::ConfigLoad(_) => ErrorSeverity::Critical,
            TechCardsError::Content(_) => ErrorSeverity::Critical,
            TechCardsError::UnknownSection(_) => ErrorSeverity::Warning,
            TechCardsError::CardNotFound { .. } => ErrorSeverity::Warning,
            TechCardsError::InvalidCallback(_) => ErrorSeverity::Warning,
            TechCardsError::InvalidStateTransition { .. } => ErrorSeverity::Info,
            TechCardsError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_classification() {
        assert_eq!(TechCardsError::Config("x".into()).severity(), ErrorSeverity::Critical);
        assert_eq!(
            TechCardsError::CardNotFound { section: "kafka".into(), index: 99 }.severity(),
            ErrorSeverity::Warning
        );
        assert_eq!(ErrorSeverity::Critical.to_string(), "CRITICAL");
    }

    #[test]
    fn test_recoverable_errors() {
        assert!(TechCardsError::InvalidCallback("foo".into()).is_recoverable());
        assert!(!TechCardsError::Content("broken deck".into()).is_recoverable());
    }

    #[test]
    fn test_error_messages() {
        let err = TechCardsError::CardNotFound { section: "spring".into(), index: 3 };
        assert_eq!(err.to_string(), "Card not found: spring #3");
        let err = TechCardsError::InvalidStateTransition { from: "theory".into(), to: "answer".into() };
        assert_eq!(err.to_string(), "Invalid state transition: theory -> answer");
    }
}
