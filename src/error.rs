//! Error types for confessor

use crate::domain::Locale;
use thiserror::Error;

/// Main error type for the confessor application
#[derive(Debug, Error)]
pub enum ConfessorError {
    #[error("No questions for mode '{mode}' and language '{lang}' in profile '{profile}'")]
    NoQuestions {
        profile: String,
        mode: String,
        lang: String,
    },

    #[error("No records found for profile '{profile}' and language '{lang}'")]
    NoRecordsFound { profile: String, lang: String },

    #[error("Profile already exists: {0}")]
    ProfileAlreadyExists(String),

    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    #[error("'{0}' is reserved and cannot be used as a language code")]
    ReservedLanguage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfessorError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfessorError::NoQuestions { .. } => 2,
            ConfessorError::NoRecordsFound { .. } => 3,
            ConfessorError::ProfileAlreadyExists(_) => 4,
            ConfessorError::ProfileNotFound(_) => 5,
            ConfessorError::ReservedLanguage(_) => 6,
            _ => 1,
        }
    }

    /// Whether this is an expected outcome the user can act on,
    /// as opposed to a storage or configuration failure
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ConfessorError::NoQuestions { .. }
                | ConfessorError::NoRecordsFound { .. }
                | ConfessorError::ProfileAlreadyExists(_)
                | ConfessorError::ProfileNotFound(_)
                | ConfessorError::ReservedLanguage(_)
        )
    }

    /// Message shown to the user in the requested interface language.
    ///
    /// Unrecoverable errors get a generic notice; their details belong in the log.
    pub fn localized_message(&self, locale: Locale) -> String {
        match self {
            ConfessorError::NoQuestions {
                profile,
                mode,
                lang,
            } => locale.no_questions(profile, mode, lang),
            ConfessorError::NoRecordsFound { .. } => locale.no_records().to_string(),
            ConfessorError::ProfileAlreadyExists(name) => locale.profile_exists(name),
            ConfessorError::ProfileNotFound(name) => locale.profile_not_found(name),
            ConfessorError::ReservedLanguage(lang) => locale.reserved_language(lang),
            _ => locale.unexpected_failure().to_string(),
        }
    }
}

/// Result type using ConfessorError
pub type Result<T> = std::result::Result<T, ConfessorError>;
