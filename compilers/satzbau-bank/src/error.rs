use thiserror::Error;

#[derive(Error, Debug)]
pub enum BankError {
    #[error("'{0}' is missing category")]
    MissingCategory(String),

    #[error("Row is missing its German text")]
    MissingGerman,

    #[error("'{0}' is missing part of speech")]
    MissingPartOfSpeech(String),

    #[error("'{0}' is missing gender")]
    MissingGender(String),

    #[error("'{word}' has unknown {field} {value:?}")]
    InvalidValue {
        word: String,
        field: &'static str,
        value: String,
    },

    #[error("Row {index} is malformed: {reason}")]
    MalformedRow { index: usize, reason: String },

    #[error("Malformed conjugation summary {input:?}: {reason}")]
    Conjugation { input: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Archive error: {0}")]
    Archive(String),
}

impl BankError {
    /// Errors that concern a single row; the loader skips the row and goes on.
    pub fn is_record_error(&self) -> bool {
        matches!(
            self,
            BankError::MissingCategory(_)
                | BankError::MissingGerman
                | BankError::MissingPartOfSpeech(_)
                | BankError::MissingGender(_)
                | BankError::InvalidValue { .. }
                | BankError::MalformedRow { .. }
                | BankError::Conjugation { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, BankError>;
