use satzbau_morph::MorphError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComposeError {
    #[error(transparent)]
    Morph(#[from] MorphError),

    #[error("Cannot compose a sentence from an empty {0} pool")]
    EmptyPool(&'static str),
}

impl ComposeError {
    /// True when picking a fresh random sentence gets past the failure.
    pub fn is_recoverable(&self) -> bool {
        match self {
            ComposeError::Morph(err) => err.is_recoverable(),
            ComposeError::EmptyPool(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, ComposeError>;
