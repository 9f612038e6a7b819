use satzbau_protocol::{Cardinality, Gender, MorphFlags, Person};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MorphError {
    #[error("'{word}' has no recorded plural form")]
    MissingPlural { word: String },

    #[error("'{verb}' has no recorded {person} {cardinality} form")]
    MissingForm {
        verb: String,
        person: Person,
        cardinality: Cardinality,
    },

    #[error("third-person singular pronouns need a gender")]
    MissingPronounGender,

    #[error("{person} {cardinality} pronouns take no gender, got {gender}")]
    UnexpectedPronounGender {
        person: Person,
        cardinality: Cardinality,
        gender: Gender,
    },

    #[error("Unhandled article combination: {0:?}")]
    UnhandledArticle(MorphFlags),

    #[error("Unhandled pronoun combination: {0:?}")]
    UnhandledPronoun(MorphFlags),

    #[error("No English gloss for pronoun combination: {0:?}")]
    UnhandledGloss(MorphFlags),

    #[error("Invalid grammatical person/cardinality: {0:?}")]
    InvalidPersonCardinality(MorphFlags),
}

impl MorphError {
    /// Data problems a caller can step around by picking other words.
    ///
    /// The remaining kinds mean a rule table does not cover a combination
    /// the category model allows.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            MorphError::MissingPlural { .. }
                | MorphError::MissingForm { .. }
                | MorphError::MissingPronounGender
                | MorphError::UnexpectedPronounGender { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, MorphError>;
