//! Declension and conjugation for the sentence generator.
//!
//! Nouns and pronouns are wrapped in rendering contexts ([`ArticledNoun`],
//! [`Pronoun`]) that know their current categories. Surface strings come from
//! fixed, flag-keyed tables; conjugation is a lookup against the six forms
//! stored in the bank.

pub mod conjugation;
pub mod declension;
pub mod error;
pub mod noun;
pub mod pronoun;
pub mod rotation;
mod tables;

pub use conjugation::{conjugate, conjugate_flags, subject_label};
pub use declension::Declined;
pub use error::{MorphError, Result};
pub use noun::{get_article, ArticledNoun};
pub use pronoun::{english_pronoun, get_pronoun, Pronoun};
pub use rotation::{random_value, variants, Rotatable, Rotation, Variants};
