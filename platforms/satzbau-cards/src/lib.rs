//! Flashcard packaging for bank entries and practice sentences.

pub mod error;
pub mod models;
pub mod note;
pub mod package;

pub use error::{CardError, Result};
pub use models::{model_by_id, NoteModel, Template, ALL_MODELS};
pub use note::{grammar_deck, guid_for, note_for_entry, note_for_sentence, vocabulary_decks, Deck, Note};
pub use package::{JsonPackageWriter, PackageWriter};
