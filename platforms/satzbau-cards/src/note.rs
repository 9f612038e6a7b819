use satzbau_bank::Bank;
use satzbau_composer::RenderedSentence;
use satzbau_protocol::{
    BankCategory, BankEntry, Conjugation, DeckId, ModelId, NounEntry, PartOfSpeech, PhraseEntry,
    VerbEntry, VocabularyEntry,
};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::models::{
    GRAMMAR_DECK_ID, GRAMMAR_DECK_NAME, GRAMMAR_MODEL, NOUN_MODEL, PHRASES_DECK_ID, PHRASES_DECK_NAME,
    PHRASE_MODEL, VERB_MODEL, VOCABULARY_DECK_ID, VOCABULARY_DECK_NAME, VOCABULARY_MODEL,
};

/// A filled-in note, ready for packaging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub model: ModelId,
    pub guid: String,
    pub fields: Vec<String>,
    pub tags: Vec<String>,
}

impl Note {
    /// Builds a note whose guid is derived from its first field, so
    /// re-exporting the same word updates the existing card.
    pub fn new(model: ModelId, fields: Vec<String>, tags: Vec<String>) -> Self {
        let guid = guid_for(fields.first().map(String::as_str).unwrap_or_default());
        Self {
            model,
            guid,
            fields,
            tags,
        }
    }
}

/// First 8 bytes of the SHA-256 of `key`, hex encoded.
pub fn guid_for(key: &str) -> String {
    let digest = Sha256::digest(key.as_bytes());
    hex::encode(&digest[..8])
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub id: DeckId,
    pub name: String,
    pub notes: Vec<Note>,
}

impl Deck {
    pub fn new(id: DeckId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            notes: Vec::new(),
        }
    }

    pub fn vocabulary() -> Self {
        Self::new(VOCABULARY_DECK_ID, VOCABULARY_DECK_NAME)
    }

    pub fn phrases() -> Self {
        Self::new(PHRASES_DECK_ID, PHRASES_DECK_NAME)
    }

    pub fn grammar() -> Self {
        Self::new(GRAMMAR_DECK_ID, GRAMMAR_DECK_NAME)
    }

    pub fn add_note(&mut self, note: Note) {
        self.notes.push(note);
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

fn tagged(part_of_speech: PartOfSpeech, tags: &[String]) -> Vec<String> {
    std::iter::once(part_of_speech.to_string())
        .chain(tags.iter().cloned())
        .collect()
}

fn noun_note(noun: &NounEntry) -> Note {
    Note::new(
        NOUN_MODEL.id,
        vec![
            noun.singular.clone(),
            noun.english.clone(),
            PartOfSpeech::Noun.to_string(),
            noun.gender.article().to_string(),
        ],
        tagged(PartOfSpeech::Noun, &noun.tags),
    )
}

fn verb_note(verb: &VerbEntry) -> Note {
    let mut fields = vec![
        verb.infinitive.clone(),
        verb.english.clone(),
        PartOfSpeech::Verb.to_string(),
    ];
    fields.extend(
        Conjugation::SLOTS
            .iter()
            .map(|(person, cardinality)| {
                verb.conjugation
                    .form(*person, *cardinality)
                    .unwrap_or_default()
                    .to_string()
            }),
    );

    Note::new(VERB_MODEL.id, fields, tagged(PartOfSpeech::Verb, &verb.tags))
}

fn vocabulary_note(word: &VocabularyEntry) -> Note {
    Note::new(
        VOCABULARY_MODEL.id,
        vec![
            word.german.clone(),
            word.english.clone(),
            word.part_of_speech.to_string(),
        ],
        tagged(word.part_of_speech, &word.tags),
    )
}

fn phrase_note(phrase: &PhraseEntry) -> Note {
    Note::new(
        PHRASE_MODEL.id,
        vec![phrase.german.clone(), phrase.english.clone()],
        phrase.tags.clone(),
    )
}

/// Note for a bank entry, using the model that matches its kind.
pub fn note_for_entry(entry: &BankEntry) -> Note {
    match entry {
        BankEntry::Noun(noun) => noun_note(noun),
        BankEntry::Verb(verb) => verb_note(verb),
        BankEntry::Vocabulary(word) => vocabulary_note(word),
        BankEntry::Phrase(phrase) => phrase_note(phrase),
    }
}

/// Grammar note for an accepted practice sentence.
pub fn note_for_sentence(sentence: &RenderedSentence) -> Note {
    Note::new(
        GRAMMAR_MODEL.id,
        vec![
            sentence.answer.clone(),
            sentence.question.clone(),
            sentence.english.clone(),
            sentence.hint_text().to_string(),
            sentence.format().to_string(),
        ],
        vec![sentence.format().to_string()],
    )
}

/// Vocabulary and phrase decks holding every entry of `bank`.
pub fn vocabulary_decks(bank: &Bank) -> Vec<Deck> {
    let mut vocabulary = Deck::vocabulary();
    let mut phrases = Deck::phrases();

    for entry in bank.entries() {
        let note = note_for_entry(entry);
        match entry.category() {
            BankCategory::Vocabulary => vocabulary.add_note(note),
            BankCategory::Phrase => phrases.add_note(note),
        }
    }

    log::info!(
        "Built {} vocabulary notes and {} phrase notes",
        vocabulary.len(),
        phrases.len()
    );
    vec![vocabulary, phrases]
}

/// Grammar deck holding the given sentences.
pub fn grammar_deck<'a, I>(sentences: I) -> Deck
where
    I: IntoIterator<Item = &'a RenderedSentence>,
{
    let mut deck = Deck::grammar();
    for sentence in sentences {
        deck.add_note(note_for_sentence(sentence));
    }
    deck
}
