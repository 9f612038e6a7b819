use rkyv::{Archive, Deserialize, Serialize};
use crate::ids::EntryId;
use crate::morphology::{BankCategory, Cardinality, Case, Gender, PartOfSpeech, Person};
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// A noun as recorded in the bank. Gender is mandatory; the plural is not.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct NounEntry {
    pub id: EntryId,
    pub singular: String,
    pub plural: Option<String>,
    pub english: String,
    pub synonyms: Option<String>,
    pub gender: Gender,
    pub tags: Vec<String>,
}

impl NounEntry {
    /// The recorded plural, treating an empty string as absent.
    pub fn plural(&self) -> Option<&str> {
        self.plural.as_deref().filter(|plural| !plural.is_empty())
    }

    pub fn has_plural(&self) -> bool {
        self.plural().is_some()
    }
}

/// The six present-tense forms of a verb, one per person and number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Conjugation {
    pub first_singular: Option<String>,
    pub second_singular: Option<String>,
    pub third_singular: Option<String>,
    pub first_plural: Option<String>,
    pub second_plural: Option<String>,
    pub third_plural: Option<String>,
}

impl Conjugation {
    /// Slot order used by cards and summaries: ich, du, er/sie/es, wir, ihr, Sie.
    pub const SLOTS: [(Person, Cardinality); 6] = [
        (Person::First, Cardinality::Singular),
        (Person::Second, Cardinality::Singular),
        (Person::Third, Cardinality::Singular),
        (Person::First, Cardinality::Plural),
        (Person::Second, Cardinality::Plural),
        (Person::Third, Cardinality::Plural),
    ];

    /// Stored form for a person and number; empty strings count as missing.
    pub fn form(&self, person: Person, cardinality: Cardinality) -> Option<&str> {
        let slot = match (person, cardinality) {
            (Person::First, Cardinality::Singular) => &self.first_singular,
            (Person::Second, Cardinality::Singular) => &self.second_singular,
            (Person::Third, Cardinality::Singular) => &self.third_singular,
            (Person::First, Cardinality::Plural) => &self.first_plural,
            (Person::Second, Cardinality::Plural) => &self.second_plural,
            (Person::Third, Cardinality::Plural) => &self.third_plural,
        };
        slot.as_deref().filter(|form| !form.is_empty())
    }

    pub fn is_complete(&self) -> bool {
        Self::SLOTS
            .iter()
            .all(|(person, cardinality)| self.form(*person, *cardinality).is_some())
    }

    pub fn is_empty(&self) -> bool {
        Self::SLOTS
            .iter()
            .all(|(person, cardinality)| self.form(*person, *cardinality).is_none())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct VerbEntry {
    pub id: EntryId,
    pub infinitive: String,
    pub english: String,
    pub synonyms: Option<String>,
    pub conjugation: Conjugation,
    /// Case of the direct object.
    pub requires_case: Case,
    pub tags: Vec<String>,
}

/// Any other part of speech: stored and carded, never declined.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct VocabularyEntry {
    pub id: EntryId,
    pub german: String,
    pub english: String,
    pub synonyms: Option<String>,
    pub part_of_speech: PartOfSpeech,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct PhraseEntry {
    pub id: EntryId,
    pub german: String,
    pub english: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub enum BankEntry {
    Noun(NounEntry),
    Verb(VerbEntry),
    Vocabulary(VocabularyEntry),
    Phrase(PhraseEntry),
}

impl BankEntry {
    pub fn id(&self) -> EntryId {
        match self {
            BankEntry::Noun(noun) => noun.id,
            BankEntry::Verb(verb) => verb.id,
            BankEntry::Vocabulary(word) => word.id,
            BankEntry::Phrase(phrase) => phrase.id,
        }
    }

    pub fn category(&self) -> BankCategory {
        match self {
            BankEntry::Phrase(_) => BankCategory::Phrase,
            _ => BankCategory::Vocabulary,
        }
    }

    pub fn part_of_speech(&self) -> Option<PartOfSpeech> {
        match self {
            BankEntry::Noun(_) => Some(PartOfSpeech::Noun),
            BankEntry::Verb(_) => Some(PartOfSpeech::Verb),
            BankEntry::Vocabulary(word) => Some(word.part_of_speech),
            BankEntry::Phrase(_) => None,
        }
    }

    /// Headword: singular for nouns, infinitive for verbs.
    pub fn german(&self) -> &str {
        match self {
            BankEntry::Noun(noun) => &noun.singular,
            BankEntry::Verb(verb) => &verb.infinitive,
            BankEntry::Vocabulary(word) => &word.german,
            BankEntry::Phrase(phrase) => &phrase.german,
        }
    }

    pub fn english(&self) -> &str {
        match self {
            BankEntry::Noun(noun) => &noun.english,
            BankEntry::Verb(verb) => &verb.english,
            BankEntry::Vocabulary(word) => &word.english,
            BankEntry::Phrase(phrase) => &phrase.english,
        }
    }

    pub fn tags(&self) -> &[String] {
        match self {
            BankEntry::Noun(noun) => &noun.tags,
            BankEntry::Verb(verb) => &verb.tags,
            BankEntry::Vocabulary(word) => &word.tags,
            BankEntry::Phrase(phrase) => &phrase.tags,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags().iter().any(|t| t == tag)
    }
}

/// Root of a compiled bank archive.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Lexicon {
    pub version: u32,
    pub entries: Vec<BankEntry>,
}
