use core::fmt;

use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

use crate::order::Ordered;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Case {
    Nominative = 0,
    Accusative = 1,
    Dative = 2,
    Genitive = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Gender {
    #[cfg_attr(feature = "serde", serde(alias = "der"))]
    Masculine = 0,
    #[cfg_attr(feature = "serde", serde(alias = "die"))]
    Feminine = 1,
    #[cfg_attr(feature = "serde", serde(alias = "das"))]
    Neuter = 2,
}

impl Gender {
    /// Nominative definite article, the way learners memorise noun gender.
    pub const fn article(self) -> &'static str {
        match self {
            Gender::Masculine => "der",
            Gender::Feminine => "die",
            Gender::Neuter => "das",
        }
    }
}

/// Grammatical number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Cardinality {
    Singular = 0,
    Plural = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Person {
    #[cfg_attr(feature = "serde", serde(alias = "first-person"))]
    First = 1,
    #[cfg_attr(feature = "serde", serde(alias = "second-person"))]
    Second = 2,
    #[cfg_attr(feature = "serde", serde(alias = "third-person"))]
    Third = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum ArticleType {
    Definite = 0,
    Indefinite = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum PronounType {
    Personal = 0,
    Possessive = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum PartOfSpeech {
    Noun = 0,
    Verb = 1,
    Adjective = 2,
    Adverb = 3,
    Conjunction = 4,
    Preposition = 5,
    Pronoun = 6,
    Number = 7,
}

/// Top-level grouping of bank rows; decides which deck a row lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum BankCategory {
    #[cfg_attr(feature = "serde", serde(alias = "vocabulary"))]
    Vocabulary = 0,
    #[cfg_attr(feature = "serde", serde(alias = "phrase"))]
    Phrase = 1,
}

impl Ordered for Case {
    const ORDER: &'static [Self] = &[
        Case::Nominative,
        Case::Accusative,
        Case::Dative,
        Case::Genitive,
    ];
}

impl Ordered for Gender {
    const ORDER: &'static [Self] = &[Gender::Masculine, Gender::Feminine, Gender::Neuter];
}

impl Ordered for Cardinality {
    const ORDER: &'static [Self] = &[Cardinality::Singular, Cardinality::Plural];
}

impl Ordered for Person {
    const ORDER: &'static [Self] = &[Person::First, Person::Second, Person::Third];
}

impl Ordered for ArticleType {
    const ORDER: &'static [Self] = &[ArticleType::Definite, ArticleType::Indefinite];
}

impl Ordered for PronounType {
    const ORDER: &'static [Self] = &[PronounType::Personal, PronounType::Possessive];
}

bitflags! {
    /// One bit per category value. A rendering context describes itself as
    /// the union of its values; the rule tables are keyed by these unions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct MorphFlags: u32 {
        // Case (Bits 0-3)
        const NOMINATIVE = 1;
        const ACCUSATIVE = 2;
        const DATIVE = 4;
        const GENITIVE = 8;

        // Gender (Bits 4-6)
        const MASCULINE = 16;
        const FEMININE = 32;
        const NEUTER = 64;

        // Number (Bits 7-8)
        const SINGULAR = 128;
        const PLURAL = 256;

        // Person (Bits 9-11)
        const FIRST_PERSON = 512;
        const SECOND_PERSON = 1024;
        const THIRD_PERSON = 2048;

        // Article type (Bits 12-13)
        const DEFINITE = 4096;
        const INDEFINITE = 8192;

        // Pronoun type (Bits 14-15)
        const PERSONAL = 16384;
        const POSSESSIVE = 32768;
    }
}

impl MorphFlags {
    pub const CASES: Self = Self::NOMINATIVE
        .union(Self::ACCUSATIVE)
        .union(Self::DATIVE)
        .union(Self::GENITIVE);
    pub const GENDERS: Self = Self::MASCULINE.union(Self::FEMININE).union(Self::NEUTER);
    pub const NUMBERS: Self = Self::SINGULAR.union(Self::PLURAL);
    pub const PERSONS: Self = Self::FIRST_PERSON
        .union(Self::SECOND_PERSON)
        .union(Self::THIRD_PERSON);

    /// Builds a table key from individual flags in a const context.
    pub const fn key(parts: &[MorphFlags]) -> MorphFlags {
        let mut bits = 0;
        let mut i = 0;
        while i < parts.len() {
            bits |= parts[i].bits();
            i += 1;
        }
        MorphFlags::from_bits_retain(bits)
    }
}

/// A category whose values each own one [`MorphFlags`] bit.
pub trait Category: Ordered {
    fn flag(self) -> MorphFlags;
}

/// Recovers the single value of `T` present in `flags`.
///
/// Returns `None` when no value of `T` is present or when more than one is.
pub fn from_flags<T: Category>(flags: MorphFlags) -> Option<T> {
    let mut found = None;
    for value in T::ORDER {
        if flags.contains(value.flag()) {
            if found.is_some() {
                return None;
            }
            found = Some(*value);
        }
    }
    found
}

impl Category for Case {
    fn flag(self) -> MorphFlags {
        match self {
            Case::Nominative => MorphFlags::NOMINATIVE,
            Case::Accusative => MorphFlags::ACCUSATIVE,
            Case::Dative => MorphFlags::DATIVE,
            Case::Genitive => MorphFlags::GENITIVE,
        }
    }
}

impl Category for Gender {
    fn flag(self) -> MorphFlags {
        match self {
            Gender::Masculine => MorphFlags::MASCULINE,
            Gender::Feminine => MorphFlags::FEMININE,
            Gender::Neuter => MorphFlags::NEUTER,
        }
    }
}

impl Category for Cardinality {
    fn flag(self) -> MorphFlags {
        match self {
            Cardinality::Singular => MorphFlags::SINGULAR,
            Cardinality::Plural => MorphFlags::PLURAL,
        }
    }
}

impl Category for Person {
    fn flag(self) -> MorphFlags {
        match self {
            Person::First => MorphFlags::FIRST_PERSON,
            Person::Second => MorphFlags::SECOND_PERSON,
            Person::Third => MorphFlags::THIRD_PERSON,
        }
    }
}

impl Category for ArticleType {
    fn flag(self) -> MorphFlags {
        match self {
            ArticleType::Definite => MorphFlags::DEFINITE,
            ArticleType::Indefinite => MorphFlags::INDEFINITE,
        }
    }
}

impl Category for PronounType {
    fn flag(self) -> MorphFlags {
        match self {
            PronounType::Personal => MorphFlags::PERSONAL,
            PronounType::Possessive => MorphFlags::POSSESSIVE,
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Case::Nominative => "nominative",
            Case::Accusative => "accusative",
            Case::Dative => "dative",
            Case::Genitive => "genitive",
        })
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Gender::Masculine => "masculine",
            Gender::Feminine => "feminine",
            Gender::Neuter => "neuter",
        })
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Cardinality::Singular => "singular",
            Cardinality::Plural => "plural",
        })
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Person::First => "first-person",
            Person::Second => "second-person",
            Person::Third => "third-person",
        })
    }
}

impl fmt::Display for ArticleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ArticleType::Definite => "definite",
            ArticleType::Indefinite => "indefinite",
        })
    }
}

impl fmt::Display for PronounType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PronounType::Personal => "personal",
            PronounType::Possessive => "possessive",
        })
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Conjunction => "conjunction",
            PartOfSpeech::Preposition => "preposition",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Number => "number",
        })
    }
}

impl fmt::Display for BankCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BankCategory::Vocabulary => "Vocabulary",
            BankCategory::Phrase => "Phrase",
        })
    }
}
