use serde::de::value::StrDeserializer;
use serde::de::{DeserializeOwned, IntoDeserializer};
use serde::{Deserialize, Deserializer, Serialize};

use satzbau_protocol::{
    BankCategory, BankEntry, Case, Conjugation, EntryId, Gender, NounEntry, PartOfSpeech, PhraseEntry,
    VerbEntry, VocabularyEntry,
};

use crate::error::{BankError, Result};
use crate::parser::parse_conjugation_summary;

/// One row of the vocabulary bank, as exported from the document store.
///
/// Every field is optional and kept as raw text; [`BankRecord::into_entry`]
/// decides what a usable row needs and parses the enumerated columns. Blank
/// strings are read as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankRecord {
    #[serde(deserialize_with = "blank_as_none")]
    pub category: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub german: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub german_plural: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub english: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub english_synonyms: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub part_of_speech: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub gender: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub conj_ich_1ps: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub conj_du_2ps: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub conj_er_3ps: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub conj_wir_1pp: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub conj_ihr_2pp: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub conj_sie_3pp: Option<String>,
    /// Older rows keep the whole table in one `ich ..., du ...` string.
    #[serde(deserialize_with = "blank_as_none")]
    pub conjugation: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub requires_case: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
}

fn blank_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty()))
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parses an enumerated column such as `gender` or `part_of_speech`.
fn parse_column<T: DeserializeOwned>(word: &str, field: &'static str, raw: Option<&str>) -> Result<Option<T>> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let deserializer: StrDeserializer<'_, serde::de::value::Error> = raw.into_deserializer();
    T::deserialize(deserializer)
        .map(Some)
        .map_err(|_| BankError::InvalidValue {
            word: word.to_string(),
            field,
            value: raw.to_string(),
        })
}

impl BankRecord {
    fn name(&self) -> String {
        self.german.clone().unwrap_or_else(|| "<unnamed>".to_string())
    }

    /// Validates the row and turns it into a lexical entry.
    pub fn into_entry(self, id: EntryId) -> Result<BankEntry> {
        // 1. Every row needs a category and its German text
        let name = self.name();
        let category: BankCategory = parse_column(&name, "category", self.category.as_deref())?
            .ok_or_else(|| BankError::MissingCategory(name.clone()))?;
        let german = self.german.clone().ok_or(BankError::MissingGerman)?;
        let english = self.english.clone().unwrap_or_default();

        if category == BankCategory::Phrase {
            return Ok(BankEntry::Phrase(PhraseEntry {
                id,
                german,
                english,
                tags: self.tags,
            }));
        }

        // 2. Vocabulary rows are dispatched on part of speech
        let part_of_speech: PartOfSpeech = parse_column(&german, "part_of_speech", self.part_of_speech.as_deref())?
            .ok_or_else(|| BankError::MissingPartOfSpeech(german.clone()))?;

        match part_of_speech {
            PartOfSpeech::Noun => {
                let gender: Gender = parse_column(&german, "gender", self.gender.as_deref())?
                    .ok_or_else(|| BankError::MissingGender(german.clone()))?;
                Ok(BankEntry::Noun(NounEntry {
                    id,
                    singular: german,
                    plural: self.german_plural,
                    english,
                    synonyms: self.english_synonyms,
                    gender,
                    tags: self.tags,
                }))
            }
            PartOfSpeech::Verb => {
                let conjugation = self.conjugation_table()?;
                if !conjugation.is_complete() {
                    log::warn!("Verb {} is not fully conjugated", german);
                }

                let requires_case = parse_column::<Case>(&german, "requires_case", self.requires_case.as_deref())?
                    .unwrap_or_else(|| {
                        log::warn!("Verb {} is missing requires_case, assuming accusative", german);
                        Case::Accusative
                    });

                Ok(BankEntry::Verb(VerbEntry {
                    id,
                    infinitive: german,
                    english,
                    synonyms: self.english_synonyms,
                    conjugation,
                    requires_case,
                    tags: self.tags,
                }))
            }
            _ => Ok(BankEntry::Vocabulary(VocabularyEntry {
                id,
                german,
                english,
                synonyms: self.english_synonyms,
                part_of_speech,
                tags: self.tags,
            })),
        }
    }

    /// The six dedicated columns win; the summary string is the fallback.
    fn conjugation_table(&self) -> Result<Conjugation> {
        let columns = Conjugation {
            first_singular: self.conj_ich_1ps.clone(),
            second_singular: self.conj_du_2ps.clone(),
            third_singular: self.conj_er_3ps.clone(),
            first_plural: self.conj_wir_1pp.clone(),
            second_plural: self.conj_ihr_2pp.clone(),
            third_plural: self.conj_sie_3pp.clone(),
        };

        match &self.conjugation {
            Some(summary) if columns.is_empty() => parse_conjugation_summary(summary),
            _ => Ok(columns),
        }
    }
}
