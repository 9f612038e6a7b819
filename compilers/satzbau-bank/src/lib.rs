pub mod archive;
pub mod error;
pub mod parser;
pub mod record;
pub mod source;

use satzbau_protocol::{BankCategory, BankEntry, Case, EntryId, Lexicon, NounEntry, PhraseEntry, VerbEntry};

pub use error::{BankError, Result};
pub use parser::{conjugation_summary, parse_conjugation_summary};
pub use record::BankRecord;
pub use source::{parse_records, BankSource, InMemorySource, JsonFileSource};

/// Tag that keeps an entry out of every generated deck.
pub const IGNORE_TAG: &str = "anki ignore";

/// Tag that opts a verb into sentence generation.
pub const GENERATE_TAG: &str = "generate";

/// Row position as an entry id, if it fits the id width.
fn entry_id(index: usize) -> Option<EntryId> {
    u32::try_from(index).ok().map(EntryId::new)
}

/// The validated vocabulary bank.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bank {
    entries: Vec<BankEntry>,
}

impl Bank {
    /// Converts every row, skipping the ones that fail validation.
    ///
    /// A bad row never aborts the batch: it is logged and dropped. Rows
    /// tagged [`IGNORE_TAG`] are dropped as well.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = BankRecord>,
    {
        let mut entries = Vec::new();

        for (index, record) in records.into_iter().enumerate() {
            let Some(id) = entry_id(index) else {
                log::warn!("Bank has more than {} rows, ignoring the rest", u32::MAX);
                break;
            };
            match record.into_entry(id) {
                Ok(entry) if entry.has_tag(IGNORE_TAG) => {
                    log::debug!("{} is tagged '{}', skipping...", entry.german(), IGNORE_TAG);
                }
                Ok(entry) => entries.push(entry),
                Err(e) => log::warn!("{}, skipping...", e),
            }
        }

        log::info!("Loaded {} bank entries", entries.len());
        Self { entries }
    }

    pub fn from_entries(entries: Vec<BankEntry>) -> Self {
        Self { entries }
    }

    /// Reads and validates all rows of `source`.
    pub fn load<S: BankSource + ?Sized>(source: &S) -> Result<Self> {
        Ok(Self::from_records(source.records()?))
    }

    pub fn from_lexicon(lexicon: Lexicon) -> Self {
        Self::from_entries(lexicon.entries)
    }

    pub fn to_lexicon(&self) -> Lexicon {
        Lexicon {
            version: archive::LEXICON_VERSION,
            entries: self.entries.clone(),
        }
    }

    pub fn entries(&self) -> &[BankEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn nouns(&self) -> impl Iterator<Item = &NounEntry> + '_ {
        self.entries.iter().filter_map(|entry| match entry {
            BankEntry::Noun(noun) => Some(noun),
            _ => None,
        })
    }

    pub fn verbs(&self) -> impl Iterator<Item = &VerbEntry> + '_ {
        self.entries.iter().filter_map(|entry| match entry {
            BankEntry::Verb(verb) => Some(verb),
            _ => None,
        })
    }

    /// Verbs usable as sentence predicates: fully conjugated, tagged
    /// [`GENERATE_TAG`] and taking a nominative or accusative object.
    ///
    /// Dative and genitive objects have no article table, so such verbs are
    /// left out with a warning.
    pub fn sentence_verbs(&self) -> impl Iterator<Item = &VerbEntry> + '_ {
        self.verbs().filter(|verb| {
            if !verb.conjugation.is_complete() || !verb.tags.iter().any(|tag| tag == GENERATE_TAG) {
                return false;
            }
            match verb.requires_case {
                Case::Nominative | Case::Accusative => true,
                other => {
                    log::warn!(
                        "Verb {} takes a {:?} object, leaving it out of sentences",
                        verb.infinitive,
                        other
                    );
                    false
                }
            }
        })
    }

    /// Everything that is not a phrase: nouns, verbs and plain vocabulary.
    pub fn vocabulary(&self) -> impl Iterator<Item = &BankEntry> + '_ {
        self.entries
            .iter()
            .filter(|entry| entry.category() == BankCategory::Vocabulary)
    }

    pub fn phrases(&self) -> impl Iterator<Item = &PhraseEntry> + '_ {
        self.entries.iter().filter_map(|entry| match entry {
            BankEntry::Phrase(phrase) => Some(phrase),
            _ => None,
        })
    }

    pub fn find_noun(&self, german: &str) -> Option<&NounEntry> {
        self.nouns().find(|noun| noun.singular == german)
    }

    pub fn find_verb(&self, german: &str) -> Option<&VerbEntry> {
        self.verbs().find(|verb| verb.infinitive == german)
    }
}
