#![no_std] // Shared with the engine crates; keeps the vocabulary allocation-only

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod ids;
pub mod morphology;
pub mod order;

// Re-export core types for convenience
pub use ids::{DeckId, EntryId, ModelId};
pub use morphology::*;
pub use order::{all, first, next, ordinal, Ordered, Step};

pub mod model;
pub use model::*;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use rkyv::{from_bytes, to_bytes};

    #[test]
    fn test_first_is_declaration_order() {
        assert_eq!(first::<ArticleType>(), ArticleType::Definite);
        assert_eq!(first::<Cardinality>(), Cardinality::Singular);
        assert_eq!(first::<Person>(), Person::First);
        assert_eq!(first::<Gender>(), Gender::Masculine);
        assert_eq!(first::<Case>(), Case::Nominative);
    }

    #[test]
    fn test_next_walks_then_exhausts() {
        assert_eq!(next(Person::First), Step::Next(Person::Second));
        assert_eq!(next(Person::Second), Step::Next(Person::Third));
        assert_eq!(next(Person::Third), Step::Exhausted);

        assert_eq!(next(ArticleType::Definite), Step::Next(ArticleType::Indefinite));
        assert!(next(ArticleType::Indefinite).is_exhausted());
        assert!(next(Cardinality::Plural).is_exhausted());
    }

    #[test]
    fn test_walk_visits_every_value_once() {
        let mut seen = vec![first::<Case>()];
        let mut current = first::<Case>();
        while let Step::Next(value) = next(current) {
            seen.push(value);
            current = value;
        }
        assert_eq!(seen, all::<Case>().to_vec());
        assert_eq!(ordinal(Case::Genitive), 3);
    }

    #[test]
    fn test_from_flags_requires_exactly_one_value() {
        let flags = MorphFlags::THIRD_PERSON | MorphFlags::PLURAL;
        assert_eq!(from_flags::<Person>(flags), Some(Person::Third));
        assert_eq!(from_flags::<Cardinality>(flags), Some(Cardinality::Plural));
        assert_eq!(from_flags::<Gender>(flags), None);

        let ambiguous = MorphFlags::FIRST_PERSON | MorphFlags::SECOND_PERSON;
        assert_eq!(from_flags::<Person>(ambiguous), None);
    }

    #[test]
    fn test_key_matches_union() {
        let key = MorphFlags::key(&[MorphFlags::DEFINITE, MorphFlags::SINGULAR, MorphFlags::FEMININE]);
        assert_eq!(key, MorphFlags::DEFINITE | MorphFlags::SINGULAR | MorphFlags::FEMININE);
        assert!(MorphFlags::PERSONS.contains(MorphFlags::SECOND_PERSON));
    }

    #[test]
    fn test_conjugation_treats_empty_as_missing() {
        let conjugation = Conjugation {
            first_singular: Some("habe".to_string()),
            second_singular: Some("".to_string()),
            ..Conjugation::default()
        };
        assert_eq!(conjugation.form(Person::First, Cardinality::Singular), Some("habe"));
        assert_eq!(conjugation.form(Person::Second, Cardinality::Singular), None);
        assert!(!conjugation.is_complete());
        assert!(!conjugation.is_empty());
        assert!(Conjugation::default().is_empty());
    }

    #[test]
    fn test_enum_serialization() {
        let original = Case::Accusative;

        let bytes = to_bytes::<_, 256>(&original).expect("Failed to serialize Case");
        let deserialized: Case = from_bytes(&bytes).expect("Failed to deserialize Case");

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_lexicon_serialization() {
        let original = Lexicon {
            version: 1,
            entries: vec![BankEntry::Noun(NounEntry {
                id: EntryId::new(7),
                singular: "Frau".to_string(),
                plural: Some("Frauen".to_string()),
                english: "woman".to_string(),
                synonyms: None,
                gender: Gender::Feminine,
                tags: vec!["people".to_string()],
            })],
        };

        let bytes = to_bytes::<_, 1024>(&original).expect("Failed to serialize Lexicon");
        let deserialized: Lexicon = from_bytes(&bytes).expect("Failed to deserialize Lexicon");

        assert_eq!(original, deserialized);
        assert_eq!(deserialized.entries[0].german(), "Frau");
        assert_eq!(deserialized.entries[0].category(), BankCategory::Vocabulary);
    }

    #[test]
    fn test_id_layout() {
        assert_eq!(core::mem::size_of::<EntryId>(), 4);
    }
}
