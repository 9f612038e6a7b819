//! Flag-keyed rule tables.
//!
//! Every row is keyed by the exact union of the category flags it covers.
//! A lookup that finds no row is a gap in the table, never a fallback.

use satzbau_protocol::MorphFlags;
use satzbau_protocol::MorphFlags as F;

/// Article by article type, number, case and (singular only) gender.
/// `None` means the form is rendered without an article.
pub(crate) const ARTICLES: &[(MorphFlags, Option<&str>)] = &[
    // Definite singular
    (F::key(&[F::DEFINITE, F::SINGULAR, F::MASCULINE, F::NOMINATIVE]), Some("der")),
    (F::key(&[F::DEFINITE, F::SINGULAR, F::MASCULINE, F::ACCUSATIVE]), Some("den")),
    (F::key(&[F::DEFINITE, F::SINGULAR, F::FEMININE, F::NOMINATIVE]), Some("die")),
    (F::key(&[F::DEFINITE, F::SINGULAR, F::FEMININE, F::ACCUSATIVE]), Some("die")),
    (F::key(&[F::DEFINITE, F::SINGULAR, F::NEUTER, F::NOMINATIVE]), Some("das")),
    (F::key(&[F::DEFINITE, F::SINGULAR, F::NEUTER, F::ACCUSATIVE]), Some("das")),
    // Indefinite singular
    (F::key(&[F::INDEFINITE, F::SINGULAR, F::MASCULINE, F::NOMINATIVE]), Some("ein")),
    (F::key(&[F::INDEFINITE, F::SINGULAR, F::MASCULINE, F::ACCUSATIVE]), Some("einen")),
    (F::key(&[F::INDEFINITE, F::SINGULAR, F::FEMININE, F::NOMINATIVE]), Some("eine")),
    (F::key(&[F::INDEFINITE, F::SINGULAR, F::FEMININE, F::ACCUSATIVE]), Some("eine")),
    (F::key(&[F::INDEFINITE, F::SINGULAR, F::NEUTER, F::NOMINATIVE]), Some("ein")),
    (F::key(&[F::INDEFINITE, F::SINGULAR, F::NEUTER, F::ACCUSATIVE]), Some("ein")),
    // Plural: gender-independent, no indefinite article
    (F::key(&[F::DEFINITE, F::PLURAL, F::NOMINATIVE]), Some("die")),
    (F::key(&[F::DEFINITE, F::PLURAL, F::ACCUSATIVE]), Some("die")),
    (F::key(&[F::INDEFINITE, F::PLURAL, F::NOMINATIVE]), None),
    (F::key(&[F::INDEFINITE, F::PLURAL, F::ACCUSATIVE]), None),
];

/// Nominative pronouns by type, person, number and (third singular only) gender.
///
/// The possessive rows are partial on purpose: only first and second person
/// singular are known, and everything else must surface as an unhandled
/// combination.
pub(crate) const PRONOUNS: &[(MorphFlags, &str)] = &[
    (F::key(&[F::PERSONAL, F::FIRST_PERSON, F::SINGULAR]), "ich"),
    (F::key(&[F::PERSONAL, F::SECOND_PERSON, F::SINGULAR]), "du"),
    (F::key(&[F::PERSONAL, F::THIRD_PERSON, F::SINGULAR, F::MASCULINE]), "er"),
    (F::key(&[F::PERSONAL, F::THIRD_PERSON, F::SINGULAR, F::FEMININE]), "sie"),
    (F::key(&[F::PERSONAL, F::THIRD_PERSON, F::SINGULAR, F::NEUTER]), "es"),
    (F::key(&[F::PERSONAL, F::FIRST_PERSON, F::PLURAL]), "wir"),
    (F::key(&[F::PERSONAL, F::SECOND_PERSON, F::PLURAL]), "ihr"),
    (F::key(&[F::PERSONAL, F::THIRD_PERSON, F::PLURAL]), "Sie"),
    (F::key(&[F::POSSESSIVE, F::FIRST_PERSON, F::SINGULAR, F::MASCULINE]), "mein"),
    (F::key(&[F::POSSESSIVE, F::FIRST_PERSON, F::SINGULAR, F::FEMININE]), "meine"),
    (F::key(&[F::POSSESSIVE, F::FIRST_PERSON, F::SINGULAR, F::NEUTER]), "mein"),
    (F::key(&[F::POSSESSIVE, F::SECOND_PERSON, F::SINGULAR, F::MASCULINE]), "dein"),
    (F::key(&[F::POSSESSIVE, F::SECOND_PERSON, F::SINGULAR, F::FEMININE]), "deine"),
    (F::key(&[F::POSSESSIVE, F::SECOND_PERSON, F::SINGULAR, F::NEUTER]), "dein"),
];

/// English glosses for the personal pronouns.
pub(crate) const PRONOUN_GLOSSES: &[(MorphFlags, &str)] = &[
    (F::key(&[F::PERSONAL, F::FIRST_PERSON, F::SINGULAR]), "I"),
    (F::key(&[F::PERSONAL, F::SECOND_PERSON, F::SINGULAR]), "you"),
    (F::key(&[F::PERSONAL, F::THIRD_PERSON, F::SINGULAR, F::MASCULINE]), "he"),
    (F::key(&[F::PERSONAL, F::THIRD_PERSON, F::SINGULAR, F::FEMININE]), "she"),
    (F::key(&[F::PERSONAL, F::THIRD_PERSON, F::SINGULAR, F::NEUTER]), "it"),
    (F::key(&[F::PERSONAL, F::FIRST_PERSON, F::PLURAL]), "we"),
    (F::key(&[F::PERSONAL, F::SECOND_PERSON, F::PLURAL]), "you"),
    (F::key(&[F::PERSONAL, F::THIRD_PERSON, F::PLURAL]), "they"),
];

/// Exact-match lookup of `key` in a flag-keyed table.
pub(crate) fn lookup<V: Copy>(table: &[(MorphFlags, V)], key: MorphFlags) -> Option<V> {
    table
        .iter()
        .find(|(row_key, _)| *row_key == key)
        .map(|(_, value)| *value)
}
