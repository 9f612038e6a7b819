use satzbau_protocol::{from_flags, Cardinality, Category, MorphFlags, Person, VerbEntry};

use crate::error::{MorphError, Result};

/// Stored form of `verb` for the single person and number in `flags`.
///
/// `flags` must name exactly one person and exactly one number; other
/// category bits are ignored.
pub fn conjugate_flags(verb: &VerbEntry, flags: MorphFlags) -> Result<&str> {
    let (person, cardinality) = match (from_flags::<Person>(flags), from_flags::<Cardinality>(flags)) {
        (Some(person), Some(cardinality)) => (person, cardinality),
        _ => return Err(MorphError::InvalidPersonCardinality(flags)),
    };

    verb.conjugation
        .form(person, cardinality)
        .ok_or_else(|| MorphError::MissingForm {
            verb: verb.infinitive.clone(),
            person,
            cardinality,
        })
}

pub fn conjugate(verb: &VerbEntry, person: Person, cardinality: Cardinality) -> Result<&str> {
    conjugate_flags(verb, person.flag() | cardinality.flag())
}

/// Subject label printed next to each form: ich, du, er/sie/es, wir, ihr, Sie.
pub fn subject_label(person: Person, cardinality: Cardinality) -> &'static str {
    match (person, cardinality) {
        (Person::First, Cardinality::Singular) => "ich",
        (Person::Second, Cardinality::Singular) => "du",
        (Person::Third, Cardinality::Singular) => "er/sie/es",
        (Person::First, Cardinality::Plural) => "wir",
        (Person::Second, Cardinality::Plural) => "ihr",
        (Person::Third, Cardinality::Plural) => "Sie",
    }
}
