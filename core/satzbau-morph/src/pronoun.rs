use rand::Rng;
use satzbau_protocol::{
    first, next, Cardinality, Case, Category, Gender, MorphFlags, Person, PronounType, Step,
};

use crate::declension::Declined;
use crate::error::{MorphError, Result};
use crate::rotation::{random_value, Rotatable, Rotation};
use crate::tables::{lookup, PRONOUNS, PRONOUN_GLOSSES};

/// Article-free stand-in for a noun.
///
/// Gender is present exactly for the third-person singular, where it picks
/// between er, sie and es. [`Pronoun::new`] enforces this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pronoun {
    kind: PronounType,
    person: Person,
    cardinality: Cardinality,
    gender: Option<Gender>,
}

fn takes_gender(person: Person, cardinality: Cardinality) -> bool {
    person == Person::Third && cardinality == Cardinality::Singular
}

impl Pronoun {
    pub fn new(
        kind: PronounType,
        person: Person,
        cardinality: Cardinality,
        gender: Option<Gender>,
    ) -> Result<Self> {
        match (takes_gender(person, cardinality), gender) {
            (true, None) => return Err(MorphError::MissingPronounGender),
            (false, Some(gender)) => {
                return Err(MorphError::UnexpectedPronounGender {
                    person,
                    cardinality,
                    gender,
                })
            }
            _ => {}
        }

        Ok(Self {
            kind,
            person,
            cardinality,
            gender,
        })
    }

    /// Personal pronoun with random person and number (and gender where needed).
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let person = random_value(rng);
        let cardinality = random_value(rng);
        let gender = if takes_gender(person, cardinality) {
            Some(random_value(rng))
        } else {
            None
        };

        Self {
            kind: PronounType::Personal,
            person,
            cardinality,
            gender,
        }
    }

    pub fn kind(&self) -> PronounType {
        self.kind
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn flags(&self) -> MorphFlags {
        let flags = self.kind.flag() | self.person.flag() | self.cardinality.flag();
        match self.gender {
            Some(gender) => flags | gender.flag(),
            None => flags,
        }
    }
}

/// Nominative form of `pronoun`.
pub fn get_pronoun(pronoun: &Pronoun) -> Result<&'static str> {
    let key = pronoun.flags();
    lookup(PRONOUNS, key).ok_or(MorphError::UnhandledPronoun(key))
}

/// English gloss of `pronoun`. Only personal pronouns have one.
pub fn english_pronoun(pronoun: &Pronoun) -> Result<&'static str> {
    let key = pronoun.flags();
    lookup(PRONOUN_GLOSSES, key).ok_or(MorphError::UnhandledGloss(key))
}

impl Declined for Pronoun {
    fn person(&self) -> Person {
        self.person
    }

    fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    /// Pronouns are only rendered as subjects, so the case is ignored.
    fn decline(&self, _case: Case) -> Result<String> {
        get_pronoun(self).map(str::to_string)
    }

    fn gloss(&self) -> Result<String> {
        english_pronoun(self).map(str::to_string)
    }

    fn hint(&self, _case: Case) -> Result<Option<String>> {
        Ok(self.gender.map(|gender| gender.to_string()))
    }
}

impl Rotatable for Pronoun {
    type Error = MorphError;

    fn first(&self) -> Self {
        let person = first();
        let cardinality = first();
        Self {
            kind: self.kind,
            person,
            cardinality,
            gender: takes_gender(person, cardinality).then(first::<Gender>),
        }
    }

    /// Gender varies fastest (third-person singular only), then person, then
    /// cardinality. The pronoun type is kept.
    fn rotate(&self) -> Result<Rotation<Self>> {
        // 1. Third-person singular walks through er, sie, es
        if let Some(Step::Next(gender)) = self.gender.map(next) {
            return Ok(Rotation::Rotated(Self {
                gender: Some(gender),
                ..*self
            }));
        }

        // 2. Person, then cardinality
        let (person, cardinality) = match next(self.person) {
            Step::Next(person) => (person, self.cardinality),
            Step::Exhausted => match next(self.cardinality) {
                Step::Next(cardinality) => (first(), cardinality),
                Step::Exhausted => return Ok(Rotation::Exhausted),
            },
        };

        let gender = takes_gender(person, cardinality).then(first::<Gender>);
        Pronoun::new(self.kind, person, cardinality, gender).map(Rotation::Rotated)
    }
}
