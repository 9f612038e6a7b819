use satzbau_morph::{ArticledNoun, Declined, Pronoun, Result, Rotatable, Rotation};
use satzbau_protocol::{Cardinality, Case, Person};

/// Whatever fills the subject slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject<'a> {
    Noun(ArticledNoun<'a>),
    Pronoun(Pronoun),
}

impl Declined for Subject<'_> {
    fn person(&self) -> Person {
        match self {
            Subject::Noun(noun) => noun.person(),
            Subject::Pronoun(pronoun) => pronoun.person(),
        }
    }

    fn cardinality(&self) -> Cardinality {
        match self {
            Subject::Noun(noun) => noun.cardinality(),
            Subject::Pronoun(pronoun) => pronoun.cardinality(),
        }
    }

    fn decline(&self, case: Case) -> Result<String> {
        match self {
            Subject::Noun(noun) => noun.decline(case),
            Subject::Pronoun(pronoun) => pronoun.decline(case),
        }
    }

    fn gloss(&self) -> Result<String> {
        match self {
            Subject::Noun(noun) => noun.gloss(),
            Subject::Pronoun(pronoun) => pronoun.gloss(),
        }
    }

    fn hint(&self, case: Case) -> Result<Option<String>> {
        match self {
            Subject::Noun(noun) => noun.hint(case),
            Subject::Pronoun(pronoun) => pronoun.hint(case),
        }
    }
}

impl<'a> Rotatable for Subject<'a> {
    type Error = satzbau_morph::MorphError;

    fn first(&self) -> Self {
        match self {
            Subject::Noun(noun) => Subject::Noun(noun.first()),
            Subject::Pronoun(pronoun) => Subject::Pronoun(pronoun.first()),
        }
    }

    fn rotate(&self) -> Result<Rotation<Self>> {
        match self {
            Subject::Noun(noun) => noun.rotate().map(|r| r.map(Subject::Noun)),
            Subject::Pronoun(pronoun) => pronoun.rotate().map(|r| r.map(Subject::Pronoun)),
        }
    }
}

impl<'a> From<ArticledNoun<'a>> for Subject<'a> {
    fn from(noun: ArticledNoun<'a>) -> Self {
        Subject::Noun(noun)
    }
}

impl From<Pronoun> for Subject<'_> {
    fn from(pronoun: Pronoun) -> Self {
        Subject::Pronoun(pronoun)
    }
}
