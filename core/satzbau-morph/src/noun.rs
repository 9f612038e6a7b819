use rand::Rng;
use satzbau_protocol::{
    first, next, ArticleType, Cardinality, Case, Category, Gender, MorphFlags, NounEntry, Person, Step,
};

use crate::declension::Declined;
use crate::error::{MorphError, Result};
use crate::rotation::{random_value, Rotatable, Rotation};
use crate::tables::{lookup, ARTICLES};

/// A bank noun together with the categories it is currently rendered in.
///
/// A plural `ArticledNoun` always wraps an entry with a recorded plural.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticledNoun<'a> {
    entry: &'a NounEntry,
    article_type: ArticleType,
    person: Person,
    cardinality: Cardinality,
}

impl<'a> ArticledNoun<'a> {
    pub fn new(entry: &'a NounEntry, article_type: ArticleType, cardinality: Cardinality) -> Result<Self> {
        if cardinality == Cardinality::Plural && !entry.has_plural() {
            return Err(MorphError::MissingPlural {
                word: entry.singular.clone(),
            });
        }

        Ok(Self {
            entry,
            article_type,
            person: Person::Third,
            cardinality,
        })
    }

    /// Singular noun with a randomly chosen article type.
    pub fn random<R: Rng + ?Sized>(entry: &'a NounEntry, rng: &mut R) -> Self {
        Self {
            entry,
            article_type: random_value(rng),
            person: Person::Third,
            cardinality: Cardinality::Singular,
        }
    }

    pub fn entry(&self) -> &'a NounEntry {
        self.entry
    }

    pub fn article_type(&self) -> ArticleType {
        self.article_type
    }

    pub fn gender(&self) -> Gender {
        self.entry.gender
    }

    /// Surface form of the noun itself, without article.
    pub fn word(&self) -> Result<&'a str> {
        match self.cardinality {
            Cardinality::Singular => Ok(self.entry.singular.as_str()),
            Cardinality::Plural => self.entry.plural().ok_or_else(|| MorphError::MissingPlural {
                word: self.entry.singular.clone(),
            }),
        }
    }

    /// Category flags of this context, without case.
    pub fn flags(&self) -> MorphFlags {
        let flags = self.article_type.flag() | self.cardinality.flag() | self.person.flag();
        match self.cardinality {
            // Plural articles do not depend on gender.
            Cardinality::Plural => flags,
            Cardinality::Singular => flags | self.entry.gender.flag(),
        }
    }
}

/// Article for `noun` in `case`; `Ok(None)` when the form takes no article.
pub fn get_article(noun: &ArticledNoun<'_>, case: Case) -> Result<Option<&'static str>> {
    let key = (noun.flags() | case.flag()).difference(MorphFlags::PERSONS);
    lookup(ARTICLES, key).ok_or(MorphError::UnhandledArticle(key))
}

impl Declined for ArticledNoun<'_> {
    fn person(&self) -> Person {
        self.person
    }

    fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    fn decline(&self, case: Case) -> Result<String> {
        let article = get_article(self, case)?;
        let word = self.word()?;

        Ok(match article {
            Some(article) => format!("{} {}", article, word),
            None => word.to_string(),
        })
    }

    fn gloss(&self) -> Result<String> {
        let english = &self.entry.english;
        Ok(match (self.article_type, self.cardinality) {
            (ArticleType::Definite, Cardinality::Singular) => format!("the {}", english),
            (ArticleType::Indefinite, Cardinality::Singular) => format!("a {}", english),
            (ArticleType::Definite, Cardinality::Plural) => format!("the {} (plural)", english),
            (ArticleType::Indefinite, Cardinality::Plural) => format!("{} (plural)", english),
        })
    }

    fn hint(&self, _case: Case) -> Result<Option<String>> {
        Ok(Some(format!(
            "{}, {} {}",
            self.entry.english, self.article_type, self.cardinality
        )))
    }
}

impl<'a> Rotatable for ArticledNoun<'a> {
    type Error = MorphError;

    fn first(&self) -> Self {
        Self {
            entry: self.entry,
            article_type: first(),
            person: self.person,
            cardinality: first(),
        }
    }

    /// Article type varies fastest, then cardinality. Stepping into the
    /// plural of a noun without one fails with `MissingPlural`.
    fn rotate(&self) -> Result<Rotation<Self>> {
        let (article_type, cardinality) = match next(self.article_type) {
            Step::Next(article_type) => (article_type, self.cardinality),
            Step::Exhausted => match next(self.cardinality) {
                Step::Next(cardinality) => (first(), cardinality),
                Step::Exhausted => return Ok(Rotation::Exhausted),
            },
        };

        let rotated = ArticledNoun::new(self.entry, article_type, cardinality)?;
        Ok(Rotation::Rotated(Self {
            person: self.person,
            ..rotated
        }))
    }
}
