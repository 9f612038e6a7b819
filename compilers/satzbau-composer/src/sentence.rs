use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use satzbau_morph::{
    conjugate, random_value, ArticledNoun, Declined, MorphError, Pronoun, Rotatable, Rotation,
    Variants,
};
use satzbau_protocol::{Case, NounEntry, Ordered, VerbEntry};

use crate::error::{ComposeError, Result};
use crate::subject::Subject;

/// Replaces the blanked slot in a question sentence.
pub const BLANK: &str = "____";

/// Format tag carried by every rendered sentence.
pub const SENTENCE_FORMAT: &str = "BasicSentence";

/// One of the three positions of a subject-verb-object sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Subject,
    Verb,
    Object,
}

impl Ordered for Slot {
    const ORDER: &'static [Self] = &[Slot::Subject, Slot::Verb, Slot::Object];
}

impl Slot {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        random_value(rng)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Slot::Subject => "subject",
            Slot::Verb => "verb",
            Slot::Object => "object",
        };
        f.write_str(name)
    }
}

/// Output of one render: the full sentence, its cloze form and the
/// supporting text shown with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSentence {
    pub answer: String,
    pub question: String,
    pub english: String,
    pub hint: Option<String>,
    pub blank: Slot,
}

impl RenderedSentence {
    pub fn format(&self) -> &'static str {
        SENTENCE_FORMAT
    }

    /// Hint text, empty when the blanked item has none.
    pub fn hint_text(&self) -> &str {
        self.hint.as_deref().unwrap_or("")
    }
}

/// Upper-cases the first character, leaving the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(head) => head.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Subject, verb and object snapshot.
///
/// The verb is fixed for the lifetime of the sentence; rotation only walks
/// the subject and object categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    subject: Subject<'a>,
    verb: &'a VerbEntry,
    object: ArticledNoun<'a>,
}

impl<'a> Sentence<'a> {
    pub fn from_parts(subject: impl Into<Subject<'a>>, verb: &'a VerbEntry, object: ArticledNoun<'a>) -> Self {
        Self {
            subject: subject.into(),
            verb,
            object,
        }
    }

    /// Random sentence drawn from the two pools.
    ///
    /// The subject is a pronoun or a noun on a coin flip. Nouns start in the
    /// singular with a random article type, so construction cannot hit a
    /// missing plural.
    pub fn make_random<R: Rng + ?Sized>(
        nouns: &[&'a NounEntry],
        verbs: &[&'a VerbEntry],
        rng: &mut R,
    ) -> Result<Self> {
        let subject = if rng.gen_bool(0.5) {
            Subject::Pronoun(Pronoun::random(rng))
        } else {
            let entry = pick(nouns, rng, "noun")?;
            Subject::Noun(ArticledNoun::random(entry, rng))
        };
        let verb = pick(verbs, rng, "verb")?;
        let entry = pick(nouns, rng, "noun")?;
        let object = ArticledNoun::random(entry, rng);

        Ok(Self {
            subject,
            verb,
            object,
        })
    }

    pub fn subject(&self) -> &Subject<'a> {
        &self.subject
    }

    pub fn verb(&self) -> &'a VerbEntry {
        self.verb
    }

    pub fn object(&self) -> &ArticledNoun<'a> {
        &self.object
    }

    /// Renders with a uniformly chosen blank.
    pub fn render<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<RenderedSentence> {
        self.render_with_blank(Slot::random(rng))
    }

    pub fn render_with_blank(&self, blank: Slot) -> Result<RenderedSentence> {
        let object_case = self.verb.requires_case;

        // 1. Surface forms of the three slots
        let subject = self.subject.decline(Case::Nominative)?;
        let verb = conjugate(self.verb, self.subject.person(), self.subject.cardinality())?;
        let object = self.object.decline(object_case)?;

        // 2. Blank one of them
        let (question, hint) = match blank {
            Slot::Subject => (
                format!("{} {} {}", BLANK, verb, object),
                self.subject.hint(Case::Nominative)?,
            ),
            Slot::Verb => (
                format!("{} {} {}", subject, BLANK, object),
                Some(self.verb.infinitive.clone()),
            ),
            Slot::Object => (
                format!("{} {} {}", subject, verb, BLANK),
                self.object.hint(object_case)?,
            ),
        };

        let english = format!(
            "{} + {} + {}",
            self.subject.gloss()?,
            self.verb.english,
            self.object.gloss()?
        );

        Ok(RenderedSentence {
            answer: capitalize_first(&format!("{} {} {}", subject, verb, object)),
            question: capitalize_first(&question),
            english,
            hint,
            blank,
        })
    }

    /// Every variant reachable from this state, this one included.
    pub fn variants(&self) -> Variants<Self> {
        satzbau_morph::variants(*self)
    }
}

fn pick<'a, T, R: Rng + ?Sized>(pool: &[&'a T], rng: &mut R, name: &'static str) -> Result<&'a T> {
    pool.choose(rng).copied().ok_or(ComposeError::EmptyPool(name))
}

impl<'a> Rotatable for Sentence<'a> {
    type Error = ComposeError;

    fn first(&self) -> Self {
        Self {
            subject: self.subject.first(),
            verb: self.verb,
            object: self.object.first(),
        }
    }

    /// The subject varies fastest. When it runs out, it is reset and the
    /// object takes one step.
    ///
    /// A subject noun without a plural runs out at its last singular state.
    /// An object stepping into a missing plural is reported as an error.
    fn rotate(&self) -> Result<Rotation<Self>> {
        // 1. Subject
        match self.subject.rotate() {
            Ok(Rotation::Rotated(subject)) => {
                return Ok(Rotation::Rotated(Self { subject, ..*self }));
            }
            Ok(Rotation::Exhausted) => {}
            Err(MorphError::MissingPlural { word }) => {
                log::debug!("Subject '{}' has no plural, moving on to the object", word);
            }
            Err(err) => return Err(err.into()),
        }

        // 2. Object
        match self.object.rotate()? {
            Rotation::Rotated(object) => Ok(Rotation::Rotated(Self {
                subject: self.subject.first(),
                verb: self.verb,
                object,
            })),
            Rotation::Exhausted => Ok(Rotation::Exhausted),
        }
    }
}
