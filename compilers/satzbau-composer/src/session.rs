use rand::Rng;
use satzbau_morph::{Rotatable, Rotation};
use satzbau_protocol::{NounEntry, VerbEntry};

use crate::error::Result;
use crate::sentence::{RenderedSentence, Sentence, Slot};

/// Attempts at finding a renderable random sentence before giving up.
const MAX_REROLLS: usize = 32;

/// What [`Session::advance`] did to reach the next sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the next variant of the same triple.
    Rotated,
    /// All variants were seen; back at the first one.
    Restarted,
    /// Rotation hit a recoverable error; a new random triple was drawn.
    Rerolled,
}

/// Driver-facing state of the sentence practice loop.
///
/// Owns the word pools, the random source, the current sentence and the
/// slot blanked in its question. Accepted renders are collected for the
/// grammar deck.
pub struct Session<'a, R> {
    nouns: Vec<&'a NounEntry>,
    verbs: Vec<&'a VerbEntry>,
    rng: R,
    sentence: Sentence<'a>,
    blank: Slot,
    accepted: Vec<RenderedSentence>,
}

impl<'a, R: Rng> Session<'a, R> {
    pub fn new(nouns: Vec<&'a NounEntry>, verbs: Vec<&'a VerbEntry>, mut rng: R) -> Result<Self> {
        let sentence = Sentence::make_random(&nouns, &verbs, &mut rng)?;
        let blank = Slot::random(&mut rng);

        Ok(Self {
            nouns,
            verbs,
            rng,
            sentence,
            blank,
            accepted: Vec::new(),
        })
    }

    pub fn sentence(&self) -> &Sentence<'a> {
        &self.sentence
    }

    pub fn blank(&self) -> Slot {
        self.blank
    }

    pub fn set_blank(&mut self, slot: Slot) {
        self.blank = slot;
    }

    pub fn accepted(&self) -> &[RenderedSentence] {
        &self.accepted
    }

    pub fn into_accepted(self) -> Vec<RenderedSentence> {
        self.accepted
    }

    /// Renders the current sentence with the current blank.
    ///
    /// A recoverable failure (such as a verb missing the needed form) draws
    /// a new sentence and tries again.
    pub fn render(&mut self) -> Result<RenderedSentence> {
        let mut attempts = 0;
        loop {
            match self.sentence.render_with_blank(self.blank) {
                Ok(rendered) => return Ok(rendered),
                Err(err) if err.is_recoverable() && attempts < MAX_REROLLS => {
                    log::warn!("{}, picking a new sentence", err);
                    attempts += 1;
                    self.reroll()?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Keeps the current render and moves on.
    pub fn accept(&mut self) -> Result<Advance> {
        let rendered = self.render()?;
        log::debug!("Accepted '{}'", rendered.answer);
        self.accepted.push(rendered);
        self.advance()
    }

    /// Moves to the next variant, restarting or rerolling when rotation
    /// cannot continue.
    pub fn advance(&mut self) -> Result<Advance> {
        let outcome = match self.sentence.rotate() {
            Ok(Rotation::Rotated(sentence)) => {
                self.sentence = sentence;
                Advance::Rotated
            }
            Ok(Rotation::Exhausted) => {
                log::info!("Every variant seen, starting over");
                self.sentence = self.sentence.first();
                Advance::Restarted
            }
            Err(err) if err.is_recoverable() => {
                log::info!("{}, picking a new sentence", err);
                self.sentence = Sentence::make_random(&self.nouns, &self.verbs, &mut self.rng)?;
                Advance::Rerolled
            }
            Err(err) => return Err(err),
        };

        self.blank = Slot::random(&mut self.rng);
        Ok(outcome)
    }

    /// Draws a fresh random sentence and blank.
    pub fn reroll(&mut self) -> Result<()> {
        self.sentence = Sentence::make_random(&self.nouns, &self.verbs, &mut self.rng)?;
        self.blank = Slot::random(&mut self.rng);
        Ok(())
    }
}
