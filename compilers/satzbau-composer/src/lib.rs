//! Sentence composition over the morphology engine.
//!
//! A [`Sentence`] is an immutable subject/verb/object snapshot that renders
//! into an answer, a cloze question and an English gloss, and rotates through
//! the category space of its subject and object. [`Session`] drives it for an
//! interactive loop.

pub mod error;
pub mod sentence;
pub mod session;
pub mod subject;

pub use error::{ComposeError, Result};
pub use sentence::{capitalize_first, RenderedSentence, Sentence, Slot, BLANK, SENTENCE_FORMAT};
pub use session::{Advance, Session};
pub use subject::Subject;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use satzbau_morph::{ArticledNoun, MorphError, Pronoun, Rotatable, Rotation};
    use satzbau_protocol::{
        ArticleType, Cardinality, Case, Conjugation, EntryId, Gender, NounEntry, Person, PronounType,
        VerbEntry,
    };

    fn noun(singular: &str, plural: Option<&str>, english: &str, gender: Gender) -> NounEntry {
        NounEntry {
            id: EntryId::new(1),
            singular: singular.to_string(),
            plural: plural.map(str::to_string),
            english: english.to_string(),
            synonyms: None,
            gender,
            tags: vec![],
        }
    }

    fn verb(infinitive: &str, english: &str, forms: [&str; 6], requires_case: Case) -> VerbEntry {
        let [a, b, c, d, e, f] = forms.map(|form| Some(form.to_string()));
        VerbEntry {
            id: EntryId::new(2),
            infinitive: infinitive.to_string(),
            english: english.to_string(),
            synonyms: None,
            conjugation: Conjugation {
                first_singular: a,
                second_singular: b,
                third_singular: c,
                first_plural: d,
                second_plural: e,
                third_plural: f,
            },
            requires_case,
            tags: vec!["generate".to_string()],
        }
    }

    fn haben() -> VerbEntry {
        verb("haben", "to have", ["habe", "hast", "hat", "haben", "habt", "haben"], Case::Accusative)
    }

    fn sein() -> VerbEntry {
        verb("sein", "to be", ["bin", "bist", "ist", "sind", "seid", "sind"], Case::Nominative)
    }

    fn frau() -> NounEntry {
        noun("Frau", Some("Frauen"), "woman", Gender::Feminine)
    }

    fn milch() -> NounEntry {
        noun("Milch", None, "milk", Gender::Feminine)
    }

    fn sie() -> Pronoun {
        Pronoun::new(PronounType::Personal, Person::Third, Cardinality::Singular, Some(Gender::Feminine)).unwrap()
    }

    #[test]
    fn test_pronoun_subject_with_blank_object() {
        let frau = frau();
        let haben = haben();
        let object = ArticledNoun::new(&frau, ArticleType::Definite, Cardinality::Singular).unwrap();
        let sentence = Sentence::from_parts(sie(), &haben, object);

        let rendered = sentence.render_with_blank(Slot::Object).unwrap();
        assert_eq!(rendered.answer, "Sie hat die Frau");
        assert_eq!(rendered.question, "Sie hat ____");
        assert!(rendered.hint_text().contains("woman"));
        assert_eq!(rendered.english, "she + to have + the woman");
        assert_eq!(rendered.format(), "BasicSentence");
    }

    #[test]
    fn test_blank_subject_and_verb() {
        let frau = frau();
        let mann = noun("Mann", Some("Männer"), "man", Gender::Masculine);
        let haben = haben();
        let subject = ArticledNoun::new(&frau, ArticleType::Indefinite, Cardinality::Plural).unwrap();
        let object = ArticledNoun::new(&mann, ArticleType::Indefinite, Cardinality::Singular).unwrap();
        let sentence = Sentence::from_parts(subject, &haben, object);

        let rendered = sentence.render_with_blank(Slot::Subject).unwrap();
        assert_eq!(rendered.answer, "Frauen haben einen Mann");
        assert_eq!(rendered.question, "____ haben einen Mann");
        assert_eq!(rendered.hint.as_deref(), Some("woman, indefinite plural"));
        assert_eq!(rendered.english, "woman (plural) + to have + a man");

        let rendered = sentence.render_with_blank(Slot::Verb).unwrap();
        assert_eq!(rendered.question, "Frauen ____ einen Mann");
        assert_eq!(rendered.hint.as_deref(), Some("haben"));
    }

    #[test]
    fn test_object_case_follows_verb() {
        let mann = noun("Mann", Some("Männer"), "man", Gender::Masculine);
        let sein = sein();
        let er = Pronoun::new(PronounType::Personal, Person::Third, Cardinality::Singular, Some(Gender::Masculine)).unwrap();
        let object = ArticledNoun::new(&mann, ArticleType::Indefinite, Cardinality::Singular).unwrap();

        let rendered = Sentence::from_parts(er, &sein, object).render_with_blank(Slot::Verb).unwrap();
        assert_eq!(rendered.answer, "Er ist ein Mann");
    }

    #[test]
    fn test_missing_verb_form_is_recoverable() {
        let frau = frau();
        let mut haben = haben();
        haben.conjugation.third_singular = None;
        let object = ArticledNoun::new(&frau, ArticleType::Definite, Cardinality::Singular).unwrap();

        let err = Sentence::from_parts(sie(), &haben, object)
            .render_with_blank(Slot::Object)
            .unwrap_err();
        assert!(matches!(err, ComposeError::Morph(MorphError::MissingForm { .. })));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_enumeration_visits_every_combination() {
        let frau = frau();
        let haben = haben();
        let object = ArticledNoun::new(&frau, ArticleType::Indefinite, Cardinality::Plural).unwrap();
        let start = Sentence::from_parts(sie(), &haben, object).first();

        let mut walk = start.variants();
        let answers: Vec<String> = walk
            .by_ref()
            .map(|s| s.render_with_blank(Slot::Verb).unwrap().answer)
            .collect();

        // 8 pronoun states for each of the 4 object states
        assert_eq!(answers.len(), 32);
        assert!(walk.error().is_none());
        assert_eq!(answers[0], "Ich habe die Frau");
        assert_eq!(answers[7], "Sie haben die Frau");
        assert_eq!(answers[8], "Ich habe eine Frau");
        assert_eq!(answers[31], "Sie haben Frauen");
    }

    #[test]
    fn test_subject_without_plural_counts_as_exhausted() {
        let milch = milch();
        let frau = frau();
        let haben = haben();
        let subject = ArticledNoun::new(&milch, ArticleType::Definite, Cardinality::Singular).unwrap();
        let object = ArticledNoun::new(&frau, ArticleType::Definite, Cardinality::Singular).unwrap();
        let start = Sentence::from_parts(subject, &haben, object);

        let mut walk = start.variants();
        assert_eq!(walk.by_ref().count(), 8);
        assert!(walk.error().is_none());
    }

    #[test]
    fn test_object_without_plural_fails_rotation() {
        let milch = milch();
        let haben = haben();
        let object = ArticledNoun::new(&milch, ArticleType::Indefinite, Cardinality::Singular).unwrap();
        let last_pronoun = Pronoun::new(PronounType::Personal, Person::Third, Cardinality::Plural, None).unwrap();
        let sentence = Sentence::from_parts(last_pronoun, &haben, object);

        let err = sentence.rotate().unwrap_err();
        assert!(matches!(err, ComposeError::Morph(MorphError::MissingPlural { .. })));
        assert!(err.is_recoverable());

        let mut walk = sentence.first().variants();
        assert_eq!(walk.by_ref().count(), 16);
        assert!(walk.error().is_some());
    }

    #[test]
    fn test_last_state_is_exhausted() {
        let frau = frau();
        let haben = haben();
        let object = ArticledNoun::new(&frau, ArticleType::Indefinite, Cardinality::Plural).unwrap();
        let subject = Pronoun::new(PronounType::Personal, Person::Third, Cardinality::Plural, None).unwrap();

        assert_eq!(Sentence::from_parts(subject, &haben, object).rotate(), Ok(Rotation::Exhausted));
    }

    #[test]
    fn test_empty_pools() {
        let frau = frau();
        let haben = haben();
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        assert_eq!(
            Sentence::make_random(&[&frau], &[], &mut rng),
            Err(ComposeError::EmptyPool("verb"))
        );
        assert_eq!(
            Sentence::make_random(&[], &[&haben], &mut rng),
            Err(ComposeError::EmptyPool("noun"))
        );
    }

    #[test]
    fn test_session_restarts_after_every_variant() {
        let frau = frau();
        let mann = noun("Mann", Some("Männer"), "man", Gender::Masculine);
        let haben = haben();
        let mut session = Session::new(vec![&frau, &mann], vec![&haben], ChaCha8Rng::seed_from_u64(5)).unwrap();

        // Walk to the end of the current triple
        let mut steps = 0;
        while session.advance().unwrap() != Advance::Restarted {
            steps += 1;
            assert!(steps < 64);
        }
        assert_eq!(*session.sentence(), session.sentence().first());

        let total = session.sentence().variants().count();
        for _ in 1..total {
            assert_eq!(session.advance().unwrap(), Advance::Rotated);
        }
        assert_eq!(session.advance().unwrap(), Advance::Restarted);
    }

    #[test]
    fn test_session_rerolls_on_missing_plural() {
        let milch = milch();
        let haben = haben();
        let mut session = Session::new(vec![&milch], vec![&haben], ChaCha8Rng::seed_from_u64(9)).unwrap();

        let outcomes: Vec<Advance> = (0..40).map(|_| session.advance().unwrap()).collect();
        assert!(outcomes.contains(&Advance::Rerolled));
        assert!(!outcomes.contains(&Advance::Restarted));
    }

    #[test]
    fn test_session_accept_and_blank() {
        let frau = frau();
        let haben = haben();
        let mut session = Session::new(vec![&frau], vec![&haben], ChaCha8Rng::seed_from_u64(1)).unwrap();

        session.set_blank(Slot::Verb);
        let shown = session.render().unwrap();
        assert_eq!(shown.blank, Slot::Verb);
        assert_eq!(shown.hint.as_deref(), Some("haben"));

        session.accept().unwrap();
        assert_eq!(session.accepted(), &[shown]);
    }

    #[test]
    fn test_session_render_skips_unconjugated_verbs() {
        let frau = frau();
        let haben = haben();
        let mut broken = sein();
        broken.conjugation = Conjugation::default();
        let mut session = Session::new(vec![&frau], vec![&broken, &haben], ChaCha8Rng::seed_from_u64(2)).unwrap();

        for _ in 0..20 {
            let rendered = session.render().unwrap();
            assert_eq!(session.sentence().verb().infinitive, "haben");
            assert!(!rendered.answer.is_empty());
            session.reroll().unwrap();
        }
    }

    proptest! {
        #[test]
        fn test_make_random_never_fails(seed in any::<u64>()) {
            let nouns = [frau(), milch(), noun("Kind", Some("Kinder"), "child", Gender::Neuter)];
            let verbs = [haben(), sein()];
            let noun_pool: Vec<&NounEntry> = nouns.iter().collect();
            let verb_pool: Vec<&VerbEntry> = verbs.iter().collect();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);

            let sentence = Sentence::make_random(&noun_pool, &verb_pool, &mut rng).unwrap();
            let rendered = sentence.render(&mut rng).unwrap();
            prop_assert!(rendered.question.contains(BLANK));
            prop_assert_eq!(sentence.first(), sentence.first().first());
        }

        #[test]
        fn test_capitalization_is_idempotent(text in "[a-zäöüß ]{0,24}[A-Za-z]{0,8}") {
            let once = capitalize_first(&text);
            prop_assert_eq!(capitalize_first(&once), once.clone());
            prop_assert_eq!(once.chars().count() >= text.chars().count(), true);
        }
    }
}
