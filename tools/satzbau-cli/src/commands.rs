use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{bail, Context};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use satzbau_bank::{archive, Bank, JsonFileSource};
use satzbau_cards::{grammar_deck, vocabulary_decks, JsonPackageWriter, PackageWriter};
use satzbau_composer::{Advance, RenderedSentence, Sentence, Session, Slot, Subject};
use satzbau_morph::{ArticledNoun, Pronoun, Rotatable};
use satzbau_protocol::{ArticleType, Cardinality, Person, PronounType};

/// Loads a bank from a JSON export or, for `.rkyv` files, a compiled lexicon.
pub fn load_bank(path: &Path) -> anyhow::Result<Bank> {
    let bank = match path.extension().and_then(|ext| ext.to_str()) {
        Some("rkyv") => {
            let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            Bank::from_lexicon(archive::load(&bytes)?)
        }
        _ => Bank::load(&JsonFileSource::new(path))
            .with_context(|| format!("loading bank {}", path.display()))?,
    };
    Ok(bank)
}

fn make_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

pub fn compile(input: &Path, output: &Path) -> anyhow::Result<()> {
    println!("📖 Reading JSON from {:?}...", input);
    let bank = Bank::load(&JsonFileSource::new(input))?;

    println!("⚙️  Compiling lexicon with {} entries...", bank.len());
    let bytes = archive::compile(&bank.to_lexicon())?;
    fs::write(output, &bytes)?;

    println!("✅ Success! Binary written to {:?}", output);
    Ok(())
}

pub fn decks(bank: &Path, output: &Path) -> anyhow::Result<()> {
    let bank = load_bank(bank)?;
    let decks = vocabulary_decks(&bank);
    JsonPackageWriter.write(&decks, output)?;

    println!("Complete! Now import {} and sync.", output.display());
    Ok(())
}

fn describe(outcome: Advance) -> &'static str {
    match outcome {
        Advance::Rotated => "Rotated!",
        Advance::Restarted => "Rotated! (back to beginning!)",
        Advance::Rerolled => "No plural! New word!",
    }
}

pub fn sentences(bank: &Path, output: &Path, seed: Option<u64>) -> anyhow::Result<()> {
    let bank = load_bank(bank)?;
    let nouns: Vec<_> = bank.nouns().collect();
    let verbs: Vec<_> = bank.sentence_verbs().collect();
    if verbs.is_empty() {
        bail!("No fully conjugated nominative or accusative verbs tagged 'generate' in the bank");
    }
    log::info!("Generating from {} nouns and {} verbs", nouns.len(), verbs.len());

    let mut session = Session::new(nouns, verbs, make_rng(seed))?;
    let result = drive(&mut session, io::stdin().lock());
    finish_session(result, session.into_accepted(), output)
}

/// Prompts for each rendered sentence until `input` ends or the user quits.
fn drive<R: Rng, I: BufRead>(session: &mut Session<'_, R>, input: I) -> anyhow::Result<()> {
    let mut lines = input.lines();

    loop {
        let rendered = session.render()?;
        println!("{} ({})", rendered.question, rendered.hint_text());
        println!("{}", rendered.answer);
        println!();

        print!("Add? [y/R/n/q] ");
        io::stdout().flush()?;
        let response = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };

        match response.trim() {
            "y" => {
                let outcome = session.accept()?;
                println!("Added!");
                println!("{}\n", describe(outcome));
            }
            "r" | "" => println!("{}\n", describe(session.advance()?)),
            "n" => {
                session.reroll()?;
                println!("New sentence!\n");
            }
            "q" => return Ok(()),
            other => println!("Unknown answer '{}'\n", other),
        }
    }
}

/// Writes the cards accepted so far, then reports how the session ended.
///
/// The deck is written even when the session failed.
fn finish_session(result: anyhow::Result<()>, accepted: Vec<RenderedSentence>, output: &Path) -> anyhow::Result<()> {
    if !accepted.is_empty() {
        JsonPackageWriter.write(&[grammar_deck(&accepted)], output)?;
        println!("Complete! Added {} cards. Now import {} and sync.", accepted.len(), output.display());
    }
    if let Err(e) = &result {
        log::error!("Session stopped: {:#}", e);
    }
    result
}

pub fn enumerate(bank: &Path, subject: Option<&str>, verb: &str, object: &str, blank: Slot) -> anyhow::Result<()> {
    let bank = load_bank(bank)?;

    let verb = bank.find_verb(verb).with_context(|| format!("no verb '{}' in the bank", verb))?;
    let object = bank.find_noun(object).with_context(|| format!("no noun '{}' in the bank", object))?;
    let subject: Subject<'_> = match subject {
        Some(name) => {
            let noun = bank.find_noun(name).with_context(|| format!("no noun '{}' in the bank", name))?;
            ArticledNoun::new(noun, ArticleType::Definite, Cardinality::Singular)?.into()
        }
        None => Pronoun::new(PronounType::Personal, Person::First, Cardinality::Singular, None)?.into(),
    };
    let object = ArticledNoun::new(object, ArticleType::Definite, Cardinality::Singular)?;

    let start = Sentence::from_parts(subject, verb, object).first();
    let mut walk = start.variants();
    for sentence in walk.by_ref() {
        let rendered = sentence.render_with_blank(blank)?;
        println!("{} | {}", rendered.question, rendered.answer);
    }

    if let Some(err) = walk.error() {
        log::warn!("Stopped early: {}", err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANK_JSON: &str = r#"[
        {"category": "Vocabulary", "german": "Frau", "german_plural": "Frauen", "english": "woman",
         "part_of_speech": "noun", "gender": "die"},
        {"category": "Vocabulary", "german": "haben", "english": "to have", "part_of_speech": "verb",
         "requires_case": "accusative", "tags": ["generate"],
         "conjugation": "ich habe, du hast, er/sie/es hat, wir haben, ihr habt, Sie haben"}
    ]"#;

    #[test]
    fn test_load_bank_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("bank.json");
        let lexicon = dir.path().join("bank.rkyv");
        fs::write(&json, BANK_JSON).unwrap();

        compile(&json, &lexicon).unwrap();

        let from_json = load_bank(&json).unwrap();
        let from_lexicon = load_bank(&lexicon).unwrap();
        assert_eq!(from_json, from_lexicon);
        assert_eq!(from_lexicon.sentence_verbs().count(), 1);
    }

    #[test]
    fn test_enumerate_unknown_word() {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("bank.json");
        fs::write(&json, BANK_JSON).unwrap();

        assert!(enumerate(&json, None, "sehen", "Frau", Slot::Object).is_err());
        assert!(enumerate(&json, Some("Frau"), "haben", "Frau", Slot::Verb).is_ok());
    }

    fn rendered(answer: &str) -> RenderedSentence {
        RenderedSentence {
            answer: answer.to_string(),
            question: "Die Frau ___ den Mann.".to_string(),
            english: "The woman has the man.".to_string(),
            hint: Some("haben".to_string()),
            blank: Slot::Verb,
        }
    }

    #[test]
    fn test_failed_session_keeps_accepted_cards() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("grammar.json");

        let result = finish_session(Err(anyhow::anyhow!("render failed")), vec![rendered("Die Frau hat den Mann.")], &output);

        assert!(result.is_err());
        let written = fs::read_to_string(&output).unwrap();
        assert!(written.contains("German::Grammar"));
        assert!(written.contains("Die Frau hat den Mann."));
    }

    #[test]
    fn test_empty_session_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("grammar.json");

        finish_session(Ok(()), Vec::new(), &output).unwrap();
        assert!(!output.exists());
    }

    #[test]
    fn test_drive_accepts_then_quits() {
        let bank = Bank::load(&satzbau_bank::InMemorySource::new(
            satzbau_bank::parse_records(BANK_JSON).unwrap(),
        ))
        .unwrap();
        let mut session = Session::new(
            bank.nouns().collect(),
            bank.sentence_verbs().collect(),
            make_rng(Some(7)),
        )
        .unwrap();

        drive(&mut session, io::Cursor::new("y\nn\nq\n")).unwrap();
        assert_eq!(session.accepted().len(), 1);

        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("grammar.json");
        finish_session(Ok(()), session.into_accepted(), &output).unwrap();
        assert!(fs::read_to_string(&output).unwrap().contains("German::Grammar"));
    }

    #[test]
    fn test_sentences_refuses_dative_only_bank() {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("bank.json");
        let output = dir.path().join("grammar.json");
        fs::write(
            &json,
            r#"[
                {"category": "Vocabulary", "german": "Frau", "german_plural": "Frauen", "english": "woman",
                 "part_of_speech": "noun", "gender": "die"},
                {"category": "Vocabulary", "german": "helfen", "english": "to help", "part_of_speech": "verb",
                 "requires_case": "dative", "tags": ["generate"],
                 "conjugation": "ich helfe, du hilfst, er/sie/es hilft, wir helfen, ihr helft, Sie helfen"}
            ]"#,
        )
        .unwrap();

        let err = sentences(&json, &output, Some(1)).unwrap_err();
        assert!(err.to_string().contains("accusative"));
        assert!(!output.exists());
    }

    #[test]
    fn test_decks_written() {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("bank.json");
        let output = dir.path().join("output.json");
        fs::write(&json, BANK_JSON).unwrap();

        decks(&json, &output).unwrap();
        assert!(fs::read_to_string(&output).unwrap().contains("German::Vocabulary"));
    }
}
