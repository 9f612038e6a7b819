mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use satzbau_composer::Slot;

#[derive(Parser, Debug)]
#[command(name = "satzbau", author, version, about = "German vocabulary and grammar flashcards")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validates a JSON bank export and writes it as an rkyv lexicon
    Compile {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },

    /// Builds the vocabulary and phrase decks
    Decks {
        /// Bank file (.json export or .rkyv lexicon)
        #[arg(short, long, value_name = "FILE")]
        bank: PathBuf,

        #[arg(short, long, value_name = "FILE", default_value = "output.json")]
        output: PathBuf,
    },

    /// Interactively picks practice sentences for the grammar deck
    Sentences {
        #[arg(short, long, value_name = "FILE")]
        bank: PathBuf,

        #[arg(short, long, value_name = "FILE", default_value = "grammar_output.json")]
        output: PathBuf,

        /// Seed for reproducible sentences
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Prints every variant of one subject/verb/object triple
    Enumerate {
        #[arg(short, long, value_name = "FILE")]
        bank: PathBuf,

        /// Subject noun; a personal pronoun is used when omitted
        #[arg(long)]
        subject: Option<String>,

        #[arg(long)]
        verb: String,

        #[arg(long)]
        object: String,

        #[arg(long, value_enum, default_value = "object")]
        blank: BlankArg,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum BlankArg {
    Subject,
    Verb,
    Object,
}

impl From<BlankArg> for Slot {
    fn from(arg: BlankArg) -> Self {
        match arg {
            BlankArg::Subject => Slot::Subject,
            BlankArg::Verb => Slot::Verb,
            BlankArg::Object => Slot::Object,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Command::Compile { input, output } => commands::compile(&input, &output),
        Command::Decks { bank, output } => commands::decks(&bank, &output),
        Command::Sentences { bank, output, seed } => commands::sentences(&bank, &output, seed),
        Command::Enumerate {
            bank,
            subject,
            verb,
            object,
            blank,
        } => commands::enumerate(&bank, subject.as_deref(), &verb, &object, blank.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sentences_defaults() {
        let cli = Cli::try_parse_from(["satzbau", "sentences", "--bank", "bank.json", "--seed", "7"]).unwrap();
        match cli.command {
            Command::Sentences { bank, output, seed } => {
                assert_eq!(bank, PathBuf::from("bank.json"));
                assert_eq!(output, PathBuf::from("grammar_output.json"));
                assert_eq!(seed, Some(7));
            }
            other => panic!("Expected sentences, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_decks_default_output() {
        let cli = Cli::try_parse_from(["satzbau", "decks", "-b", "bank.rkyv"]).unwrap();
        match cli.command {
            Command::Decks { output, .. } => assert_eq!(output, PathBuf::from("output.json")),
            other => panic!("Expected decks, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_enumerate() {
        let cli = Cli::try_parse_from([
            "satzbau", "enumerate", "--bank", "bank.json", "--verb", "haben", "--object", "Frau", "--blank", "verb",
        ])
        .unwrap();
        match cli.command {
            Command::Enumerate { subject, blank, .. } => {
                assert_eq!(subject, None);
                assert_eq!(Slot::from(blank), Slot::Verb);
            }
            other => panic!("Expected enumerate, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_missing_arguments() {
        assert!(Cli::try_parse_from(["satzbau", "compile", "--input", "bank.json"]).is_err());
        assert!(Cli::try_parse_from(["satzbau", "enumerate", "--bank", "bank.json", "--blank", "adverb"]).is_err());
    }
}
