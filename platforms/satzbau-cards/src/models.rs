use satzbau_protocol::{DeckId, ModelId};
use serde::Serialize;

/// One card layout of a note model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Template {
    pub name: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

/// Field layout and card templates shared by a family of notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NoteModel {
    pub id: ModelId,
    pub name: &'static str,
    pub fields: &'static [&'static str],
    pub templates: &'static [Template],
    pub css: &'static str,
}

pub const CSS: &str = ".card {
  font-family: arial;
  font-size: 20px;
  text-align: center;
  color: black;
  background-color: white;
}";

pub const VOCABULARY_DECK_ID: DeckId = DeckId::new(1854703173);
pub const PHRASES_DECK_ID: DeckId = DeckId::new(1568577201);
pub const GRAMMAR_DECK_ID: DeckId = DeckId::new(1878326705);

pub const VOCABULARY_DECK_NAME: &str = "German::Vocabulary";
pub const PHRASES_DECK_NAME: &str = "German::Phrases";
pub const GRAMMAR_DECK_NAME: &str = "German::Grammar";

pub const VOCABULARY_MODEL: NoteModel = NoteModel {
    id: ModelId::new(1557451532),
    name: "German Vocabulary Model",
    fields: &["German", "English", "PartOfSpeech"],
    templates: &[
        Template {
            name: "English -> German",
            question: "{{English}} ({{PartOfSpeech}})",
            answer: "{{FrontSide}}<hr id=\"answer\">{{German}}",
        },
        Template {
            name: "German -> English",
            question: "{{German}}",
            answer: "{{FrontSide}}<hr id=\"answer\">{{English}} ({{PartOfSpeech}})",
        },
    ],
    css: CSS,
};

pub const NOUN_MODEL: NoteModel = NoteModel {
    id: ModelId::new(1244371399),
    name: "German Noun Model",
    fields: &["German", "English", "PartOfSpeech", "Gender"],
    templates: &[
        Template {
            name: "English -> German",
            question: "{{English}} ({{PartOfSpeech}})",
            answer: "{{FrontSide}}<hr id=\"answer\">{{Gender}} {{German}}",
        },
        Template {
            name: "German -> English",
            question: "{{Gender}} {{German}}",
            answer: "{{FrontSide}}<hr id=\"answer\">{{English}} ({{PartOfSpeech}})",
        },
    ],
    css: CSS,
};

pub const VERB_MODEL: NoteModel = NoteModel {
    id: ModelId::new(2064417967),
    name: "German Verb Model",
    fields: &[
        "German",
        "English",
        "PartOfSpeech",
        "Conjugation (ich)",
        "Conjugation (du)",
        "Conjugation (er/sie/es)",
        "Conjugation (wir)",
        "Conjugation (ihr)",
        "Conjugation (Sie)",
    ],
    templates: &[
        Template {
            name: "English -> German",
            question: "{{English}} ({{PartOfSpeech}})",
            answer: "{{FrontSide}}<hr id=\"answer\">{{German}}<br /><br />ich {{Conjugation (ich)}}, du {{Conjugation (du)}}, er/sie/es {{Conjugation (er/sie/es)}}, wir {{Conjugation (wir)}}, ihr {{Conjugation (ihr)}}, Sie {{Conjugation (Sie)}}",
        },
        Template {
            name: "German -> English",
            question: "{{German}}",
            answer: "{{FrontSide}}<hr id=\"answer\">{{English}} ({{PartOfSpeech}})",
        },
    ],
    css: CSS,
};

pub const PHRASE_MODEL: NoteModel = NoteModel {
    id: ModelId::new(1618410619),
    name: "German Phrase Model",
    fields: &["German", "English"],
    templates: &[
        Template {
            name: "English -> German",
            question: "{{English}}",
            answer: "{{FrontSide}}<hr id=\"answer\">{{German}}",
        },
        Template {
            name: "German -> English",
            question: "{{German}}",
            answer: "{{FrontSide}}<hr id=\"answer\">{{English}}",
        },
    ],
    css: CSS,
};

pub const GRAMMAR_MODEL: NoteModel = NoteModel {
    id: ModelId::new(7049888),
    name: "German Grammar Model",
    fields: &[
        "Complete sentence",
        "Incomplete sentence",
        "English sentence",
        "Hint",
        "Format",
    ],
    templates: &[Template {
        name: "Complete the sentence",
        question: "{{Incomplete sentence}} ({{Hint}})",
        answer: "{{FrontSide}}<hr id=\"answer\">{{Complete sentence}}<br /><br />({{English sentence}})",
    }],
    css: CSS,
};

pub static ALL_MODELS: [NoteModel; 5] = [
    VOCABULARY_MODEL,
    NOUN_MODEL,
    VERB_MODEL,
    PHRASE_MODEL,
    GRAMMAR_MODEL,
];

pub fn model_by_id(id: ModelId) -> Option<&'static NoteModel> {
    ALL_MODELS.iter().find(|model| model.id == id)
}
