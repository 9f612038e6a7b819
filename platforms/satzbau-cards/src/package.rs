use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::models::{model_by_id, NoteModel};
use crate::note::Deck;

/// Turns finished decks into a distributable file.
pub trait PackageWriter {
    fn write(&self, decks: &[Deck], path: &Path) -> Result<()>;
}

#[derive(Serialize)]
struct Package<'a> {
    models: Vec<&'static NoteModel>,
    decks: &'a [Deck],
}

/// Writes the decks and the models their notes use as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPackageWriter;

impl JsonPackageWriter {
    pub fn to_json(&self, decks: &[Deck]) -> Result<String> {
        let used: BTreeSet<_> = decks
            .iter()
            .flat_map(|deck| deck.notes.iter().map(|note| note.model))
            .collect();

        let models = used.into_iter().filter_map(model_by_id).collect();
        Ok(serde_json::to_string_pretty(&Package { models, decks })?)
    }
}

impl PackageWriter for JsonPackageWriter {
    fn write(&self, decks: &[Deck], path: &Path) -> Result<()> {
        let json = self.to_json(decks)?;
        fs::write(path, json)?;

        let notes: usize = decks.iter().map(Deck::len).sum();
        log::info!("Wrote {} notes in {} decks to {}", notes, decks.len(), path.display());
        Ok(())
    }
}
