//! Compiled lexicon archives.
//!
//! A validated bank can be written once as an `rkyv` archive and loaded
//! later without re-validating every row.

use rkyv::ser::{serializers::AllocSerializer, Serializer};
use rkyv::{AlignedVec, Deserialize};
use satzbau_protocol::Lexicon;

use crate::error::{BankError, Result};

pub const LEXICON_VERSION: u32 = 1;

pub fn compile(lexicon: &Lexicon) -> Result<AlignedVec> {
    let mut serializer = AllocSerializer::<256>::default();
    serializer
        .serialize_value(lexicon)
        .map_err(|e| BankError::Archive(e.to_string()))?;
    Ok(serializer.into_serializer().into_inner())
}

/// Validates `bytes` as a lexicon archive and deserializes it.
pub fn load(bytes: &[u8]) -> Result<Lexicon> {
    // Archives must be read from aligned memory
    let mut aligned = AlignedVec::with_capacity(bytes.len());
    aligned.extend_from_slice(bytes);

    let archived = rkyv::check_archived_root::<Lexicon>(&aligned)
        .map_err(|e| BankError::Archive(e.to_string()))?;
    let lexicon: Lexicon = archived
        .deserialize(&mut rkyv::Infallible)
        .map_err(|e| BankError::Archive(format!("{:?}", e)))?;

    if lexicon.version != LEXICON_VERSION {
        return Err(BankError::Archive(format!(
            "unsupported lexicon version {} (expected {})",
            lexicon.version, LEXICON_VERSION
        )));
    }

    Ok(lexicon)
}
