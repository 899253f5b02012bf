//! In-memory corpus types.
//!
//! A [`Corpus`] is built once per run, lives fully in memory, and is not
//! mutated after serialization. Document order is the deterministic
//! enumeration order of the source directory and is part of the external
//! contract: later stages align a metadata sequence and a text sequence by
//! position.

use ingest::DocumentMetadata;
use serde::{Deserialize, Serialize};

/// One normalized source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Ordinal position in the corpus (0-based enumeration order).
    pub id: usize,
    /// Filename stem the metadata was parsed from.
    pub stem: String,
    /// Bibliographic fields, parsed once and immutable afterwards.
    pub metadata: DocumentMetadata,
    /// Normalized text: no whitespace, no removal-set characters.
    pub text: String,
    /// Character count of `text` (Unicode scalar values, not bytes).
    pub chars: usize,
}

/// The assembled corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Corpus {
    pub documents: Vec<DocumentRecord>,
    /// Always equals the sum of `documents[i].chars`.
    pub total_characters: u64,
}

impl Corpus {
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
