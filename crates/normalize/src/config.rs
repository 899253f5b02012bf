//! Configuration for the normalization stage.
//!
//! This module defines [`NormalizeConfig`], which selects the removal
//! groups applied to a corpus and materializes them into a validated
//! [`RemovalSet`] once at startup.
//!
//! # Versioning
//!
//! The `version` field tracks behavior changes. Any change to the built-in
//! groups (even fixing a wrong code point) must be accompanied by a version
//! bump so that corpora prepared under different rules are distinguishable.
//! Version 0 is reserved and rejected.
//!
//! # Per-corpus tuning
//!
//! The groups toggle independently so the set can follow the corpus
//! language: a corpus with meaningful Latin content keeps
//! `strip_latin_letters` off, a corpus typeset without CJK punctuation
//! turns `strip_cjk_punctuation` off, and so on. `extra` appends
//! corpus-specific literals (marginalia markers, repeated colophons) after
//! the built-in groups.
//!
//! ```yaml
//! version: 1
//! strip_ascii_punctuation: true
//! strip_cjk_punctuation: true
//! strip_box_and_geometry: true
//! strip_latin_letters: true
//! extra: ["序文"]
//! ```

use serde::{Deserialize, Serialize};

use crate::charset;
use crate::error::NormalizeError;
use crate::removal::RemovalSet;

/// Selects which removal groups apply to a corpus.
///
/// Cheap to clone, serializable, and validated once by [`removal_set()`];
/// the transform itself cannot fail.
///
/// [`removal_set()`]: NormalizeConfig::removal_set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Semantic version of the removal rules. Must be >= 1.
    pub version: u32,

    /// Strip generic ASCII punctuation and decimal digits.
    pub strip_ascii_punctuation: bool,

    /// Strip ideographic and full-width punctuation.
    pub strip_cjk_punctuation: bool,

    /// Strip box-drawing rules and geometric shapes (OCR table debris).
    pub strip_box_and_geometry: bool,

    /// Strip Latin letters (ASCII and full-width forms). The target
    /// corpora treat Latin as editorial annotation, not text.
    pub strip_latin_letters: bool,

    /// Corpus-specific literal entries, applied after the built-in groups.
    pub extra: Vec<String>,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            strip_ascii_punctuation: true,
            strip_cjk_punctuation: true,
            strip_box_and_geometry: true,
            strip_latin_letters: true,
            extra: Vec::new(),
        }
    }
}

impl NormalizeConfig {
    /// Materialize the enabled groups into a validated [`RemovalSet`].
    ///
    /// Group order is fixed (ASCII, CJK, box/geometry, Latin, extra); the
    /// result is order-insensitive anyway because entries are disjoint
    /// literal deletions. Fails on version 0, on an empty `extra` entry,
    /// or on an `extra` entry that duplicates a built-in one.
    pub fn removal_set(&self) -> Result<RemovalSet, NormalizeError> {
        if self.version == 0 {
            return Err(NormalizeError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }

        let mut entries: Vec<String> = Vec::new();
        if self.strip_ascii_punctuation {
            entries.extend(charset::ASCII_PUNCTUATION.chars().map(String::from));
        }
        if self.strip_cjk_punctuation {
            entries.extend(charset::CJK_PUNCTUATION.chars().map(String::from));
        }
        if self.strip_box_and_geometry {
            entries.extend(charset::BOX_AND_GEOMETRY.chars().map(String::from));
        }
        if self.strip_latin_letters {
            entries.extend(charset::LATIN_LETTERS.chars().map(String::from));
        }
        entries.extend(self.extra.iter().cloned());

        RemovalSet::from_entries(entries)
    }
}
