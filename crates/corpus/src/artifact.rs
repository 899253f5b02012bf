//! Persisted corpus schema.
//!
//! The artifact is the contract downstream tools bind to: two index-aligned
//! ordered sequences (stems and normalized texts) plus the total character
//! count. It is plain structured JSON: self-describing, data-only, and
//! safe to load even when the artifact comes from an untrusted source.
//!
//! Schema evolution is additive: readers that know only the two aligned
//! sequences keep working when fields are added. `metadata` is the first
//! such addition.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use ingest::DocumentMetadata;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::document::Corpus;
use crate::error::CorpusError;

/// Current artifact schema version.
pub const SCHEMA_VERSION: u32 = 1;

/// The serialized corpus schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusArtifact {
    pub schema_version: u32,
    /// Filename stems, in corpus order.
    pub stems: Vec<String>,
    /// Normalized texts, index-aligned with `stems`.
    pub texts: Vec<String>,
    /// Sum of character counts across `texts`.
    pub total_characters: u64,
    /// Parsed bibliographic fields, index-aligned with `stems` and
    /// `texts`. Additive relative to the two-sequence contract; absent in
    /// artifacts written by older tools.
    #[serde(default)]
    pub metadata: Vec<DocumentMetadata>,
}

impl From<&Corpus> for CorpusArtifact {
    fn from(corpus: &Corpus) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            stems: corpus.documents.iter().map(|d| d.stem.clone()).collect(),
            texts: corpus.documents.iter().map(|d| d.text.clone()).collect(),
            total_characters: corpus.total_characters,
            metadata: corpus
                .documents
                .iter()
                .map(|d| d.metadata.clone())
                .collect(),
        }
    }
}

impl CorpusArtifact {
    /// Check the alignment invariants downstream readers depend on.
    pub fn validate(&self) -> Result<(), CorpusError> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(CorpusError::UnsupportedSchema {
                found: self.schema_version,
            });
        }
        if self.stems.len() != self.texts.len() {
            return Err(CorpusError::Misaligned {
                stems: self.stems.len(),
                texts: self.texts.len(),
            });
        }
        if !self.metadata.is_empty() && self.metadata.len() != self.texts.len() {
            return Err(CorpusError::MisalignedMetadata {
                metadata: self.metadata.len(),
                texts: self.texts.len(),
            });
        }
        Ok(())
    }
}

/// Serialize `corpus` to `destination`, overwriting any existing file.
///
/// Runs once, after a fully successful build; a failed build never
/// reaches this point, so no partial artifact can exist on disk.
pub fn write_corpus(corpus: &Corpus, destination: &Path) -> Result<(), CorpusError> {
    let artifact = CorpusArtifact::from(corpus);
    let file = File::create(destination).map_err(|source| CorpusError::Write {
        path: destination.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &artifact).map_err(|source| CorpusError::Encode {
        path: destination.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(|source| CorpusError::Write {
        path: destination.to_path_buf(),
        source,
    })?;

    info!(
        path = %destination.display(),
        documents = artifact.stems.len(),
        total_characters = artifact.total_characters,
        "corpus_written"
    );
    Ok(())
}

/// Load and validate a previously written artifact.
///
/// This is the read side downstream stages use; round-tripping a corpus
/// through [`write_corpus`] and back preserves the aligned sequences and
/// the total byte-for-byte.
pub fn load_artifact(path: &Path) -> Result<CorpusArtifact, CorpusError> {
    let file = File::open(path).map_err(|source| CorpusError::ArtifactRead {
        path: path.to_path_buf(),
        source,
    })?;
    let artifact: CorpusArtifact =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| CorpusError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
    artifact.validate()?;
    Ok(artifact)
}
