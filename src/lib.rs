//! Umbrella crate for the Intertext corpus-preparation pipeline.
//!
//! This crate stitches together the normalize, ingest, and corpus stages
//! so callers can prepare a corpus with a single API entry point, and
//! hosts the YAML configuration layer shared by the library and the
//! `prepare-corpus` binary.

pub use corpus::{
    build_corpus, load_artifact, write_corpus, BuildOptions, BuildProgress, Corpus,
    CorpusArtifact, CorpusError, DocumentRecord, SCHEMA_VERSION,
};
pub use ingest::{
    document_stem, parse_stem, read_document, DocumentMetadata, IngestError,
    MetadataFormatError, UNDIVIDED,
};
pub use normalize::{normalize, NormalizeConfig, NormalizeError, RemovalSet};

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use tracing::info;

mod config;

pub use crate::config::{ConfigLoadError, PrepConfig};

/// Errors that can occur while running the end-to-end pipeline.
#[derive(Debug)]
pub enum PrepError {
    Config(ConfigLoadError),
    Normalize(NormalizeError),
    Corpus(CorpusError),
}

impl fmt::Display for PrepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrepError::Config(err) => write!(f, "configuration failure: {err}"),
            PrepError::Normalize(err) => write!(f, "removal set failure: {err}"),
            PrepError::Corpus(err) => write!(f, "corpus failure: {err}"),
        }
    }
}

impl Error for PrepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PrepError::Config(err) => Some(err),
            PrepError::Normalize(err) => Some(err),
            PrepError::Corpus(err) => Some(err),
        }
    }
}

impl From<ConfigLoadError> for PrepError {
    fn from(value: ConfigLoadError) -> Self {
        PrepError::Config(value)
    }
}

impl From<NormalizeError> for PrepError {
    fn from(value: NormalizeError) -> Self {
        PrepError::Normalize(value)
    }
}

impl From<CorpusError> for PrepError {
    fn from(value: CorpusError) -> Self {
        PrepError::Corpus(value)
    }
}

/// Summary of a completed preparation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepSummary {
    pub documents: usize,
    pub total_characters: u64,
    pub artifact_path: PathBuf,
}

/// Prepare a corpus end-to-end with explicit configuration.
///
/// Materializes the removal set once, builds the corpus from
/// `config.source_dir`, and serializes it to `config.output_path`. On any
/// failure nothing is written.
pub fn prepare(
    config: &PrepConfig,
    progress: Option<&dyn BuildProgress>,
) -> Result<PrepSummary, PrepError> {
    let set = config.normalize.removal_set()?;
    let options = BuildOptions {
        parallel: config.parallel,
    };
    let built = build_corpus(&config.source_dir, &set, &options, progress)?;
    write_corpus(&built, &config.output_path)?;
    info!(
        documents = built.len(),
        total_characters = built.total_characters,
        artifact = %config.output_path.display(),
        "corpus_prepared"
    );
    Ok(PrepSummary {
        documents: built.len(),
        total_characters: built.total_characters,
        artifact_path: config.output_path.clone(),
    })
}
