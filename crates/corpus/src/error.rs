use std::path::PathBuf;

use ingest::{IngestError, MetadataFormatError};
use thiserror::Error;

use crate::artifact::SCHEMA_VERSION;

/// Errors raised while building or persisting a corpus.
///
/// Every variant is fatal to the run: downstream tools bind to the
/// equal-length aligned sequences in the artifact, so a partial corpus must
/// never be written.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Metadata(#[from] MetadataFormatError),
    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("failed to write corpus artifact {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode corpus artifact {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to read corpus artifact {path}: {source}")]
    ArtifactRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode corpus artifact {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unsupported corpus schema version {found}, expected {}", SCHEMA_VERSION)]
    UnsupportedSchema { found: u32 },
    #[error("corpus artifact is misaligned: {stems} stems vs {texts} texts")]
    Misaligned { stems: usize, texts: usize },
    #[error("corpus artifact metadata is misaligned: {metadata} entries vs {texts} texts")]
    MisalignedMetadata { metadata: usize, texts: usize },
}
