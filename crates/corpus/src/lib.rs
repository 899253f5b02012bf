//! Intertext corpus assembly and serialization.
//!
//! This crate drives the preparation pipeline: it walks a source
//! directory, applies the ingest and normalize stages to every eligible
//! file, and persists the result as a single versioned artifact.
//!
//! ## Guarantees
//!
//! - **Deterministic order** - documents are enumerated sorted by path,
//!   so the same directory snapshot yields the same corpus on any
//!   platform, sequentially or in parallel.
//! - **Alignment** - the artifact's stem, text, and metadata sequences are
//!   always equal-length and index-aligned.
//! - **All or nothing** - a run either completes and serializes the full
//!   corpus, or aborts with a typed error and writes nothing.

mod artifact;
mod builder;
mod document;
mod error;

pub use crate::artifact::{load_artifact, write_corpus, CorpusArtifact, SCHEMA_VERSION};
pub use crate::builder::{build_corpus, BuildOptions, BuildProgress};
pub use crate::document::{Corpus, DocumentRecord};
pub use crate::error::CorpusError;
