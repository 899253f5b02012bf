//! Corpus assembly.
//!
//! The builder walks a source directory, runs every file through the
//! ingest and normalize stages, and accumulates ordered records plus
//! summary statistics. It is strict-fail: the first read or metadata error
//! aborts the whole build, because the artifact's alignment invariants
//! must hold unconditionally for anything that gets written.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use ingest::{document_stem, parse_stem, read_document, DocumentMetadata};
use normalize::{normalize, RemovalSet};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::document::{Corpus, DocumentRecord};
use crate::error::CorpusError;

/// License files are repository furniture, not corpus text.
const LICENSE_FILE: &str = "LICENSE";

/// Options controlling a corpus build.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    /// Fan the per-file read+normalize step out across threads. The
    /// normalize and parse stages are pure and file reads are independent,
    /// so this changes wall-clock time only; records are reassembled into
    /// enumeration order before ids and totals are assigned.
    pub parallel: bool,
}

/// Observer for per-document build progress.
///
/// Informational only, not part of the data contract. With
/// [`BuildOptions::parallel`] set, `processed` counts completions, which
/// may not arrive in document order.
pub trait BuildProgress: Send + Sync {
    fn on_document(&self, processed: usize, total: usize);
}

/// Walk `root`, normalize every eligible file, and assemble a [`Corpus`].
///
/// Eligible files are all regular files at any depth except those named
/// exactly `LICENSE`. Enumeration order is sorted by full path; raw
/// directory-walk order varies by platform and is never trusted.
///
/// An empty source directory is not an error: the build logs a warning and
/// returns an empty corpus, which still serializes to a valid artifact.
pub fn build_corpus(
    root: &Path,
    set: &RemovalSet,
    options: &BuildOptions,
    progress: Option<&dyn BuildProgress>,
) -> Result<Corpus, CorpusError> {
    let paths = enumerate_sources(root)?;
    let total = paths.len();
    if total == 0 {
        warn!(root = %root.display(), "source directory contains no eligible files");
    }

    let loaded = if options.parallel {
        let completed = AtomicUsize::new(0);
        paths
            .par_iter()
            .map(|path| {
                let record = load_document(path, set)?;
                let processed = completed.fetch_add(1, Ordering::Relaxed) + 1;
                if let Some(progress) = progress {
                    progress.on_document(processed, total);
                }
                Ok(record)
            })
            .collect::<Result<Vec<_>, CorpusError>>()?
    } else {
        let mut loaded = Vec::with_capacity(total);
        for (index, path) in paths.iter().enumerate() {
            loaded.push(load_document(path, set)?);
            if let Some(progress) = progress {
                progress.on_document(index + 1, total);
            }
        }
        loaded
    };

    // Ids and totals are assigned only here, in enumeration order, so the
    // parallel path cannot perturb the ordering contract.
    let mut documents = Vec::with_capacity(loaded.len());
    let mut total_characters: u64 = 0;
    for (id, (stem, metadata, text)) in loaded.into_iter().enumerate() {
        let chars = text.chars().count();
        total_characters += chars as u64;
        documents.push(DocumentRecord {
            id,
            stem,
            metadata,
            text,
            chars,
        });
    }

    info!(
        documents = documents.len(),
        total_characters, "corpus_built"
    );
    Ok(Corpus {
        documents,
        total_characters,
    })
}

/// Enumerate eligible source files under `root`, sorted by full path.
fn enumerate_sources(root: &Path) -> Result<Vec<PathBuf>, CorpusError> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.file_name() == OsStr::new(LICENSE_FILE) {
            continue;
        }
        paths.push(entry.into_path());
    }
    paths.sort();
    Ok(paths)
}

fn load_document(
    path: &Path,
    set: &RemovalSet,
) -> Result<(String, DocumentMetadata, String), CorpusError> {
    let raw = read_document(path)?;
    let stem = document_stem(path)?.to_string();
    let metadata = parse_stem(&stem)?;
    let text = normalize(&raw, set);
    debug!(path = %path.display(), raw_bytes = raw.len(), "document_normalized");
    Ok((stem, metadata, text))
}
