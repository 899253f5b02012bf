use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading source documents.
///
/// Every variant names the offending path: a failed read aborts the whole
/// corpus build, so the operator needs to know exactly which file to fix.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not valid UTF-8")]
    InvalidUtf8 { path: PathBuf },
    #[error("{path} has no usable file stem")]
    MissingStem { path: PathBuf },
}

/// A filename stem that does not match `Title-Era-Author_Division`.
///
/// Ambiguous filenames must surface rather than corrupt metadata, so the
/// parser never truncates or pads: wrong field counts and empty fields are
/// hard errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetadataFormatError {
    #[error("stem {stem:?} splits into {found} `-` fields, expected exactly 3 (Title-Era-Author)")]
    FieldCount { stem: String, found: usize },
    #[error("stem {stem:?} has an empty {field} field")]
    EmptyField { stem: String, field: &'static str },
}
