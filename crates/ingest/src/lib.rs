//! Intertext ingest layer.
//!
//! This is where source files enter the pipeline. We read each file as
//! strict UTF-8 and parse the bibliographic metadata encoded in its name;
//! downstream stages receive clean text plus typed metadata and never touch
//! the filesystem themselves.
//!
//! ## What we do here
//!
//! - **Read documents** - strict UTF-8, no lossy replacement. A file that
//!   does not decode aborts the run; a silently mangled document would
//!   poison every downstream alignment.
//! - **Extract stems** - the filename with its final extension stripped,
//!   which is the unit the metadata grammar operates on.
//! - **Parse metadata** - `Title-Era-Author_Division`, strict on field
//!   count, lenient only about a missing division.
//!
//! Errors are typed ([`IngestError`], [`MetadataFormatError`]) so the
//! aggregator can abort with the offending path and rule.

use std::fs;
use std::path::Path;

use tracing::debug;

mod error;
mod metadata;

pub use crate::error::{IngestError, MetadataFormatError};
pub use crate::metadata::{parse_stem, DocumentMetadata, UNDIVIDED};

/// Read a source document as strict UTF-8.
///
/// Undecodable byte sequences are an error, not a lossy conversion: a
/// partially-garbled text would still count characters and still serialize,
/// which is exactly the failure mode the strict policy exists to prevent.
pub fn read_document(path: &Path) -> Result<String, IngestError> {
    let bytes = fs::read(path).map_err(|source| IngestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|_| IngestError::InvalidUtf8 {
        path: path.to_path_buf(),
    })?;
    debug!(path = %path.display(), bytes = text.len(), "document_read");
    Ok(text)
}

/// The filename stem: the final path component with its extension stripped.
pub fn document_stem(path: &Path) -> Result<&str, IngestError> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| IngestError::MissingStem {
            path: path.to_path_buf(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    #[test]
    fn parse_full_stem() {
        let meta = parse_stem("Water-Edo-Basho_2").expect("stem matches grammar");
        assert_eq!(meta.title, "Water");
        assert_eq!(meta.era, "Edo");
        assert_eq!(meta.author, "Basho");
        assert_eq!(meta.division, "2");
    }

    #[test]
    fn missing_division_defaults_to_zero() {
        let meta = parse_stem("Water-Edo-Basho").expect("stem matches grammar");
        assert_eq!(meta.division, UNDIVIDED);
    }

    #[test]
    fn trailing_underscore_reads_as_undivided() {
        let meta = parse_stem("Water-Edo-Basho_").expect("stem matches grammar");
        assert_eq!(meta.division, UNDIVIDED);
    }

    #[test]
    fn division_keeps_later_underscores() {
        let meta = parse_stem("Water-Edo-Basho_2_draft").expect("stem matches grammar");
        assert_eq!(meta.division, "2_draft");
    }

    #[test]
    fn unseparated_stem_rejected() {
        let res = parse_stem("BadName");
        assert!(matches!(
            res,
            Err(MetadataFormatError::FieldCount { found: 1, .. })
        ));
    }

    #[test]
    fn four_fields_rejected() {
        let res = parse_stem("Water-Edo-Basho-Extra_1");
        assert!(matches!(
            res,
            Err(MetadataFormatError::FieldCount { found: 4, .. })
        ));
    }

    #[test]
    fn empty_field_rejected() {
        let res = parse_stem("Water--Basho_1");
        assert!(matches!(
            res,
            Err(MetadataFormatError::EmptyField { field: "era", .. })
        ));
    }

    #[test]
    fn metadata_preserves_case_and_script() {
        let meta = parse_stem("水經注-北魏-酈道元_40").expect("stem matches grammar");
        assert_eq!(meta.title, "水經注");
        assert_eq!(meta.era, "北魏");
        assert_eq!(meta.author, "酈道元");
        assert_eq!(meta.division, "40");
    }

    #[test]
    fn read_document_round_trips_utf8() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all("學而時習之".as_bytes()).expect("write");
        let text = read_document(file.path()).expect("read succeeds");
        assert_eq!(text, "學而時習之");
    }

    #[test]
    fn read_document_rejects_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(&[0xff, 0xfe, 0x00]).expect("write");
        let res = read_document(file.path());
        assert!(matches!(res, Err(IngestError::InvalidUtf8 { .. })));
    }

    #[test]
    fn read_document_reports_missing_file() {
        let res = read_document(Path::new("/nonexistent/corpus/file.txt"));
        match res {
            Err(IngestError::Read { path, .. }) => {
                assert!(path.ends_with("file.txt"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn document_stem_strips_final_extension() {
        assert_eq!(
            document_stem(Path::new("corpus/Water-Edo-Basho_2.txt")).expect("stem"),
            "Water-Edo-Basho_2"
        );
    }
}
