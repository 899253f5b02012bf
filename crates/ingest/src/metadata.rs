//! Filename metadata grammar.
//!
//! Source files are named `Title-Era-Author_Division.ext`. The stem (the
//! name with its extension stripped) carries all bibliographic metadata the
//! corpus records; there is no in-band metadata in the text itself.
//!
//! The grammar is fixed but lenient about division: a stem without a `_`
//! part describes an undivided text and gets division `"0"`. Everything
//! else is strict: the left part must split into exactly three non-empty
//! `-` fields, or parsing fails with a [`MetadataFormatError`].

use serde::{Deserialize, Serialize};

use crate::error::MetadataFormatError;

/// Division string used when a text has not been subdivided.
///
/// Kept as the string literal `"0"`, not numeric zero, so the field is
/// uniform with supplied division strings.
pub const UNDIVIDED: &str = "0";

/// Bibliographic fields parsed from a filename stem.
///
/// Fields are derived once at parse time and never mutated afterwards.
/// Case and character content are preserved verbatim; no normalization is
/// applied to metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub title: String,
    pub era: String,
    pub author: String,
    /// Chapter/volume identifier; `"0"` for an undivided text.
    pub division: String,
}

/// Parse a filename stem into [`DocumentMetadata`].
///
/// The stem splits once on the first `_`; the remainder is the division
/// (further `_` characters stay inside it). A missing or empty remainder
/// means the text is undivided. The left part must then split on `-` into
/// exactly `title`, `era`, and `author`, all non-empty.
pub fn parse_stem(stem: &str) -> Result<DocumentMetadata, MetadataFormatError> {
    let (head, division) = match stem.split_once('_') {
        Some((head, rest)) if !rest.is_empty() => (head, rest.to_string()),
        // A trailing `_` with nothing after it reads as "not subdivided".
        Some((head, _)) => (head, UNDIVIDED.to_string()),
        None => (stem, UNDIVIDED.to_string()),
    };

    let fields: Vec<&str> = head.split('-').collect();
    if fields.len() != 3 {
        return Err(MetadataFormatError::FieldCount {
            stem: stem.to_string(),
            found: fields.len(),
        });
    }
    for (field, value) in ["title", "era", "author"].into_iter().zip(&fields) {
        if value.is_empty() {
            return Err(MetadataFormatError::EmptyField {
                stem: stem.to_string(),
                field,
            });
        }
    }

    Ok(DocumentMetadata {
        title: fields[0].to_string(),
        era: fields[1].to_string(),
        author: fields[2].to_string(),
        division,
    })
}
