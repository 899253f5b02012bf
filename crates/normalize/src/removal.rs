use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::NormalizeError;

/// Ordered set of literal entries stripped during normalization.
///
/// Entries are plain code points or substrings, never patterns. The set is
/// validated once at construction: empty entries and duplicates are
/// rejected, so a typo in a hand-maintained configuration surfaces at
/// startup instead of silently skewing every document.
///
/// Serialized form is a plain list of strings; deserialization runs the
/// same validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct RemovalSet {
    entries: Vec<String>,
    // Single code points dominate real sets, so they get a one-pass
    // membership check; longer entries fall back to substring deletion.
    chars: FxHashSet<char>,
    substrings: Vec<String>,
}

impl RemovalSet {
    /// Build a validated set from literal entries, preserving order.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, NormalizeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut ordered = Vec::new();
        let mut chars = FxHashSet::default();
        let mut substrings = Vec::new();

        for (index, entry) in entries.into_iter().enumerate() {
            let entry: String = entry.into();
            if entry.is_empty() {
                return Err(NormalizeError::EmptyEntry { index });
            }
            if !seen.insert(entry.clone()) {
                return Err(NormalizeError::DuplicateEntry(entry));
            }
            let mut iter = entry.chars();
            match (iter.next(), iter.next()) {
                (Some(ch), None) => {
                    chars.insert(ch);
                }
                _ => substrings.push(entry.clone()),
            }
            ordered.push(entry);
        }

        Ok(Self {
            entries: ordered,
            chars,
            substrings,
        })
    }

    /// The validated entries, in application order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn removes_char(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    pub(crate) fn substrings(&self) -> &[String] {
        &self.substrings
    }
}

impl TryFrom<Vec<String>> for RemovalSet {
    type Error = NormalizeError;

    fn try_from(entries: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_entries(entries)
    }
}

impl From<RemovalSet> for Vec<String> {
    fn from(set: RemovalSet) -> Self {
        set.entries
    }
}
