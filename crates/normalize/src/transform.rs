use crate::removal::RemovalSet;

/// Strip whitespace and every removal-set entry from `raw`.
///
/// Whitespace is deleted outright rather than collapsed: the source texts
/// are logographic, so any whitespace is incidental formatting. Single
/// code-point entries are removed in the same pass; longer entries are
/// deleted as literal substrings, in set order, until none remain.
///
/// The transform is pure and infallible. Characters that are neither
/// whitespace nor set members pass through untouched, and re-normalizing
/// an already-normalized string yields it unchanged.
pub fn normalize(raw: &str, set: &RemovalSet) -> String {
    let mut text = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch.is_whitespace() || set.removes_char(ch) {
            continue;
        }
        text.push(ch);
    }

    // A deletion can splice the two halves of a fresh occurrence together,
    // so multi-character entries are deleted to a fixed point.
    for needle in set.substrings() {
        while text.contains(needle.as_str()) {
            text = text.replace(needle.as_str(), "");
        }
    }

    text
}
