//! Documentation helpers.

use crate::types::Tags;

const TAGS_PREFIX: &str = "tags:";

/// First logical line of the documentation.
///
/// Lines up to the first empty line are joined with single spaces.
pub fn short_doc(doc: &str) -> String {
    doc.trim()
        .lines()
        .map(str::trim)
        .take_while(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split `Tags: a, b` from the last line of the documentation.
///
/// Returns the documentation without the tag line and the tags found there.
pub fn split_tags_from_doc(doc: &str) -> (String, Tags) {
    let trimmed = doc.trim_end();
    let (body, last) = match trimmed.rsplit_once('\n') {
        Some((body, last)) => (body, last),
        None => ("", trimmed),
    };
    let last = last.trim();
    let rest = match last.get(..TAGS_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(TAGS_PREFIX) => &last[TAGS_PREFIX.len()..],
        _ => return (doc.to_string(), Vec::new()),
    };
    let tags = rest
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();
    (body.trim_end().to_string(), tags)
}

/// Merge tags keeping first occurrences and dropping empty ones.
pub fn merge_tags<I, S>(tags: I) -> Tags
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut merged: Tags = Vec::new();
    for tag in tags {
        let tag = tag.into();
        let tag = tag.trim();
        if !tag.is_empty() && !merged.iter().any(|t| t == tag) {
            merged.push(tag.to_string());
        }
    }
    merged
}
