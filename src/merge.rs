use crate::core::model::{PassOrigin, VocabEntry};

/// Candidate entries from one recognition pass, tagged with where the
/// pass ran so merging stays deterministic under concurrent dispatch.
#[derive(Debug, Clone)]
pub struct CandidateList {
    pub origin: PassOrigin,
    pub entries: Vec<VocabEntry>,
}

impl CandidateList {
    pub fn new(origin: PassOrigin, entries: Vec<VocabEntry>) -> Self {
        Self { origin, entries }
    }
}

/// Combines candidate lists in call order into the final entry list:
/// ascending by number, one entry per number, first occurrence wins.
///
/// The sort key is `(number, insertion index)` — the index is what makes
/// "first occurrence" mean position in the concatenation, not position
/// after sorting, when several sources claim the same number.
pub fn merge(lists: impl IntoIterator<Item = Vec<VocabEntry>>) -> Vec<VocabEntry> {
    let mut indexed: Vec<(usize, VocabEntry)> =
        lists.into_iter().flatten().enumerate().collect();
    indexed.sort_by_key(|(idx, entry)| (entry.number, *idx));

    let mut merged: Vec<VocabEntry> = Vec::with_capacity(indexed.len());
    for (_, entry) in indexed {
        if merged.last().map(|last| last.number) == Some(entry.number) {
            continue;
        }
        merged.push(entry);
    }
    merged
}

/// Merges passes that may have completed in any order: the origin tags
/// impose the page → left column → right column → pass order before the
/// positional merge runs.
pub fn merge_tagged(mut lists: Vec<CandidateList>) -> Vec<VocabEntry> {
    lists.sort_by_key(|list| list.origin);
    merge(lists.into_iter().map(|list| list.entries))
}
