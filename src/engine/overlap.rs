//! Boundary overlap between two words.
//!
//! Both measures are directional: they compare one end of the first word
//! with the opposite end of the second.
//!
//! ```text
//! prefix_overlap("artsy", "start"):
//!   suffixes of "start": start, tart, art, rt, t
//!   longest one "artsy" starts with: "art"           -> 3
//!
//! suffix_overlap("beast", "start"):
//!   prefixes of "start": s, st, sta, star, start
//!   longest one "beast" ends with: "st"               -> 2
//! ```
//!
//! Lengths are counted in characters. The `*_folded` variants assume both
//! arguments are already lower-case and are what the search loop calls.

use std::borrow::Cow;

fn fold(s: &str) -> Cow<'_, str> {
    if s.chars().any(char::is_uppercase) { Cow::Owned(s.to_lowercase()) } else { Cow::Borrowed(s) }
}

/// Length of the longest suffix of `prefix` that `word` starts with.
///
/// Returns 0 when no suffix matches, including when `prefix` is empty.
/// Case-insensitive.
pub fn prefix_overlap(word: &str, prefix: &str) -> usize {
    prefix_overlap_folded(&fold(word), &fold(prefix))
}

/// Length of the longest prefix of `suffix` that `word` ends with.
///
/// Returns 0 when no prefix matches, including when `suffix` is empty.
/// Case-insensitive.
pub fn suffix_overlap(word: &str, suffix: &str) -> usize {
    suffix_overlap_folded(&fold(word), &fold(suffix))
}

pub(crate) fn prefix_overlap_folded(word: &str, prefix: &str) -> usize {
    // Earliest split point = longest suffix.
    prefix
        .char_indices()
        .find(|&(i, _)| word.starts_with(&prefix[i..]))
        .map(|(i, _)| prefix[i..].chars().count())
        .unwrap_or(0)
}

pub(crate) fn suffix_overlap_folded(word: &str, suffix: &str) -> usize {
    let mut best = 0;
    for (k, (i, c)) in suffix.char_indices().enumerate() {
        if word.ends_with(&suffix[..i + c.len_utf8()]) {
            best = k + 1;
        }
    }
    best
}
