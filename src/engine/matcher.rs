//! Single-word matching.
//!
//! The simpler sibling of the cycle search: list every lexicon word whose
//! start overlaps the end of a given prefix (and, optionally, whose end
//! overlaps the start of a given suffix), filtered by a conjunction of rules.
//!
//! ```text
//! prefix "st", suffix "play", filter [5-letters]
//!   "story" ─ prefix_overlap 2, suffix_overlap 0 ─▶ rejected
//!   "stop"  ─ length 4                          ─▶ rejected
//!   "strap" ─ prefix_overlap 2, suffix_overlap 1 ─▶ score 3
//! ```

use super::overlap::{prefix_overlap_folded, suffix_overlap_folded};
use crate::error::{Error, Result};
use crate::lexicon::canonical;
use crate::{Lexicon, MatchQuery, WordMatch};

/// Words matching `query`, ordered by score (descending) then word.
pub(crate) fn match_words(lexicon: &Lexicon, query: &MatchQuery) -> Result<Vec<WordMatch>> {
    let prefix = canonical(&query.prefix).ok_or(Error::EmptyPrefix)?;
    let suffix = query.suffix.as_deref().and_then(canonical);

    let mut found: Vec<WordMatch> = lexicon
        .words()
        .iter()
        .filter_map(|word| {
            let head = prefix_overlap_folded(word, &prefix);
            if head == 0 {
                return None;
            }
            let tail = match &suffix {
                Some(suffix) => match suffix_overlap_folded(word, suffix) {
                    0 => return None,
                    n => n,
                },
                None => 0,
            };
            query.filter.accepts(lexicon, word).then(|| WordMatch { word: word.clone(), score: head + tail })
        })
        .collect();

    found.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.word.cmp(&b.word)));
    Ok(found)
}
