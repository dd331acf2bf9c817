//! Per-stage candidate generation.
//!
//! A stage takes the previous word of the cycle (the *source*) and returns
//! every lexicon word that satisfies the stage's spec and overlaps the source,
//! ranked by:
//!
//! ```text
//! overlap  desc ─▶ word length desc ─▶ word asc
//! ```
//!
//! The closing stage also requires the candidate to overlap back onto the
//! starting word, and ranks by the running cycle total instead of its own
//! overlap.
//!
//! Spec evaluation does not depend on the source word, so each stage filters
//! the lexicon once up front ([`StagePool`], [`ClosingPool`]) and the nested
//! loops only compute overlaps. The closing overlap onto the start word is
//! likewise fixed per word and is computed once in [`ClosingPool::new`].

use std::cmp::Ordering;

use super::evaluate::matches;
use super::overlap::{prefix_overlap_folded, suffix_overlap_folded};
use crate::{Lexicon, PredicateSpec};

/// A word retained by stage 1 or 2 with its overlap against the source word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub word: &'a str,
    pub overlap: usize,
}

/// A word retained by the closing stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ClosingCandidate<'a> {
    pub word: &'a str,
    /// Overlap with the stage-2 word.
    pub link: usize,
    /// Overlap back onto the starting word.
    pub close: usize,
    /// Cycle score: earlier overlaps plus `link` and `close`.
    pub total: usize,
}

/// Shared tie-break: higher score first, then longer word, then alphabetical.
fn tie_break(score_a: usize, a: &str, score_b: usize, b: &str) -> Ordering {
    score_b.cmp(&score_a).then_with(|| b.chars().count().cmp(&a.chars().count())).then_with(|| a.cmp(b))
}

fn truncate<T>(mut v: Vec<T>, limit: Option<usize>) -> Vec<T> {
    if let Some(limit) = limit {
        v.truncate(limit);
    }
    v
}

/// Lexicon words satisfying one stage's spec.
#[derive(Debug, Clone)]
pub(crate) struct StagePool<'a> {
    words: Vec<&'a str>,
}

impl<'a> StagePool<'a> {
    pub fn new(lexicon: &'a Lexicon, spec: &PredicateSpec) -> Self {
        let words = lexicon.words().iter().map(String::as_str).filter(|w| matches(lexicon, w, spec)).collect();
        StagePool { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Ranked words whose start overlaps the end of `source`.
    pub fn linked(&self, source: &str, limit: Option<usize>) -> Vec<Candidate<'a>> {
        let mut found: Vec<Candidate<'a>> = self
            .words
            .iter()
            .filter_map(|&word| {
                let overlap = prefix_overlap_folded(word, source);
                (overlap > 0).then_some(Candidate { word, overlap })
            })
            .collect();
        found.sort_by(|a, b| tie_break(a.overlap, a.word, b.overlap, b.word));
        truncate(found, limit)
    }
}

/// Lexicon words satisfying the closing stage's spec that also overlap back
/// onto the starting word, each with that closing overlap.
#[derive(Debug, Clone)]
pub(crate) struct ClosingPool<'a> {
    words: Vec<(&'a str, usize)>,
}

impl<'a> ClosingPool<'a> {
    pub fn new(lexicon: &'a Lexicon, spec: &PredicateSpec, start: &str) -> Self {
        let words = lexicon
            .words()
            .iter()
            .map(String::as_str)
            .filter(|w| matches(lexicon, w, spec))
            .filter_map(|w| {
                let close = suffix_overlap_folded(w, start);
                (close > 0).then_some((w, close))
            })
            .collect();
        ClosingPool { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Ranked closing words for stage-2 word `source`. `base` is the overlap
    /// accumulated by the first two edges.
    pub fn closing(&self, source: &str, base: usize, limit: Option<usize>) -> Vec<ClosingCandidate<'a>> {
        let mut found: Vec<ClosingCandidate<'a>> = self
            .words
            .iter()
            .filter_map(|&(word, close)| {
                let link = prefix_overlap_folded(word, source);
                (link > 0).then_some(ClosingCandidate { word, link, close, total: base + link + close })
            })
            .collect();
        found.sort_by(|a, b| tie_break(a.total, a.word, b.total, b.word));
        truncate(found, limit)
    }
}

/// Ranked candidates for one stage: lexicon words satisfying `spec` whose
/// start overlaps the end of `source`.
///
/// `source` must be canonical (lower-case). `limit` keeps only the top
/// entries; `None` keeps all of them.
pub fn stage_candidates<'a>(
    lexicon: &'a Lexicon,
    source: &str,
    spec: &PredicateSpec,
    limit: Option<usize>,
) -> Vec<Candidate<'a>> {
    StagePool::new(lexicon, spec).linked(source, limit)
}
