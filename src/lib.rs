//! # wordcycle
//!
//! Finds cyclic word chains. Given a starting word and three rules, the
//! search looks for words `w1`, `w2`, `w3` in a [`Lexicon`] such that each
//! satisfies its rule and every edge of the cycle
//! `start → w1 → w2 → w3 → start` shares a non-empty boundary overlap.
//! Cycles are ranked by the sum of their four overlaps.
//!
//! ```
//! use wordcycle::{Lexicon, SearchOptions, search_with};
//!
//! let lexicon = Lexicon::new(["start", "tarot", "rotas", "tasks"]);
//! let outcome = search_with(&lexicon, "star", &["any", "any", "any"], &SearchOptions::default()).unwrap();
//! assert!(outcome.solutions.iter().all(|s| s.score == s.overlaps.iter().sum::<usize>()));
//! ```

#[macro_use]
mod macros;
mod api;
mod engine;
pub mod error;
pub mod lexicon;
pub mod rules;

use std::fmt;

pub use api::{
    MatchQuery, SearchDetails, SearchOptions, SearchOutcome, SearchOutcomeVerbose, WordMatch, find_matches, rank, search,
    search_specs_with, search_verbose_with, search_with,
};
pub use engine::{
    Candidate, CycleSearch, Filter, SearchMetrics, SearchRun, matches, prefix_overlap, stage_candidates, suffix_overlap,
};
pub use error::{Error, Result};
pub use lexicon::{Category, CategorySet, Lexicon};
pub use rules::{parse_rule, parse_rule_list, parse_rule_strict, parse_rules};

// --- Core types --------------------------------------------------------------

/// A single-word filter, produced by [`parse_rule`] from a rule token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredicateSpec {
    /// Exactly `n` characters.
    Length(usize),
    /// Exactly `n` of `a e i o u`.
    Vowels(usize),
    /// Exactly `n` alphabetic non-vowels.
    Consonants(usize),
    /// Tagged with the category in the lexicon.
    PartOfSpeech(Category),
    DoubleLetters,
    NoRepeatedLetters,
    Alternating,
    Alphabetical,
    /// Matches every word. Result of an unrecognised rule token.
    Unconstrained,
}

impl fmt::Display for PredicateSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredicateSpec::Length(n) => write!(f, "{n}-letters"),
            PredicateSpec::Vowels(n) => write!(f, "{n}-vowels"),
            PredicateSpec::Consonants(n) => write!(f, "{n}-consonants"),
            PredicateSpec::PartOfSpeech(c) => write!(f, "{c}"),
            PredicateSpec::DoubleLetters => f.write_str("double-letters"),
            PredicateSpec::NoRepeatedLetters => f.write_str("no-repeats"),
            PredicateSpec::Alternating => f.write_str("alternating"),
            PredicateSpec::Alphabetical => f.write_str("alphabetical"),
            PredicateSpec::Unconstrained => f.write_str("any"),
        }
    }
}

/// One complete cycle `start → w1 → w2 → w3 → start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// `[start, w1, w2, w3]`.
    pub words: [String; 4],
    /// Overlaps of the edges `start→w1`, `w1→w2`, `w2→w3` and the closing `w3→start`.
    pub overlaps: [usize; 4],
    /// Sum of `overlaps`.
    pub score: usize,
}

impl Solution {
    pub fn start(&self) -> &str {
        &self.words[0]
    }

    /// The three words found by the search.
    pub fn chain(&self) -> &[String] {
        &self.words[1..]
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = &self.words;
        write!(f, "{a} → {b} → {c} → {d} (overlap: {})", self.score)
    }
}

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
