//! Predicate evaluation.
//!
//! [`matches`] decides whether a single word satisfies a [`PredicateSpec`].
//! The match over the spec is exhaustive: adding a variant forces every
//! evaluator arm to be written. Part-of-speech specs consult the lexicon's
//! tag data and are false when none was loaded.

use crate::rules::predicates::{
    count_consonants, count_vowels, has_double_letters, has_repeated_letters, is_alphabetical, is_alternating,
};
use crate::{Lexicon, PredicateSpec};

/// Returns true when `word` satisfies `spec`. `word` must be canonical (lower-case).
pub fn matches(lexicon: &Lexicon, word: &str, spec: &PredicateSpec) -> bool {
    match *spec {
        PredicateSpec::Length(n) => word.chars().count() == n,
        PredicateSpec::Vowels(n) => count_vowels(word) == n,
        PredicateSpec::Consonants(n) => count_consonants(word) == n,
        PredicateSpec::PartOfSpeech(category) => lexicon.in_category(word, category),
        PredicateSpec::DoubleLetters => has_double_letters(word),
        PredicateSpec::NoRepeatedLetters => !has_repeated_letters(word),
        PredicateSpec::Alternating => is_alternating(word),
        PredicateSpec::Alphabetical => is_alphabetical(word),
        PredicateSpec::Unconstrained => true,
    }
}

/// A conjunction of specs. The empty filter accepts every word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    specs: Vec<PredicateSpec>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `spec` to the conjunction.
    pub fn with(mut self, spec: PredicateSpec) -> Self {
        self.specs.push(spec);
        self
    }

    pub fn specs(&self) -> &[PredicateSpec] {
        &self.specs
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn accepts(&self, lexicon: &Lexicon, word: &str) -> bool {
        self.specs.iter().all(|spec| matches(lexicon, word, spec))
    }
}

impl FromIterator<PredicateSpec> for Filter {
    fn from_iter<I: IntoIterator<Item = PredicateSpec>>(iter: I) -> Self {
        Filter { specs: iter.into_iter().collect() }
    }
}
