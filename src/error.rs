//! Error types for wordcycle.
//!
//! Every fallible operation in the crate returns [`Result`], whose error side is
//! the [`Error`] enum below. The search core only ever raises input errors
//! (wrong rule count, empty start word). I/O and empty-corpus errors come from
//! the lexicon loader and never from a search.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Number of rule tokens a cycle search requires.
pub const RULE_COUNT: usize = 3;

#[derive(Error, Debug)]
pub enum Error {
    /// A cycle search was given the wrong number of rule tokens.
    #[error("expected exactly {expected} rules, got {actual}")]
    RuleCount { expected: usize, actual: usize },

    /// A rule token matched no known pattern (strict parsing only).
    #[error("unknown rule '{0}'")]
    UnknownRule(String),

    /// Unrecognised part-of-speech name.
    #[error("unknown part of speech '{0}' (expected noun, verb, adjective or adverb)")]
    UnknownCategory(String),

    #[error("starting word must not be empty")]
    EmptyStartWord,

    #[error("prefix must not be empty")]
    EmptyPrefix,

    /// The word list was readable but held no words.
    #[error("word list {} contains no words", path.display())]
    EmptyLexicon { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn rule_count(actual: usize) -> Self {
        Error::RuleCount { expected: RULE_COUNT, actual }
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }

    /// True for errors caused by caller input rather than the environment.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Error::Io { .. } | Error::EmptyLexicon { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
