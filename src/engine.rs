//! Overlap scoring and the three-stage cycle search.
//!
//! Nothing in here performs I/O or formats output: the engine borrows a
//! [`Lexicon`](crate::Lexicon), returns data, and leaves presentation to
//! callers.
//!
//! ## How the parts work together
//!
//! ```text
//! rule specs ──┐
//!              │  StagePool::new / ClosingPool::new       (stages.rs)
//! lexicon ─────┴───────────────┬─────────────────────────
//!                              │  words pre-filtered per stage (evaluate.rs)
//!                              v
//!               CycleSearch::run (search.rs)
//!                 stage 1: prefix_overlap(w1, start) > 0
//!                 stage 2: prefix_overlap(w2, w1)    > 0
//!                 stage 3: prefix_overlap(w3, w2)    > 0
//!                          suffix_overlap(w3, start) > 0   (overlap.rs)
//!                 stop when the solution cap is reached
//!                              │
//!                              v
//!                   Vec<Solution> (discovery order)
//!                              │
//!                              v
//!                   rank::sort_by_score (rank.rs)
//! ```
//!
//! Within each stage, candidates are ordered by overlap (descending), then
//! word length (descending), then the word itself (ascending). Discovery order
//! is therefore fully deterministic for a given lexicon, and a capped search
//! returns a prefix of the uncapped result.
//!
//! ## Responsibilities by module
//!
//! - `overlap.rs`: directional boundary overlap between two words.
//! - `evaluate.rs`: single-word predicate evaluation and conjunctive filters.
//! - `stages.rs`: per-stage candidate generation and tie-break ordering.
//! - `search.rs`: the nested enumeration and early termination.
//! - `rank.rs`: final ordering by score for presentation.
//! - `matcher.rs`: single-word prefix/suffix matching outside of cycles.
//! - `metrics.rs`: timing and counters for a run.

#[path = "engine/evaluate.rs"]
mod evaluate;
#[path = "engine/matcher.rs"]
mod matcher;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/overlap.rs"]
mod overlap;
#[path = "engine/rank.rs"]
mod rank;
#[path = "engine/search.rs"]
mod search;
#[path = "engine/stages.rs"]
mod stages;

pub use evaluate::{Filter, matches};
pub(crate) use matcher::match_words;
pub use metrics::{SearchMetrics, SearchRun};
pub use overlap::{prefix_overlap, suffix_overlap};
pub(crate) use rank::{sort_by_score, top};
pub use search::CycleSearch;
pub use stages::{Candidate, stage_candidates};
