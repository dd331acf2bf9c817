//! Search run metrics.
//!
//! The intended usage is:
//!
//! - `CycleSearch::run` for normal operation.
//! - `CycleSearch::run_with_metrics` when the caller wants to report how much
//!   of the search space a run touched and where the time went.
//!
//! Counters are cheap (plain integer bumps in the loops) and always
//! collected; `run` simply drops them.

use std::time::Duration;

use crate::Solution;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchMetrics {
    /// Total elapsed time for [`CycleSearch::run_with_metrics`](super::CycleSearch::run_with_metrics).
    pub total: Duration,
    /// Time spent filtering the lexicon by each stage's spec.
    pub prefilter: Duration,
    /// Time spent in the nested enumeration.
    pub search: Duration,
    /// Words satisfying each stage's spec; the closing pool counts only
    /// words that also overlap back onto the start.
    pub pool_sizes: [usize; 3],
    /// Stage-1 candidates (words linked to the start).
    pub stage1_candidates: usize,
    /// Stage-1 words that had at least one stage-2 candidate.
    pub stage2_expansions: usize,
    /// Stage-2 words for which closing candidates were computed.
    pub stage3_evaluations: usize,
    /// Whether the run stopped early at the solution cap.
    pub cap_reached: bool,
}

/// Search output bundled with metrics.
#[derive(Debug, Clone)]
pub struct SearchRun {
    /// Solutions in discovery order.
    pub solutions: Vec<Solution>,
    pub metrics: SearchMetrics,
}
