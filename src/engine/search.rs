//! The three-stage cycle search.
//!
//! ```text
//! start ──stage 1──▶ w1 ──stage 2──▶ w2 ──stage 3──▶ w3 ──closing──▶ start
//!        o1 = prefix_overlap(w1, start)
//!                     o2 = prefix_overlap(w2, w1)
//!                                  o3 = prefix_overlap(w3, w2)
//!                                               o4 = suffix_overlap(w3, start)
//! score = o1 + o2 + o3 + o4
//! ```
//!
//! The loops nest in stage order and each stage's candidates are already
//! ranked (see `stages.rs`), so solutions come out in a fixed discovery order.
//! The solution cap is checked after every appended solution; reaching it
//! returns immediately. Without a cap the enumeration is exhaustive.

use std::time::Instant;

use log::{debug, info, trace};

use super::metrics::{SearchMetrics, SearchRun};
use super::stages::{ClosingPool, StagePool};
use crate::error::{Error, Result};
use crate::lexicon::canonical;
use crate::{Lexicon, PredicateSpec, SearchOptions, Solution};

/// A configured cycle search over a borrowed lexicon.
///
/// Usage: create with [`CycleSearch::new`] then call [`run`](Self::run) or
/// [`run_with_metrics`](Self::run_with_metrics).
#[derive(Debug, Clone)]
pub struct CycleSearch<'a> {
    lexicon: &'a Lexicon,
    /// Canonical starting word.
    start: String,
    specs: [PredicateSpec; 3],
    max_solutions: Option<usize>,
    candidate_limit: Option<usize>,
}

impl<'a> CycleSearch<'a> {
    /// Prepare a search from `start` under the three stage `specs`.
    ///
    /// Fails with [`Error::EmptyStartWord`] when `start` is blank: with an
    /// empty start every overlap test would be vacuous.
    pub fn new(lexicon: &'a Lexicon, start: &str, specs: [PredicateSpec; 3], options: &SearchOptions) -> Result<Self> {
        let start = canonical(start).ok_or(Error::EmptyStartWord)?;
        Ok(CycleSearch {
            lexicon,
            start,
            specs,
            max_solutions: options.max_solutions,
            candidate_limit: options.candidate_limit,
        })
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn specs(&self) -> &[PredicateSpec; 3] {
        &self.specs
    }

    fn cap_reached(&self, found: usize) -> bool {
        self.max_solutions.is_some_and(|cap| found >= cap)
    }

    /// Run the search and return solutions with metrics.
    pub fn run_with_metrics(self) -> SearchRun {
        let total_start = Instant::now();
        let mut metrics = SearchMetrics::default();
        let mut solutions = Vec::new();

        if self.max_solutions == Some(0) {
            metrics.cap_reached = true;
            return SearchRun { solutions, metrics };
        }

        let prefilter_start = Instant::now();
        let first = StagePool::new(self.lexicon, &self.specs[0]);
        let second = StagePool::new(self.lexicon, &self.specs[1]);
        let closing = ClosingPool::new(self.lexicon, &self.specs[2], &self.start);
        metrics.prefilter = prefilter_start.elapsed();
        metrics.pool_sizes = [first.len(), second.len(), closing.len()];
        debug!(
            "[prefilter] start=\"{}\" rules=[{}, {}, {}] pools={:?}",
            self.start, self.specs[0], self.specs[1], self.specs[2], metrics.pool_sizes
        );

        let search_start = Instant::now();
        let stage1 = first.linked(&self.start, self.candidate_limit);
        metrics.stage1_candidates = stage1.len();
        debug!("[stage1] {} candidates overlap \"{}\"", stage1.len(), self.start);

        'search: for c1 in &stage1 {
            let stage2 = second.linked(c1.word, self.candidate_limit);
            if stage2.is_empty() {
                continue;
            }
            metrics.stage2_expansions += 1;
            trace!("[stage2] w1=\"{}\" candidates={}", c1.word, stage2.len());

            for c2 in &stage2 {
                metrics.stage3_evaluations += 1;
                for c3 in closing.closing(c2.word, c1.overlap + c2.overlap, self.candidate_limit) {
                    let solution = Solution {
                        words: [self.start.clone(), c1.word.to_string(), c2.word.to_string(), c3.word.to_string()],
                        overlaps: [c1.overlap, c2.overlap, c3.link, c3.close],
                        score: c3.total,
                    };
                    trace!("[solution] {}", solution);
                    solutions.push(solution);

                    if self.cap_reached(solutions.len()) {
                        info!("reached limit of {} solutions", solutions.len());
                        metrics.cap_reached = true;
                        break 'search;
                    }
                }
            }
        }

        metrics.search = search_start.elapsed();
        metrics.total = total_start.elapsed();
        info!(
            "search from \"{}\" found {} solutions ({} stage-1 candidates, {} stage-2 words examined)",
            self.start,
            solutions.len(),
            metrics.stage1_candidates,
            metrics.stage3_evaluations
        );
        SearchRun { solutions, metrics }
    }

    /// Run the search and return solutions in discovery order.
    pub fn run(self) -> Vec<Solution> {
        self.run_with_metrics().solutions
    }
}
