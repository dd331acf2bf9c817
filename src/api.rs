use crate::engine::{self, CycleSearch};
use crate::rules::parse_rules;
use crate::{Filter, Lexicon, PredicateSpec, Result, Solution};
use std::fmt;
use std::time::Duration;

/// Options that affect the cycle search.
///
/// The default is an exhaustive search: no solution cap, every stage keeps
/// all of its candidates, and unknown rule tokens fall back to
/// [`PredicateSpec::Unconstrained`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Stop as soon as this many solutions have been found.
    pub max_solutions: Option<usize>,
    /// Keep only the top K candidates per stage. Faster, but may miss cycles.
    pub candidate_limit: Option<usize>,
    /// Reject unknown rule tokens with [`Error::UnknownRule`](crate::Error::UnknownRule).
    pub strict_rules: bool,
}

impl SearchOptions {
    /// Default options with a solution cap of `n`.
    pub fn capped(n: usize) -> Self {
        SearchOptions { max_solutions: Some(n), ..Self::default() }
    }
}

/// Result from [`search`] and [`search_with`].
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Canonical starting word.
    pub start: String,
    /// The parsed stage rules.
    pub rules: [PredicateSpec; 3],
    /// Solutions in discovery order.
    pub solutions: Vec<Solution>,
    /// Number of solutions found (not affected by a print limit).
    pub count: usize,
    /// Total elapsed time spent searching.
    pub elapsed: Duration,
}

impl SearchOutcome {
    /// Sort the solutions by score and return the first `limit` of them.
    pub fn ranked(&mut self, limit: Option<usize>) -> &[Solution] {
        rank(&mut self.solutions, limit)
    }
}

/// Additional details returned by [`search_verbose_with`].
///
/// Meant for performance inspection: how much of the search space a run
/// touched and where the time went.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchDetails {
    /// Total elapsed time.
    pub total: Duration,
    /// Time spent filtering the lexicon for each stage.
    pub prefilter: Duration,
    /// Time spent in the nested enumeration.
    pub search: Duration,
    /// Words passing each stage's rule (closing stage: also overlapping the start).
    pub pool_sizes: [usize; 3],
    pub stage1_candidates: usize,
    /// Stage-1 words with at least one stage-2 candidate.
    pub stage2_expansions: usize,
    /// Stage-2 words for which closing words were looked up.
    pub stage3_evaluations: usize,
    /// Whether the search stopped at the solution cap.
    pub cap_reached: bool,
    pub lexicon_size: usize,
}

/// Result from [`search_verbose_with`].
#[derive(Debug, Clone)]
pub struct SearchOutcomeVerbose {
    pub outcome: SearchOutcome,
    pub details: SearchDetails,
}

/// Search `lexicon` for cycles from `start` with default [`SearchOptions`].
///
/// # Example
/// ```
/// use wordcycle::{Lexicon, search};
///
/// let lexicon = Lexicon::new(["tarot", "rotas"]);
/// let out = search(&lexicon, "star", &["5-letters", "any", "any"]).unwrap();
/// assert_eq!(out.count, out.solutions.len());
/// ```
pub fn search<S: AsRef<str>>(lexicon: &Lexicon, start: &str, rules: &[S]) -> Result<SearchOutcome> {
    search_with(lexicon, start, rules, &SearchOptions::default())
}

/// Search `lexicon` for cycles from `start`, one rule per stage.
///
/// Fails when `rules` does not hold exactly three tokens, when `start` is
/// blank, or (with [`SearchOptions::strict_rules`]) on an unknown token.
/// Finding nothing is not an error.
pub fn search_with<S: AsRef<str>>(
    lexicon: &Lexicon,
    start: &str,
    rules: &[S],
    options: &SearchOptions,
) -> Result<SearchOutcome> {
    Ok(search_verbose_with(lexicon, start, rules, options)?.outcome)
}

/// Like [`search_with`], but also returns counters and timings for the run.
pub fn search_verbose_with<S: AsRef<str>>(
    lexicon: &Lexicon,
    start: &str,
    rules: &[S],
    options: &SearchOptions,
) -> Result<SearchOutcomeVerbose> {
    let specs = parse_rules(rules, options.strict_rules)?;
    search_specs_with(lexicon, start, specs, options)
}

/// Like [`search_verbose_with`], for stage rules that are already parsed.
pub fn search_specs_with(
    lexicon: &Lexicon,
    start: &str,
    specs: [PredicateSpec; 3],
    options: &SearchOptions,
) -> Result<SearchOutcomeVerbose> {
    let search = CycleSearch::new(lexicon, start, specs, options)?;
    let start = search.start().to_string();

    let run = search.run_with_metrics();
    let m = run.metrics;

    let details = SearchDetails {
        total: m.total,
        prefilter: m.prefilter,
        search: m.search,
        pool_sizes: m.pool_sizes,
        stage1_candidates: m.stage1_candidates,
        stage2_expansions: m.stage2_expansions,
        stage3_evaluations: m.stage3_evaluations,
        cap_reached: m.cap_reached,
        lexicon_size: lexicon.len(),
    };
    let outcome =
        SearchOutcome { start, rules: specs, count: run.solutions.len(), solutions: run.solutions, elapsed: m.total };

    Ok(SearchOutcomeVerbose { outcome, details })
}

/// Stable-sort `solutions` by score (descending) and return the first `limit`.
///
/// Equal scores keep their discovery order. The slice itself stays complete,
/// so its length is still the full solution count.
pub fn rank(solutions: &mut [Solution], limit: Option<usize>) -> &[Solution] {
    engine::sort_by_score(solutions);
    engine::top(solutions, limit)
}

/// A single-word query: words continuing `prefix` and, optionally, leading
/// into `suffix`.
#[derive(Debug, Clone, Default)]
pub struct MatchQuery {
    pub prefix: String,
    pub suffix: Option<String>,
    pub filter: Filter,
}

impl MatchQuery {
    pub fn new(prefix: impl Into<String>) -> Self {
        MatchQuery { prefix: prefix.into(), ..Self::default() }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }
}

/// A word returned by [`find_matches`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMatch {
    pub word: String,
    /// Prefix overlap plus suffix overlap (when a suffix was given).
    pub score: usize,
}

impl fmt::Display for WordMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (overlap: {})", self.word, self.score)
    }
}

/// Every lexicon word matching `query`, best first.
///
/// # Example
/// ```
/// use wordcycle::{Lexicon, MatchQuery, find_matches};
///
/// let lexicon = Lexicon::new(["story", "tap", "apple"]);
/// let found = find_matches(&lexicon, &MatchQuery::new("st")).unwrap();
/// assert_eq!(found[0].word, "story");
/// ```
pub fn find_matches(lexicon: &Lexicon, query: &MatchQuery) -> Result<Vec<WordMatch>> {
    engine::match_words(lexicon, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const ANY: [&str; 3] = ["any", "any", "any"];

    fn lexicon() -> Lexicon {
        Lexicon::new(["start", "tarot", "rotas", "tasks", "taste", "stare", "arson"])
    }

    #[test]
    fn search_with_returns_solutions() {
        let out = search_with(&lexicon(), "Star", &ANY, &SearchOptions::default()).unwrap();
        assert_eq!(out.start, "star");
        assert_eq!(out.rules, [PredicateSpec::Unconstrained; 3]);
        assert_eq!(out.count, 13);
        assert_eq!(out.count, out.solutions.len());
        assert!(out.elapsed >= Duration::ZERO);
    }

    #[test]
    fn parsed_specs_search_like_rule_tokens() {
        let tokens = ["5-letters", "xyzzy", "1-vowel"];
        let specs = parse_rules(&tokens, false).unwrap();
        assert_eq!(specs[1], PredicateSpec::Unconstrained);

        let from_specs = search_specs_with(&lexicon(), "star", specs, &SearchOptions::default()).unwrap();
        let from_tokens = search_verbose_with(&lexicon(), "star", &tokens, &SearchOptions::default()).unwrap();
        assert_eq!(from_specs.outcome.rules, from_tokens.outcome.rules);
        assert_eq!(from_specs.outcome.solutions, from_tokens.outcome.solutions);
        assert!(from_specs.outcome.solutions.iter().all(|s| s.words[3] == "tasks"));
    }

    #[test]
    fn search_verbose_includes_metrics() {
        let out = search_verbose_with(&lexicon(), "star", &ANY, &SearchOptions::capped(2)).unwrap();
        assert_eq!(out.outcome.count, 2);
        assert!(out.details.cap_reached);
        assert_eq!(out.details.lexicon_size, 7);
        assert_eq!(out.outcome.elapsed, out.details.total);
        assert!(out.details.search <= out.details.total);
    }

    #[test]
    fn chain_without_closing_overlap_is_not_a_solution() {
        // tart → artsy links (3) but style neither continues artsy nor ends
        // with a prefix of "star"; nothing here closes back onto the start.
        let lexicon = Lexicon::new(["start", "tart", "artsy", "style"]);
        let out = search(&lexicon, "star", &ANY).unwrap();
        assert_eq!(out.count, 0);
        assert!(!out.solutions.iter().any(|s| s.chain() == ["tart", "artsy", "style"]));
    }

    #[test]
    fn empty_lexicon_is_not_an_error() {
        let out = search(&Lexicon::empty(), "star", &ANY).unwrap();
        assert_eq!(out.count, 0);
        assert!(out.solutions.is_empty());
    }

    #[test]
    fn unknown_rule_is_unconstrained_unless_strict() {
        let rules = ["xyzzy", "ANY", " any "];
        let out = search(&lexicon(), "star", &rules).unwrap();
        assert_eq!(out.rules[0], PredicateSpec::Unconstrained);
        assert_eq!(out.count, 13);

        let strict = SearchOptions { strict_rules: true, ..SearchOptions::default() };
        let err = search_with(&lexicon(), "star", &rules, &strict).unwrap_err();
        assert!(matches!(err, Error::UnknownRule(ref t) if t == "xyzzy"));
    }

    #[test]
    fn wrong_rule_count_is_an_input_error() {
        for rules in [&["any", "any"][..], &["any", "any", "any", "any"][..], &[][..]] {
            let err = search(&lexicon(), "star", rules).unwrap_err();
            assert!(matches!(err, Error::RuleCount { expected: 3, .. }), "{rules:?}");
            assert!(err.is_input_error());
        }
    }

    #[test]
    fn ranked_orders_by_score_and_keeps_count() {
        let mut out = search(&lexicon(), "star", &ANY).unwrap();
        let top = out.ranked(Some(3)).to_vec();
        assert_eq!(top.len(), 3);
        assert!(top.windows(2).all(|w| w[0].score >= w[1].score));
        let best = out.solutions.iter().map(|s| s.score).max().unwrap();
        assert_eq!(top[0].score, best);
        assert_eq!(out.solutions.len(), out.count);
    }

    #[test]
    fn find_matches_scores_prefix_and_suffix() {
        let lexicon = Lexicon::new(["story", "stop", "strap", "tap", "apple"]);
        let found = find_matches(&lexicon, &MatchQuery::new("st").with_suffix("play")).unwrap();
        let words: Vec<String> = found.iter().map(ToString::to_string).collect();
        assert_eq!(words, vec!["stop (overlap: 3)", "strap (overlap: 3)", "tap (overlap: 2)"]);
    }
}
