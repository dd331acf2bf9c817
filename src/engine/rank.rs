//! Presentation order for solutions.
//!
//! Discovery order already follows the per-stage tie-breaks; ranking only
//! reorders by total score. The sort is stable, so equal scores keep the
//! order in which the search found them.

use crate::Solution;

pub(crate) fn sort_by_score(solutions: &mut [Solution]) {
    solutions.sort_by(|a, b| b.score.cmp(&a.score));
}

/// The first `limit` solutions, or all of them.
pub(crate) fn top(solutions: &[Solution], limit: Option<usize>) -> &[Solution] {
    match limit {
        Some(limit) => &solutions[..limit.min(solutions.len())],
        None => solutions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solution(w1: &str, score: usize) -> Solution {
        Solution {
            words: ["s".to_string(), w1.to_string(), "x".to_string(), "y".to_string()],
            overlaps: [score, 0, 0, 0],
            score,
        }
    }

    #[test]
    fn sorts_descending_and_keeps_discovery_order_on_ties() {
        let mut solutions = vec![solution("a", 5), solution("b", 7), solution("c", 5), solution("d", 7)];
        sort_by_score(&mut solutions);
        let order: Vec<&str> = solutions.iter().map(|s| s.words[1].as_str()).collect();
        assert_eq!(order, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn top_truncates_without_touching_the_source() {
        let solutions = vec![solution("a", 3), solution("b", 2), solution("c", 1)];
        assert_eq!(top(&solutions, Some(2)).len(), 2);
        assert_eq!(top(&solutions, Some(10)).len(), 3);
        assert_eq!(top(&solutions, None).len(), 3);
        assert_eq!(solutions.len(), 3);
    }
}
