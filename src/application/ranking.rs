//! Deterministic ordering of scored candidates.

use std::cmp::Ordering;

use crate::domain::candidate::Candidate;

/// Orders candidates by composite score, best first.
///
/// Ties are broken by base symbol ascending, so equal inputs always produce
/// the same order.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankSelector;

impl RankSelector {
    /// Full ordering of the candidates.
    #[must_use]
    pub fn rank(candidates: impl IntoIterator<Item = Candidate>) -> Vec<Candidate> {
        let mut ranked: Vec<Candidate> = candidates.into_iter().collect();
        ranked.sort_by(Self::compare);
        ranked
    }

    /// The first `k` candidates of [`rank`](Self::rank).
    ///
    /// `k = 0` yields nothing; `k` beyond the count yields every candidate.
    #[must_use]
    pub fn select_top(candidates: impl IntoIterator<Item = Candidate>, k: usize) -> Vec<Candidate> {
        let mut ranked = Self::rank(candidates);
        ranked.truncate(k);
        ranked
    }

    fn compare(a: &Candidate, b: &Candidate) -> Ordering {
        b.composite
            .total_cmp(&a.composite)
            .then_with(|| a.symbol.cmp(&b.symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::candidate;

    fn symbols(ranked: &[Candidate]) -> Vec<&str> {
        ranked.iter().map(|c| c.symbol.as_str()).collect()
    }

    #[test]
    fn orders_by_score_then_symbol() {
        let ranked = RankSelector::rank(vec![
            candidate("CCC", 1.0),
            candidate("BBB", 2.0),
            candidate("AAB", 1.0),
            candidate("AAA", 2.0),
        ]);

        assert_eq!(symbols(&ranked), vec!["AAA", "BBB", "AAB", "CCC"]);
    }

    #[test]
    fn select_top_bounds() {
        let all = vec![
            candidate("AAA", 3.0),
            candidate("BBB", 2.0),
            candidate("CCC", 1.0),
        ];

        assert!(RankSelector::select_top(all.clone(), 0).is_empty());
        assert_eq!(symbols(&RankSelector::select_top(all.clone(), 2)), vec!["AAA", "BBB"]);
        assert_eq!(RankSelector::select_top(all, 10).len(), 3);
    }

    #[test]
    fn select_top_of_nothing() {
        assert!(RankSelector::select_top(Vec::new(), 3).is_empty());
    }

    #[test]
    fn result_is_sorted_for_any_input_order() {
        let scores = [0.4, 2.5, 2.5, 0.0, 9.1, 3.3, 2.5];
        let input: Vec<_> = scores
            .iter()
            .enumerate()
            .map(|(i, s)| candidate(&format!("S{i}"), *s))
            .collect();

        let top = RankSelector::select_top(input, 5);
        assert_eq!(top.len(), 5);
        for pair in top.windows(2) {
            assert!(
                pair[0].composite > pair[1].composite
                    || (pair[0].composite == pair[1].composite && pair[0].symbol < pair[1].symbol)
            );
        }
    }
}
