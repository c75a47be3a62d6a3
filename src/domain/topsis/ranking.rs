//! Ranking Assembler - Orders alternatives by preference score.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One entry of the final ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    /// 1-based position in the ranking.
    pub rank: usize,
    /// Row index of the alternative in the decision matrix.
    pub alternative_index: usize,
    pub alternative_name: String,
    pub score: f64,
}

/// Builds the ranking from preference scores.
pub struct RankingAssembler;

impl RankingAssembler {
    /// Sorts alternatives by score, highest first.
    ///
    /// Equal scores keep ascending original index, so the output is fully
    /// determined by the input.
    pub fn assemble(scores: &[f64], names: &[String]) -> Vec<RankedAlternative> {
        let mut order: Vec<usize> = (0..scores.len()).collect();
        order.sort_by(|&a, &b| Self::compare(scores, a, b));

        order
            .into_iter()
            .enumerate()
            .map(|(position, index)| RankedAlternative {
                rank: position + 1,
                alternative_index: index,
                alternative_name: names.get(index).cloned().unwrap_or_default(),
                score: scores[index],
            })
            .collect()
    }

    fn compare(scores: &[f64], a: usize, b: usize) -> Ordering {
        scores[b].total_cmp(&scores[a]).then(a.cmp(&b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Alt {}", i)).collect()
    }

    #[test]
    fn orders_by_score_descending() {
        let ranking = RankingAssembler::assemble(&[0.2, 0.9, 0.5], &names(3));

        let order: Vec<usize> = ranking.iter().map(|r| r.alternative_index).collect();
        assert_eq!(order, vec![1, 2, 0]);
        assert_eq!(ranking[0].rank, 1);
        assert_eq!(ranking[0].alternative_name, "Alt 1");
        assert_eq!(ranking[2].rank, 3);
    }

    #[test]
    fn ties_break_by_original_index() {
        let ranking = RankingAssembler::assemble(&[0.5, 0.7, 0.5, 0.7], &names(4));

        let order: Vec<usize> = ranking.iter().map(|r| r.alternative_index).collect();
        assert_eq!(order, vec![1, 3, 0, 2]);
    }

    #[test]
    fn ranks_are_consecutive_from_one() {
        let ranking = RankingAssembler::assemble(&[0.0, 0.0, 0.0], &names(3));

        let ranks: Vec<usize> = ranking.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn empty_scores_give_empty_ranking() {
        assert!(RankingAssembler::assemble(&[], &[]).is_empty());
    }
}
