use std::cmp::Ordering;

use serde::Serialize;

use crate::{config::CorpusConfig, profile::FrequencyProfile, similarity::similarity};

/// Symmetric N×N similarity scores stored row-major in one allocation.
/// The diagonal stays zero.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    cells: Vec<f64>,
}

impl SimilarityMatrix {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0.0; size * size],
        }
    }

    /// Scores every unordered pair of `profiles`.
    pub fn from_profiles(profiles: &[FrequencyProfile]) -> Self {
        let mut matrix = Self::new(profiles.len());

        for (i, a) in profiles.iter().enumerate() {
            for (j, b) in profiles.iter().enumerate().skip(i + 1) {
                matrix.set(i, j, similarity(a, b));
            }
        }

        matrix
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.cells[self.offset(i, j)]
    }

    fn set(&mut self, i: usize, j: usize, score: f64) {
        let (upper, lower) = (self.offset(i, j), self.offset(j, i));
        self.cells[upper] = score;
        self.cells[lower] = score;
    }

    const fn offset(&self, i: usize, j: usize) -> usize {
        i * self.size + j
    }

    /// Every `(score, i, j)` with `i < j`, in row-major order.
    pub fn pairs(&self) -> impl Iterator<Item = RankedPair> + '_ {
        (0..self.size).flat_map(move |i| {
            ((i + 1)..self.size).map(move |j| RankedPair::new(self.get(i, j), i, j))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedPair {
    pub score: f64,
    pub first: usize,
    pub second: usize,
}

impl RankedPair {
    pub const fn new(score: f64, first: usize, second: usize) -> Self {
        Self {
            score,
            first,
            second,
        }
    }

    /// Descending score, then ascending `(first, second)`.
    fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.first.cmp(&other.first))
            .then_with(|| self.second.cmp(&other.second))
    }
}

pub struct PairwiseRanker {
    top_k: usize,
}

impl PairwiseRanker {
    pub const fn new(top_k: usize) -> Self {
        Self { top_k }
    }

    pub const fn from_config(config: &CorpusConfig) -> Self {
        Self::new(config.top_k)
    }

    pub const fn top_k(&self) -> usize {
        self.top_k
    }

    /// The `top_k` highest scoring pairs of `matrix`, or all of them when
    /// there are fewer.
    pub fn rank(&self, matrix: &SimilarityMatrix) -> Vec<RankedPair> {
        let mut similarities: Vec<_> = matrix.pairs().collect();

        similarities.sort_by(RankedPair::rank_cmp);
        similarities.truncate(self.top_k);

        similarities
    }

    pub fn rank_profiles(
        &self,
        profiles: &[FrequencyProfile],
    ) -> (SimilarityMatrix, Vec<RankedPair>) {
        let matrix = SimilarityMatrix::from_profiles(profiles);
        let pairs = self.rank(&matrix);

        (matrix, pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Profiler;

    fn profiles(texts: &[&str]) -> Vec<FrequencyProfile> {
        let profiler = Profiler::from_config(&CorpusConfig::default());
        texts.iter().map(|text| profiler.profile(text)).collect()
    }

    #[test]
    fn matrix_is_symmetric_with_zero_diagonal() {
        let matrix = SimilarityMatrix::from_profiles(&profiles(&[
            "cat dog",
            "cat cat fish",
            "dog fish bird",
        ]));

        assert_eq!(matrix.size(), 3);
        for i in 0..3 {
            assert!(matrix.get(i, i).abs() < f64::EPSILON);
            for j in 0..3 {
                assert_eq!(matrix.get(i, j).to_bits(), matrix.get(j, i).to_bits());
            }
        }
        // CAT: 0.5 + 2/3
        assert!((matrix.get(0, 1) - (0.5 + 2.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn fewer_pairs_than_k() {
        let ranker = PairwiseRanker::new(10);
        let (_, pairs) = ranker.rank_profiles(&profiles(&[
            "cat dog",
            "cat cat fish",
            "dog fish bird",
        ]));

        assert_eq!(pairs.len(), 3);
        assert!(pairs.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(pairs.iter().all(|pair| pair.first < pair.second));
    }

    #[test]
    fn truncates_to_k_in_descending_order() {
        let texts = [
            "red green blue",
            "red green blue",
            "red green",
            "red",
            "yellow",
            "green blue yellow",
        ];
        let ranker = PairwiseRanker::new(4);
        let (matrix, pairs) = ranker.rank_profiles(&profiles(&texts));

        assert_eq!(matrix.pairs().count(), 15);
        assert_eq!(pairs.len(), 4);
        assert_eq!((pairs[0].first, pairs[0].second), (0, 1));
        assert!((pairs[0].score - 2.0).abs() < 1e-9);
        assert!(pairs.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn ties_break_on_ascending_indices() {
        let ranker = PairwiseRanker::new(10);
        let (_, pairs) = ranker.rank_profiles(&profiles(&["", "", "", ""]));

        let order: Vec<_> = pairs.iter().map(|p| (p.first, p.second)).collect();
        assert_eq!(order, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn zero_scores_from_disjoint_and_empty_profiles_tie() {
        let ranker = PairwiseRanker::new(10);
        let (_, pairs) = ranker.rank_profiles(&profiles(&["apple", "cherry", "", "date fig"]));

        let order: Vec<_> = pairs.iter().map(|p| (p.first, p.second)).collect();
        assert_eq!(order, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        assert!(pairs.iter().all(|pair| pair.score.to_bits() == 0.0_f64.to_bits()));
    }

    #[test]
    fn degenerate_corpora() {
        let ranker = PairwiseRanker::new(10);

        let (matrix, pairs) = ranker.rank_profiles(&[]);
        assert_eq!(matrix.size(), 0);
        assert!(pairs.is_empty());

        let (_, pairs) = ranker.rank_profiles(&profiles(&["cat"]));
        assert!(pairs.is_empty());
    }
}
