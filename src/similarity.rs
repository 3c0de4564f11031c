use std::collections::BTreeMap;
use std::fmt::Display;

use clap::ValueEnum;
use ndarray::Array1;

use crate::vectorizer::{vectorize, BigramVector};

/// Closeness measure between a query vector and a dictionary word.
///
/// The ranker only ever talks to this trait, so swapping the scoring
/// formula leaves ranking and detection untouched. Scores are handled as
/// natural logarithms: the fold heuristic grows past `f64::MAX` for tokens
/// of a dozen or so distinct bigrams, while the log stays finite and keeps
/// the ordering.
pub trait Scorer {

    /// `ln` of the magnitude of `vector` as this scorer defines it,
    /// `-inf` for an empty vector. Computed once per query and handed back
    /// to [`Scorer::log_similarity`] for every candidate.
    fn log_magnitude(&self, vector: &BigramVector) -> f64;

    /// `ln` of the score of `candidate` against the query. `-inf` stands
    /// for a score of zero; never NaN.
    fn log_similarity(&self, query: &BigramVector, query_log_magnitude: f64, candidate: &str) -> f64;

    fn magnitude(&self, vector: &BigramVector) -> f64 {
        self.log_magnitude(vector).exp()
    }

    /// Score in `[0, f64::MAX]`. Prefer [`Scorer::log_similarity`] for
    /// comparisons, scores of long tokens saturate here.
    fn similarity(&self, query: &BigramVector, query_magnitude: f64, candidate: &str) -> f64 {
        score_from_log(self.log_similarity(query, query_magnitude.ln(), candidate))
    }
}

/// Folds `values` left to right from `0` with `acc = acc² + v²`.
///
/// This is not a sum of squares: the running accumulator is squared again
/// at every step, so the result depends on the order of `values`. Overflows
/// to `inf` after about a dozen values; [`log_square_fold`] does not.
pub fn square_fold<I: IntoIterator<Item = u32>>(values: I) -> f64 {
    values.into_iter().fold(0.0, |acc, v| {
        let v = v as f64;
        acc * acc + v * v
    })
}

/// `ln` of [`square_fold`], computed without leaving log space.
/// An empty or all-zero fold gives `-inf`.
pub fn log_square_fold<I: IntoIterator<Item = u32>>(values: I) -> f64 {
    values.into_iter().fold(f64::NEG_INFINITY, |ln_acc, v| {
        let ln_v2 = if v == 0 { f64::NEG_INFINITY } else { 2.0 * (v as f64).ln() };
        log_add(2.0 * ln_acc, ln_v2)
    })
}

/// `ln(exp(a) + exp(b))`.
fn log_add(a: f64, b: f64) -> f64 {
    if a == f64::NEG_INFINITY {
        return b
    }
    if b == f64::NEG_INFINITY {
        return a
    }
    let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
    hi + (lo - hi).exp().ln_1p()
}

/// `numerator / denominator` in log space, `-inf` when the denominator is
/// zero (both vectors empty) or the logs themselves overflowed.
fn log_ratio(ln_numerator: f64, ln_denominator: f64) -> f64 {
    if ln_denominator == f64::NEG_INFINITY {
        return f64::NEG_INFINITY
    }
    let ln_score = ln_numerator - ln_denominator;
    if ln_score.is_nan() { f64::NEG_INFINITY } else { ln_score }
}

/// Back to a plain score, saturating instead of reaching `inf`.
pub fn score_from_log(ln_score: f64) -> f64 {
    ln_score.exp().min(f64::MAX)
}

/// The naive bigram heuristic: magnitudes and the shared-term contribution
/// are both [`square_fold`]s, and only bigrams with the same count in both
/// vectors count as shared.
#[derive(Clone, Copy, Debug, Default)]
pub struct FoldScorer;

impl Scorer for FoldScorer {

    fn log_magnitude(&self, vector: &BigramVector) -> f64 {
        // sqrt
        0.5 * log_square_fold(vector.counts())
    }

    fn log_similarity(&self, query: &BigramVector, query_log_magnitude: f64, candidate: &str) -> f64 {

        let candidate_vector = vectorize(candidate);
        let candidate_log_magnitude = self.log_magnitude(&candidate_vector);

        // (bigram, count) pairs present identically in both vectors
        let ln_shared = log_square_fold(
            query
                .iter()
                .filter(|(bigram, count)| candidate_vector.get(bigram) == Some(*count))
                .map(|(_, count)| count),
        );

        log_ratio(ln_shared, log_add(candidate_log_magnitude, query_log_magnitude))
    }
}

/// Textbook cosine similarity over the union of both vectors' bigrams.
#[derive(Clone, Copy, Debug, Default)]
pub struct CosineScorer;

impl CosineScorer {

    // lay both vectors out on a shared bigram axis
    fn dense_pair(query: &BigramVector, candidate: &BigramVector) -> (Array1<f64>, Array1<f64>) {

        let mut axis: BTreeMap<&str, usize> = BTreeMap::new();
        for (bigram, _) in query.iter().chain(candidate.iter()) {
            let next = axis.len();
            axis.entry(bigram).or_insert(next);
        }

        let mut q: Array1<f64> = Array1::zeros(axis.len());
        let mut c: Array1<f64> = Array1::zeros(axis.len());
        for (bigram, count) in query.iter() {
            q[axis[bigram]] = count as f64;
        }
        for (bigram, count) in candidate.iter() {
            c[axis[bigram]] = count as f64;
        }
        (q, c)
    }
}

impl Scorer for CosineScorer {

    fn log_magnitude(&self, vector: &BigramVector) -> f64 {
        let dense: Array1<f64> = vector.counts().map(|v| v as f64).collect();
        0.5 * dense.dot(&dense).ln()
    }

    fn log_similarity(&self, query: &BigramVector, query_log_magnitude: f64, candidate: &str) -> f64 {

        let candidate_vector = vectorize(candidate);
        let candidate_log_magnitude = self.log_magnitude(&candidate_vector);
        let (q, c) = Self::dense_pair(query, &candidate_vector);

        log_ratio(q.dot(&c).ln(), query_log_magnitude + candidate_log_magnitude)
    }
}

/// Scoring strategy selectable from config or the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Scoring {
    #[default]
    Fold,
    Cosine,
}

impl Scoring {

    pub fn scorer(self) -> Box<dyn Scorer> {
        match self {
            Scoring::Fold => Box::new(FoldScorer),
            Scoring::Cosine => Box::new(CosineScorer),
        }
    }
}

impl Display for Scoring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scoring::Fold => write!(f, "fold"),
            Scoring::Cosine => write!(f, "cosine"),
        }
    }
}
