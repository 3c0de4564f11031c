use log::trace;

use crate::detector::WordSet;
use crate::similarity::Scorer;
use crate::vectorizer::vectorize;

/// Orders dictionary words by closeness to a query token.
pub struct Ranker<'a> {
    dictionary: &'a WordSet,
    scorer: &'a dyn Scorer,
}

impl<'a> Ranker<'a> {

    pub fn new(dictionary: &'a WordSet, scorer: &'a dyn Scorer) -> Ranker<'a> {
        Self { dictionary, scorer }
    }

    /// The `n` best dictionary words with the natural log of their scores,
    /// highest first (`-inf` for a zero score). Equal scores are ordered by
    /// word so the output is reproducible.
    pub fn rank_scored(&self, query: &str, n: usize) -> Vec<(String, f64)> {

        if n == 0 {
            return Vec::new()
        }

        let query_vector = vectorize(query);
        let query_log_magnitude = self.scorer.log_magnitude(&query_vector);

        let mut scored: Vec<(&str, f64)> = self
            .dictionary
            .iter()
            .map(|word| (word, self.scorer.log_similarity(&query_vector, query_log_magnitude, word)))
            .collect();

        // sort by most similar in descending order, ties alphabetically
        scored.sort_by(|(w, s), (v, t)| t.total_cmp(s).then_with(|| w.cmp(v)));
        scored.truncate(n);

        trace!("ranked {} candidates for '{}'", self.dictionary.len(), query);
        scored.into_iter().map(|(word, score)| (word.to_owned(), score)).collect()
    }

    pub fn rank(&self, query: &str, n: usize) -> Vec<String> {
        self.rank_scored(query, n).into_iter().map(|(word, _)| word).collect()
    }
}
