//! Property-based tests for the suggestion engine
//!
//! Tests invariants:
//! - Bigram counts add up to the token length minus one
//! - Scores are finite and never negative
//! - Rankings are bounded, ordered and reproducible
//! - Detection is an exact set difference
//! - Normalization is a fixed point

use std::collections::BTreeSet;

use bigram_speller::{
    normalize_token, vectorize, CheckerOptions, FoldScorer, MisspellingDetector, Normalizer, Ranker, Scorer,
    SpellChecker, Tokenization, WordSet,
};
use proptest::prelude::*;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

// reaches past the length where the plain fold overflows f64
fn word() -> impl Strategy<Value = String> {
    "[a-z]{0,30}"
}

fn dictionary() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set("[a-e]{1,6}", 0..40)
}

proptest! {

    #[test]
    fn bigram_counts_sum_to_length_minus_one(token in "\\PC{0,24}") {
        let length = token.chars().count();
        let vector = vectorize(&token);
        if length < 2 {
            prop_assert!(vector.is_empty());
        } else {
            prop_assert_eq!(vector.total() as usize, length - 1);
        }
    }

    #[test]
    fn fold_scores_are_non_negative(query in word(), candidate in word()) {
        let scorer = FoldScorer;
        let vector = vectorize(&query);
        let score = scorer.similarity(&vector, scorer.magnitude(&vector), &candidate);
        prop_assert!(score.is_finite());
        prop_assert!(score >= 0.0);

        let log_score = scorer.log_similarity(&vector, scorer.log_magnitude(&vector), &candidate);
        prop_assert!(!log_score.is_nan());
        prop_assert!(log_score < f64::INFINITY);
    }

    #[test]
    fn long_queries_prefer_shared_bigrams(stem in "[a-m]{13,30}", tail in "[n-z]{2,6}") {
        // the stem shares every bigram with the query, the tail none
        let query = format!("{}{}", stem, "z");
        let dictionary: WordSet = [stem.clone(), tail.clone()].into_iter().collect();
        let ranked = Ranker::new(&dictionary, &FoldScorer).rank_scored(&query, 2);

        prop_assert_eq!(&ranked[0].0, &stem);
        prop_assert!(ranked[0].1.is_finite());
    }

    #[test]
    fn rankings_are_bounded_and_ordered(words in dictionary(), query in "[a-e]{2,8}", n in 0usize..50) {
        let dictionary = WordSet::from(words);
        let ranker = Ranker::new(&dictionary, &FoldScorer);
        let ranked = ranker.rank_scored(&query, n);

        prop_assert_eq!(ranked.len(), n.min(dictionary.len()));
        for pair in ranked.windows(2) {
            let ((w, s), (v, t)) = (&pair[0], &pair[1]);
            prop_assert!(s >= t);
            if s == t {
                prop_assert!(w < v);
            }
        }
    }

    #[test]
    fn detection_is_a_set_difference(
        tokens in prop::collection::btree_set("[a-c]{2,4}", 0..30),
        known in prop::collection::btree_set("[a-c]{2,4}", 0..30),
        stop in prop::collection::btree_set("[a-c]{2,4}", 0..30),
    ) {
        let dictionary = WordSet::from(known.clone());
        let stop_words = WordSet::from(stop.clone());
        let flagged = MisspellingDetector::new(&dictionary, &stop_words).detect(&tokens);

        for token in &tokens {
            let expected = !known.contains(token) && !stop.contains(token);
            prop_assert_eq!(flagged.contains(token), expected);
        }
        prop_assert!(flagged.is_subset(&tokens));
    }

    #[test]
    fn normalization_is_a_fixed_point(lines in prop::collection::vec("[a-zA-Z0-9 .,;:!?'\"()-]{0,16}", 0..12)) {
        for tokenization in [Tokenization::Line, Tokenization::Whitespace] {
            let normalizer = Normalizer::new(tokenization);
            let once = normalizer.normalize_lines(&lines);
            let twice = normalizer.normalize_lines(&once);
            prop_assert_eq!(&once, &twice);
        }
        for line in &lines {
            let token = normalize_token(line);
            prop_assert_eq!(normalize_token(&token), token);
        }
    }
}

#[test]
fn dictionary_order_does_not_change_reports() {

    let mut rng = StdRng::seed_from_u64(7);
    let mut words: Vec<String> = ["hello", "help", "world", "word", "held", "yellow", "hollow", "whorl"]
        .iter()
        .map(|w| w.to_string())
        .collect();
    let text = "helo\nwrld\nhollo\n";

    let mut reports = Vec::new();
    for _ in 0..5 {
        words.shuffle(&mut rng);
        let checker = SpellChecker::with_options(words.join("\n").as_bytes(), "".as_bytes(), CheckerOptions::default()).unwrap();
        let mut out: Vec<u8> = Vec::new();
        checker.analyze(text.as_bytes(), &mut out, 3).unwrap();
        reports.push(String::from_utf8(out).unwrap());
    }

    assert_eq!(reports[0].lines().count(), 3);
    assert!(reports.iter().all(|report| report == &reports[0]));
}
