use std::collections::BTreeMap;

/// Occurrence counts of the adjacent character pairs of one token.
///
/// Entries are kept ordered by bigram so every fold over the counts
/// visits them in the same order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BigramVector {
    counts: BTreeMap<String, u32>,
}

impl BigramVector {

    pub fn get(&self, bigram: &str) -> Option<u32> {
        self.counts.get(bigram).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(bigram, count)| (bigram.as_str(), *count))
    }

    pub fn counts(&self) -> impl Iterator<Item = u32> + '_ {
        self.counts.values().copied()
    }

    /// Number of distinct bigrams.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, `L - 1` for a token of `L >= 2` characters.
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }
}

/// Builds the bigram vector of `token`.
///
/// Bigrams are taken over chars at positions `0..=L-2`, so a token of `L`
/// chars yields `L - 1` overlapping pairs and tokens shorter than two chars
/// yield an empty vector.
pub fn vectorize(token: &str) -> BigramVector {

    let chars: Vec<char> = token.chars().collect();
    let mut counts: BTreeMap<String, u32> = BTreeMap::new();

    for pair in chars.windows(2) {
        let bigram: String = pair.iter().collect();
        *counts.entry(bigram).or_insert(0) += 1;
    }

    BigramVector { counts }
}
