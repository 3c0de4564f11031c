use std::collections::BTreeSet;

/// Immutable set of normalized tokens, used for both the dictionary and
/// the stop words.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordSet {
    words: BTreeSet<String>,
}

impl WordSet {

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl From<BTreeSet<String>> for WordSet {
    fn from(words: BTreeSet<String>) -> Self {
        Self { words }
    }
}

impl<S: Into<String>> FromIterator<S> for WordSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self { words: iter.into_iter().map(Into::into).collect() }
    }
}

/// Flags tokens known to neither the stop words nor the dictionary.
/// Membership is exact; tokens are expected to be normalized already.
pub struct MisspellingDetector<'a> {
    dictionary: &'a WordSet,
    stop_words: &'a WordSet,
}

impl<'a> MisspellingDetector<'a> {

    pub fn new(dictionary: &'a WordSet, stop_words: &'a WordSet) -> MisspellingDetector<'a> {
        Self { dictionary, stop_words }
    }

    pub fn is_misspelled(&self, token: &str) -> bool {
        !self.stop_words.contains(token) && !self.dictionary.contains(token)
    }

    /// Callers drop tokens shorter than two chars before detection.
    pub fn detect(&self, tokens: &BTreeSet<String>) -> BTreeSet<String> {
        tokens
            .iter()
            .filter(|token| self.is_misspelled(token))
            .cloned()
            .collect()
    }
}
