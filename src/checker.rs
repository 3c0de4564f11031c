use std::collections::BTreeSet;
use std::io::{Read, Write};

use log::{debug, info};
use serde::Serialize;

use crate::detector::{MisspellingDetector, WordSet};
use crate::error::Result;
use crate::normalizer::{read_lines, Normalizer, Tokenization};
use crate::ranker::Ranker;
use crate::report::{ReportFormat, Reporter};
use crate::similarity::{Scorer, Scoring};

/// Tokens shorter than this never reach detection or scoring.
pub const MIN_TOKEN_CHARS: usize = 2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CheckerOptions {
    pub tokenization: Tokenization,
    pub scoring: Scoring,
    pub format: ReportFormat,
}

/// Text statistics for one input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Metadata {
    /// Non-whitespace characters of the raw text.
    pub characters: usize,
    /// Normalized token occurrences, duplicates counted.
    pub words: usize,
    /// Occurrences of tokens that would be reported as misspelled.
    pub mistakes: usize,
}

/// Optional capability, kept apart from the suggestion engine.
pub trait MetadataSource {
    fn metadata<R: Read>(&self, text: R) -> Result<Metadata>;
}

/// Dictionary-driven "did you mean" checker.
///
/// The dictionary and stop words are read once on construction and never
/// change afterwards.
pub struct SpellChecker {
    dictionary: WordSet,
    stop_words: WordSet,
    normalizer: Normalizer,
    scorer: Box<dyn Scorer>,
    format: ReportFormat,
}

impl SpellChecker {

    pub fn new<D: Read, S: Read>(dictionary: D, stop_words: S) -> Result<SpellChecker> {
        Self::with_options(dictionary, stop_words, CheckerOptions::default())
    }

    pub fn with_options<D: Read, S: Read>(dictionary: D, stop_words: S, options: CheckerOptions) -> Result<SpellChecker> {

        let normalizer = Normalizer::new(options.tokenization);
        let dictionary = WordSet::from(normalizer.read_set(dictionary)?);
        let stop_words = WordSet::from(normalizer.read_set(stop_words)?);
        info!("loaded {} dictionary words and {} stop words", dictionary.len(), stop_words.len());

        Ok(Self::from_sets(dictionary, stop_words, options))
    }

    pub fn from_sets(dictionary: WordSet, stop_words: WordSet, options: CheckerOptions) -> SpellChecker {
        Self {
            dictionary,
            stop_words,
            normalizer: Normalizer::new(options.tokenization),
            scorer: options.scoring.scorer(),
            format: options.format,
        }
    }

    pub fn dictionary(&self) -> &WordSet {
        &self.dictionary
    }

    pub fn stop_words(&self) -> &WordSet {
        &self.stop_words
    }

    fn detector(&self) -> MisspellingDetector<'_> {
        MisspellingDetector::new(&self.dictionary, &self.stop_words)
    }

    fn ranker(&self) -> Ranker<'_> {
        Ranker::new(&self.dictionary, self.scorer.as_ref())
    }

    /// Misspelled tokens of `text`, in ascending order.
    pub fn misspelled<R: Read>(&self, text: R) -> Result<BTreeSet<String>> {

        let tokens: BTreeSet<String> = self
            .normalizer
            .read_set(text)?
            .into_iter()
            .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
            .collect();

        Ok(self.detector().detect(&tokens))
    }

    /// Writes one report line per misspelled token of `text` and returns
    /// how many were written. A `suggestions_count` of zero or less gives
    /// empty suggestion lists.
    ///
    /// The whole text is read before the first line is written, so a read
    /// failure leaves `output` untouched.
    pub fn analyze<R: Read, W: Write>(&self, text: R, output: W, suggestions_count: i64) -> Result<usize> {
        let misspelled = self.misspelled(text)?;
        self.report(&misspelled, output, suggestions_count)
    }

    /// Reporting half of [`SpellChecker::analyze`], for callers that only
    /// open the sink once the text has been read.
    pub fn report<W: Write>(&self, misspelled: &BTreeSet<String>, output: W, suggestions_count: i64) -> Result<usize> {

        info!("found {} misspelled tokens", misspelled.len());

        let mut reporter = Reporter::new(output, self.format);
        for word in misspelled {
            let suggestions = self.find_closest_words(word, suggestions_count);
            debug!("{} -> {:?}", word, suggestions);
            reporter.write_entry(word, &suggestions)?;
        }

        Ok(misspelled.len())
    }

    pub fn find_closest_words(&self, word: &str, n: i64) -> Vec<String> {
        self.ranker().rank(word, usize::try_from(n).unwrap_or(0))
    }
}

impl MetadataSource for SpellChecker {

    fn metadata<R: Read>(&self, text: R) -> Result<Metadata> {

        let detector = self.detector();
        let mut metadata = Metadata::default();

        for line in read_lines(text)? {
            metadata.characters += line.chars().filter(|c| !c.is_whitespace()).count();
            for token in self.normalizer.tokens(&line) {
                metadata.words += 1;
                if token.chars().count() >= MIN_TOKEN_CHARS && detector.is_misspelled(&token) {
                    metadata.mistakes += 1;
                }
            }
        }

        Ok(metadata)
    }
}
