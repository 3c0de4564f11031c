use std::collections::BTreeSet;
use std::fmt::Display;
use std::io::{BufRead, BufReader, Read};

use clap::ValueEnum;

use crate::error::{Result, SpellError};

/// How a source line is cut into candidate tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Tokenization {
    /// Every line is one token, whatever it contains.
    #[default]
    Line,
    /// Lines are split on whitespace first.
    Whitespace,
}

impl Display for Tokenization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tokenization::Line => write!(f, "line"),
            Tokenization::Whitespace => write!(f, "whitespace"),
        }
    }
}

/// Lower-cases `raw`, drops ASCII punctuation other than `-` and trims
/// the surrounding whitespace. Applying it twice changes nothing.
pub fn normalize_token(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation() || *c == '-')
        .collect::<String>()
        .trim()
        .to_owned()
}

/// Reads every line of `reader`. Any failure, invalid UTF-8 included,
/// aborts the whole read.
pub fn read_lines<R: Read>(reader: R) -> Result<Vec<String>> {
    BufReader::new(reader)
        .lines()
        .collect::<std::io::Result<Vec<String>>>()
        .map_err(SpellError::SourceRead)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Normalizer {
    tokenization: Tokenization,
}

impl Normalizer {

    pub fn new(tokenization: Tokenization) -> Normalizer {
        Self { tokenization }
    }

    /// Normalized, non-empty tokens of one line, duplicates kept.
    pub fn tokens<'a>(&self, line: &'a str) -> Box<dyn Iterator<Item = String> + 'a> {
        let tokens: Box<dyn Iterator<Item = &'a str> + 'a> = match self.tokenization {
            Tokenization::Line => Box::new(std::iter::once(line)),
            Tokenization::Whitespace => Box::new(line.split_whitespace()),
        };
        Box::new(tokens.map(normalize_token).filter(|token| !token.is_empty()))
    }

    pub fn normalize_lines<I, S>(&self, lines: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for line in lines {
            set.extend(self.tokens(line.as_ref()));
        }
        set
    }

    /// Reads a whole source and returns its normalized token set.
    pub fn read_set<R: Read>(&self, reader: R) -> Result<BTreeSet<String>> {
        let lines = read_lines(reader)?;
        Ok(self.normalize_lines(&lines))
    }
}
