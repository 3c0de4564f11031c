use std::fmt::Display;
use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::{Result, SpellError};

const LABEL: &str = "Suggestions for the correction of";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// `Suggestions for the correction of helo: [hello, help]`
    #[default]
    Text,
    /// `{"word":"helo","suggestions":["hello","help"]}`
    Json,
}

impl Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Serialize)]
struct ReportEntry<'a> {
    word: &'a str,
    suggestions: &'a [String],
}

/// Streams one line per misspelled word, flushing after every line so a
/// later failure never loses what was already reported.
pub struct Reporter<W: Write> {
    writer: W,
    format: ReportFormat,
}

impl<W: Write> Reporter<W> {

    pub fn new(writer: W, format: ReportFormat) -> Reporter<W> {
        Self { writer, format }
    }

    pub fn write_entry(&mut self, word: &str, suggestions: &[String]) -> Result<()> {

        let line = match self.format {
            ReportFormat::Text => format!("{} {}: [{}]", LABEL, word, suggestions.join(", ")),
            ReportFormat::Json => serde_json::to_string(&ReportEntry { word, suggestions })
                .map_err(|e| SpellError::ReportWrite(e.into()))?,
        };

        writeln!(self.writer, "{}", line).map_err(SpellError::ReportWrite)?;
        self.writer.flush().map_err(SpellError::ReportWrite)
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
