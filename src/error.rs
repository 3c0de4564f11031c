use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpellError {
    /// Dictionary, stop-word or text source failed mid-read (includes invalid UTF-8).
    #[error("input could not be read")]
    SourceRead(#[source] io::Error),

    /// The report sink rejected a write or flush.
    #[error("report could not be written")]
    ReportWrite(#[source] io::Error),

    /// Malformed config file or option value.
    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SpellError>;
