mod checker;
mod config;
mod detector;
mod error;
mod normalizer;
mod pipeline;
mod ranker;
mod report;
mod similarity;
mod vectorizer;

pub use checker::{CheckerOptions, Metadata, MetadataSource, SpellChecker, MIN_TOKEN_CHARS};
pub use config::{files_handling, Config, Overrides, Settings};
pub use detector::{MisspellingDetector, WordSet};
pub use error::{Result, SpellError};
pub use normalizer::{normalize_token, read_lines, Normalizer, Tokenization};
pub use pipeline::{init_logging, Pipeline};
pub use ranker::Ranker;
pub use report::{ReportFormat, Reporter};
pub use similarity::{log_square_fold, score_from_log, square_fold, CosineScorer, FoldScorer, Scorer, Scoring};
pub use vectorizer::{vectorize, BigramVector};
