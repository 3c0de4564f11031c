use clap::ValueEnum;
use serde_json::Value;
use std::{fmt::Display, path::{Path, PathBuf}};

use crate::checker::CheckerOptions;
use crate::error::{Result, SpellError};
use crate::normalizer::Tokenization;
use crate::report::ReportFormat;
use crate::similarity::Scoring;

pub const DEFAULT_SUGGESTIONS: i64 = 5;

#[derive(Clone, Debug)]
pub struct Settings {
    pub dictionary: PathBuf,
    pub stop_words: PathBuf,
    pub text: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub suggestions: i64,
    pub options: CheckerOptions,
}

impl Display for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let or_std = |p: &Option<PathBuf>, std: &str| match p {
            Some(p) => p.display().to_string(),
            None => std.to_string(),
        };
        write!(f, "using settings:
        dictionary: {}
        stop_words: {}
        text: {}
        output: {}
        suggestions: {}
        tokenization: {}
        scoring: {}
        format: {}",
        self.dictionary.display(), self.stop_words.display(), or_std(&self.text, "<stdin>"), or_std(&self.output, "<stdout>"),
        self.suggestions, self.options.tokenization, self.options.scoring, self.options.format
        )
    }
}

/// Values given on the command line; each one wins over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub dictionary: Option<PathBuf>,
    pub stop_words: Option<PathBuf>,
    pub text: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub suggestions: Option<i64>,
    pub tokenization: Option<Tokenization>,
    pub scoring: Option<Scoring>,
    pub format: Option<ReportFormat>,
}

pub struct Config {
    params: Settings
}

impl Config {

    pub fn get_params(&self) -> Settings {
        self.params.clone()
    }

    /// Reads the optional json config file and lays the command line over it.
    pub fn new(config_file: Option<&Path>, overrides: Overrides) -> Result<Config> {
        let json = match config_file {
            Some(path) => files_handling::read_json(path)?,
            None => Value::Object(Default::default()),
        };
        Self::from_json(&json, overrides)
    }

    pub fn from_json(json: &Value, overrides: Overrides) -> Result<Config> {

        if !json.is_object() {
            return Err(SpellError::Config("config file should hold a json object".into()));
        }

        // sources are required, either through json or command line
        let dictionary = overrides.dictionary.or(path_key(json, "dictionary")?)
            .ok_or_else(|| SpellError::Config("dictionary was not supplied".into()))?;
        let stop_words = overrides.stop_words.or(path_key(json, "stop_words")?)
            .ok_or_else(|| SpellError::Config("stop_words was not supplied".into()))?;
        let text = overrides.text.or(path_key(json, "text")?);
        let output = overrides.output.or(path_key(json, "output")?);

        // handle default vs input parameters
        let suggestions = match overrides.suggestions {
            Some(suggestions) => suggestions,
            None => match json.get("suggestions") {
                Some(value) => value.as_i64()
                    .ok_or_else(|| SpellError::Config("given suggestions is not an integer".into()))?,
                None => DEFAULT_SUGGESTIONS,
            },
        };
        let tokenization = overrides.tokenization.or(enum_key(json, "tokenization")?).unwrap_or_default();
        let scoring = overrides.scoring.or(enum_key(json, "scoring")?).unwrap_or_default();
        let format = overrides.format.or(enum_key(json, "format")?).unwrap_or_default();

        let params = Settings {
            dictionary,
            stop_words,
            text,
            output,
            suggestions,
            options: CheckerOptions { tokenization, scoring, format },
        };

        Ok(Self { params })
    }
}

fn str_key<'a>(json: &'a Value, key: &str) -> Result<Option<&'a str>> {
    match json.get(key) {
        Some(value) => value.as_str()
            .map(Some)
            .ok_or_else(|| SpellError::Config(format!("given {} is not a string", key))),
        None => Ok(None),
    }
}

fn path_key(json: &Value, key: &str) -> Result<Option<PathBuf>> {
    Ok(str_key(json, key)?.map(PathBuf::from))
}

fn enum_key<T: ValueEnum>(json: &Value, key: &str) -> Result<Option<T>> {
    match str_key(json, key)? {
        Some(name) => T::from_str(name, true)
            .map(Some)
            .map_err(|e| SpellError::Config(format!("{}: {}", key, e))),
        None => Ok(None),
    }
}


pub mod files_handling {

    use flate2::read::GzDecoder;
    use serde_json::Value;
    use std::{fs::File, io::{self, BufReader, BufWriter, Read, Write}, path::Path};

    use crate::error::{Result, SpellError};

    /// Opens a line source. Paths ending in `.gz` are decompressed on the fly.
    pub fn open_input(path: &Path) -> Result<Box<dyn Read>> {

        let f = BufReader::new(File::open(path).map_err(SpellError::SourceRead)?);
        let gzipped = path.extension().map_or(false, |ext| ext == "gz");
        if gzipped {
            return Ok(Box::new(GzDecoder::new(f)))
        }
        Ok(Box::new(f))
    }

    /// `None` reads standard input.
    pub fn open_text(path: Option<&Path>) -> Result<Box<dyn Read>> {
        match path {
            Some(path) => open_input(path),
            None => Ok(Box::new(io::stdin())),
        }
    }

    /// `None` writes to standard output.
    pub fn create_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
        match path {
            Some(path) => {
                let f = File::create(path).map_err(SpellError::ReportWrite)?;
                Ok(Box::new(BufWriter::new(f)))
            },
            None => Ok(Box::new(io::stdout())),
        }
    }

    pub fn read_json(path: &Path) -> Result<Value> {
        let f = BufReader::new(File::open(path).map_err(SpellError::SourceRead)?);
        serde_json::from_reader(f)
            .map_err(|e| SpellError::Config(format!("cannot read json file {}: {}", path.display(), e)))
    }
}
