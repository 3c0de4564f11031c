use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use clap::{ArgAction, Args, Parser, Subcommand};
use env_logger::Builder;
use log::{info, LevelFilter};

use crate::checker::{MetadataSource, SpellChecker};
use crate::config::{files_handling, Config, Overrides, Settings};
use crate::error::{Result, SpellError};
use crate::normalizer::Tokenization;
use crate::report::ReportFormat;
use crate::similarity::Scoring;

#[derive(Parser, Debug)]
#[command(name = "bigram-speller", version, about = "Flags unknown words and suggests dictionary words by bigram similarity")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report misspelled words with their suggestions
    Check {
        #[command(flatten)]
        sources: SourceArgs,

        /// Report file, standard output when absent
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Suggestions per misspelled word; zero or less gives empty lists
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        suggestions: Option<i64>,

        #[arg(long, value_enum)]
        format: Option<ReportFormat>,
    },
    /// Print character, word and mistake counts of the text as json
    Metadata {
        #[command(flatten)]
        sources: SourceArgs,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Json config file; command line flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Dictionary, one word per line (.gz accepted)
    #[arg(short, long)]
    pub dictionary: Option<PathBuf>,

    /// Stop words, one word per line (.gz accepted)
    #[arg(short, long)]
    pub stop_words: Option<PathBuf>,

    /// Text to check, standard input when absent
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub tokenization: Option<Tokenization>,

    #[arg(long, value_enum)]
    pub scoring: Option<Scoring>,
}

/// Sets up stderr logging; `RUST_LOG` still refines the level per module.
pub fn init_logging(verbosity: u8) {

    let log_level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    Builder::new()
        .filter_level(log_level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

pub struct Pipeline {}

impl Pipeline {

    // runs the main procedure of 3 steps -
    // -> configuration of arguments
    // -> loading dictionary and stop words
    // -> analysis of the text

    pub fn run() -> Result<()> {

        let cli = Cli::parse();
        init_logging(cli.verbose);
        Self::execute(cli.command)
    }

    pub fn execute(command: Command) -> Result<()> {

        match command {
            Command::Check { sources, output, suggestions, format } => {
                let overrides = Overrides { output, suggestions, format, ..sources.overrides() };
                let params = Self::settings(&sources, overrides)?;

                let timer = Instant::now();
                let checker = Self::load(&params)?;
                info!("loaded sources, took {} ms ...", timer.elapsed().as_millis());

                let timer = Instant::now();
                let text = files_handling::open_text(params.text.as_deref())?;
                let misspelled = checker.misspelled(text)?;

                // only now touch the report file, a failed read keeps the old one
                let sink = files_handling::create_output(params.output.as_deref())?;
                let reported = checker.report(&misspelled, sink, params.suggestions)?;
                info!("reported {} words, took {} ms ...", reported, timer.elapsed().as_millis());
            },
            Command::Metadata { sources } => {
                let params = Self::settings(&sources, sources.overrides())?;
                let checker = Self::load(&params)?;

                let text = files_handling::open_text(params.text.as_deref())?;
                let metadata = checker.metadata(text)?;

                let line = serde_json::to_string(&metadata).map_err(|e| SpellError::ReportWrite(e.into()))?;
                let mut out = std::io::stdout();
                writeln!(out, "{}", line).map_err(SpellError::ReportWrite)?;
            },
        }

        Ok(())
    }

    fn settings(sources: &SourceArgs, overrides: Overrides) -> Result<Settings> {
        let params = Config::new(sources.config.as_deref(), overrides)?.get_params();
        info!("{}", params);
        Ok(params)
    }

    fn load(params: &Settings) -> Result<SpellChecker> {
        let dictionary = files_handling::open_input(&params.dictionary)?;
        let stop_words = files_handling::open_input(&params.stop_words)?;
        SpellChecker::with_options(dictionary, stop_words, params.options)
    }
}

impl SourceArgs {

    fn overrides(&self) -> Overrides {
        Overrides {
            dictionary: self.dictionary.clone(),
            stop_words: self.stop_words.clone(),
            text: self.text.clone(),
            tokenization: self.tokenization,
            scoring: self.scoring,
            ..Overrides::default()
        }
    }
}
