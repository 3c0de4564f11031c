use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use bigram_speller::{
    files_handling, init_logging, read_lines, Normalizer, Ranker, Result, Scoring, SpellError, Tokenization, WordSet,
    MIN_TOKEN_CHARS,
};


// diagnostic for the scoring heuristic: prints the K closest dictionary
// words, with the natural log of their scores, to every word of an input file.
// treated as binary executable so it can be ran independently from the checker
// example: ... closest -d Input/dictionary.txt -w Input/typos.txt -k 10 --scoring cosine

#[derive(Parser, Debug)]
#[command(name = "closest", about = "Prints the closest dictionary words and their scores")]
struct Args {
    /// Dictionary, one word per line (.gz accepted)
    #[arg(short, long)]
    dictionary: PathBuf,

    /// Words to look up, one per line
    #[arg(short, long)]
    words: PathBuf,

    #[arg(short, default_value_t = 10)]
    k: usize,

    #[arg(long, value_enum, default_value_t = Scoring::Fold)]
    scoring: Scoring,

    #[arg(long, value_enum, default_value_t = Tokenization::Line)]
    tokenization: Tokenization,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {

    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {

    let normalizer = Normalizer::new(args.tokenization);
    let dictionary = WordSet::from(normalizer.read_set(files_handling::open_input(&args.dictionary)?)?);
    let lines = read_lines(files_handling::open_input(&args.words)?)?;

    let scorer = args.scoring.scorer();
    let ranker = Ranker::new(&dictionary, scorer.as_ref());

    let stdout = io::stdout();
    write_closest(stdout.lock(), &ranker, &lookups(&normalizer, &lines), args.k)
}

// tokens worth a lookup; shorter ones are never scored
fn lookups(normalizer: &Normalizer, lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .flat_map(|line| normalizer.tokens(line))
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .collect()
}

fn write_closest<W: Write>(mut out: W, ranker: &Ranker, tokens: &[String], k: usize) -> Result<()> {

    // finding the k most similar words to each of the input tokens
    for token in tokens {
        writeln!(out, "searching {} most similar words to {}", k, token).map_err(SpellError::ReportWrite)?;
        for (i, (similar_token, log_score)) in ranker.rank_scored(token, k).iter().enumerate() {
            writeln!(out, "{} : {} ? {} = {}", i, token, similar_token, log_score).map_err(SpellError::ReportWrite)?;
        }
        writeln!(out).map_err(SpellError::ReportWrite)?;
    }

    out.flush().map_err(SpellError::ReportWrite)
}
