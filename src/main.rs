use std::error::Error;
use std::process;

use bigram_speller::Pipeline;

fn main() {

    if let Err(e) = Pipeline::run() {
        eprintln!("Error: {}", e);
        if let Some(cause) = e.source() {
            eprintln!("caused by: {}", cause);
        }
        process::exit(1);
    }
}
