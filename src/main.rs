//! Extract the co-located PDF to a cleaned plain-text file.
//!
//! Takes no arguments: reads `document.pdf` from the working directory and
//! writes `document.txt` next to it, overwriting any previous run. Exits 0
//! on success, 1 on any fatal condition (missing input, unparseable PDF,
//! write failure). No partial output is written on failure.

use std::fs;

use pdf2text::{extractor, normalize, ExtractConfig, Result};

fn run(config: &ExtractConfig) -> Result<usize> {
    let raw = extractor::extract_text(&config.input_path)?;
    let cleaned = normalize::clean(&raw);

    // Single write, after extraction and cleanup have both succeeded
    fs::write(&config.output_path, cleaned.as_bytes())?;

    Ok(cleaned.chars().count())
}

fn main() {
    env_logger::init();

    let config = ExtractConfig::default();

    match run(&config) {
        Ok(count) => {
            println!("Extracted {} characters to {}", count, config.output_path.display());
        },
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        },
    }
}
