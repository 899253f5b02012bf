use std::env;
use std::error::Error;
use std::io::{self, Write};

use tracing_subscriber::EnvFilter;

use intertext::{prepare, BuildProgress, PrepConfig};

/// Carriage-return progress line, rewritten per document.
struct ConsoleProgress;

impl BuildProgress for ConsoleProgress {
    fn on_document(&self, processed: usize, total: usize) {
        let mut out = io::stdout();
        let _ = write!(out, "{processed} documents of {total} completed\r");
        let _ = out.flush();
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = match env::args().nth(1) {
        Some(path) => PrepConfig::from_file(path)?,
        None => PrepConfig::default(),
    };

    let summary = prepare(&config, Some(&ConsoleProgress))?;

    println!(
        "\n{} characters from {} documents.",
        summary.total_characters, summary.documents
    );
    Ok(())
}
