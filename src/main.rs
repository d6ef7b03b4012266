use alice::{AppError, Config, Pipeline, Report};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Word, proper noun and part-of-speech statistics for a text corpus
#[derive(Parser, Debug)]
#[command(name = "alice", version)]
struct Cli {
    /// Corpus to analyze (.txt, .pdf or .epub)
    #[arg(default_value = "alice.txt")]
    path: PathBuf,

    /// Number of most frequent words to report
    #[arg(long)]
    words: Option<usize>,

    /// Number of most frequent proper nouns to report
    #[arg(long)]
    proper_nouns: Option<usize>,

    /// Output format
    #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
    format: String,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    log_level: String,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = Config::default().with_sizes(cli.words, cli.proper_nouns);
    let pipeline = Pipeline::default_english(config.pipeline.clone());

    let report: Report = alice::run(&cli.path, &pipeline, &config)?;

    match cli.format.as_str() {
        "json" => println!("{}", report.to_json()?),
        _ => println!("{}", report),
    }

    Ok(())
}
