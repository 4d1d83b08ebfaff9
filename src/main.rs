//! freqrank CLI
//!
//! Summarize text and print text statistics from files or stdin.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use freqrank::{
    Config, Error, FrequencySummarizer, Result, SentenceRanker, StopwordFilter, TextStatistics,
    TextStats,
};
use serde::Serialize;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "freqrank")]
#[command(version)]
#[command(about = "Frequency-based extractive summaries and text statistics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the most frequent tokens
    Summarize {
        /// Input file (stdin when omitted)
        input: Option<PathBuf>,

        /// Number of tokens
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Drop stopwords before counting
        #[arg(long)]
        exclude_stopwords: bool,

        /// Stopword language
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Print the highest-scoring sentences in document order
    Sentences {
        /// Input file (stdin when omitted)
        input: Option<PathBuf>,

        /// Number of sentences
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Print word statistics and stopwords as JSON
    Stats {
        /// Input file (stdin when omitted)
        input: Option<PathBuf>,

        /// Stopword language
        #[arg(short, long)]
        language: Option<String>,
    },
}

#[derive(Serialize)]
struct StatsOutput {
    #[serde(flatten)]
    stats: freqrank::WordStats,
    stopwords: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_path(path)?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Summarize {
            input,
            count,
            exclude_stopwords,
            language,
        } => {
            let mut settings = config.summary.clone();
            if let Some(count) = count {
                settings.count = count;
            }
            if exclude_stopwords {
                settings.exclude_stopwords = true;
            }
            if let Some(language) = language {
                settings.stopword_language = language;
            }
            let text = read_input(input.as_ref())?;
            println!("{}", FrequencySummarizer::with_config(&settings).summarize(&text));
        }
        Commands::Sentences { input, count } => {
            let mut settings = config.sentences.clone();
            if let Some(count) = count {
                settings.num_sentences = count;
            }
            let text = read_input(input.as_ref())?;
            for sentence in SentenceRanker::with_config(settings).summarize(&text).sentences {
                println!("{}", sentence.text);
            }
        }
        Commands::Stats { input, language } => {
            let language = language.unwrap_or(config.stopwords.language);
            let stats = TextStats::new(StopwordFilter::new(&language));
            let text = read_input(input.as_ref())?;
            let output = StatsOutput {
                stats: stats.word_stats(&text),
                stopwords: stats.extract_stopwords(&text),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(Error::FileNotFound(path.clone()));
            }
            Ok(fs::read_to_string(path)?)
        }
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
