//! smart-notes CLI: study notes and a quiz from a text file or stdin.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use smart_notes::pipeline::{NoopObserver, NotesPipeline, NotesSpec, Source};

#[derive(Parser)]
#[command(
    name = "smart-notes",
    version,
    about = "Summarize text into bullets and quiz questions"
)]
struct Cli {
    /// Input file. Reads stdin when omitted or `-`.
    input: Option<PathBuf>,

    /// Treat the input as a video transcript (drops filler and repeats).
    #[arg(long, conflicts_with = "pages_separator")]
    transcript: bool,

    /// Split the input into document pages on this separator, e.g. "\f".
    #[arg(long)]
    pages_separator: Option<String>,

    /// Maximum number of summary bullets.
    #[arg(long)]
    max_bullets: Option<usize>,

    /// Maximum number of quiz questions.
    #[arg(long)]
    questions: Option<usize>,

    /// JSON notes spec overriding the defaults.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let mut spec = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            NotesSpec::from_json(&json)?
        }
        None => NotesSpec::default(),
    };
    if cli.max_bullets.is_some() {
        spec.summary.max_bullets = cli.max_bullets;
    }
    if cli.questions.is_some() {
        spec.quiz.num_questions = cli.questions;
    }

    let pipeline = NotesPipeline::from_spec(&spec)?;
    let input = read_input(cli.input.as_ref())?;

    let source = if cli.transcript {
        Source::transcript(input)
    } else if let Some(sep) = &cli.pages_separator {
        Source::from_pages(input.split(sep.as_str()))
    } else {
        Source::text(input)
    };

    let notes = pipeline.run(&source, &mut NoopObserver)?;
    println!("{}", serde_json::to_string_pretty(&notes)?);
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read {}", p.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}
