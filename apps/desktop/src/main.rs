use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use client_core::{ChapterPicker, DispatchError, HttpChapterSource, Stepper, DEFAULT_VERSES};

#[derive(Parser, Debug)]
struct Args {
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    server_url: String,
    /// Raw field value; parsed the same way the desktop field is.
    #[arg(long, default_value_t = DEFAULT_VERSES.to_string(), allow_hyphen_values = true)]
    verse_count: String,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let source = HttpChapterSource::new(&args.server_url)?;
    let mut picker = ChapterPicker::new(Stepper::default());
    picker.stepper.set_text(args.verse_count);

    match picker.generate(&source).await {
        Ok(()) => {}
        Err(DispatchError::Validation(err)) => {
            eprintln!("{err}");
            return Ok(ExitCode::from(2));
        }
        Err(err) => return Err(err.into()),
    }

    let result = picker.result();
    if result.is_error {
        eprintln!("{}", result.text);
        return Ok(ExitCode::FAILURE);
    }
    println!("{}", result.text);
    Ok(ExitCode::SUCCESS)
}
