use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use storage::Storage;

#[derive(Parser, Debug)]
struct Cli {
    #[arg(long, default_value = "sqlite://./data/chapters.db")]
    database_url: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a chapter catalogue CSV, replacing rows with matching numbers.
    Import { path: PathBuf },
    List,
    Count,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let cli = Cli::parse();
    let storage = Storage::new(&cli.database_url).await?;

    match cli.command {
        Command::Import { path } => {
            let imported = storage.import_chapters_csv(&path).await?;
            println!("imported {imported} chapters from {}", path.display());
        }
        Command::List => {
            for chapter in storage.list_chapters().await? {
                println!(
                    "{:>3}  {:<24} verses={:<4} words={}",
                    chapter.number.0, chapter.name, chapter.verses, chapter.words
                );
            }
        }
        Command::Count => {
            println!("{}", storage.chapter_count().await?);
        }
    }

    Ok(())
}
