use anyhow::{Context, Result};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Row, Sqlite,
};
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};
use tracing::info;

use shared::domain::{Chapter, ChapterNumber};

mod catalogue;

pub use catalogue::parse_chapter_csv;

const UPSERT_CHAPTER_SQL: &str = "INSERT INTO chapters (number, name, verses, words) VALUES (?, ?, ?, ?)
     ON CONFLICT(number) DO UPDATE SET
        name = excluded.name,
        verses = excluded.verses,
        words = excluded.words,
        imported_at = CURRENT_TIMESTAMP";

#[derive(Clone)]
pub struct Storage {
    pool: Pool<Sqlite>,
}

impl Storage {
    pub async fn new(database_url: &str) -> Result<Self> {
        ensure_sqlite_parent_dir_exists(database_url)?;

        let connect_options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(connect_options)
            .await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }

    pub async fn health_check(&self) -> Result<()> {
        let _: i64 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .context("sqlite ping failed")?;
        Ok(())
    }

    pub async fn upsert_chapter(&self, chapter: &Chapter) -> Result<()> {
        sqlx::query(UPSERT_CHAPTER_SQL)
            .bind(chapter.number.0)
            .bind(&chapter.name)
            .bind(i64::from(chapter.verses))
            .bind(i64::from(chapter.words))
            .execute(&self.pool)
            .await
            .with_context(|| format!("failed to upsert chapter {}", chapter.number.0))?;
        Ok(())
    }

    /// Upserts every chapter in one transaction. Either all rows land or none do.
    pub async fn import_chapters(&self, chapters: &[Chapter]) -> Result<usize> {
        let mut tx = self.pool.begin().await?;
        for chapter in chapters {
            sqlx::query(UPSERT_CHAPTER_SQL)
                .bind(chapter.number.0)
                .bind(&chapter.name)
                .bind(i64::from(chapter.verses))
                .bind(i64::from(chapter.words))
                .execute(&mut *tx)
                .await
                .with_context(|| format!("failed to import chapter {}", chapter.number.0))?;
        }
        tx.commit().await?;
        Ok(chapters.len())
    }

    pub async fn import_chapters_csv(&self, path: &Path) -> Result<usize> {
        let file = fs::File::open(path)
            .with_context(|| format!("failed to open catalogue '{}'", path.display()))?;
        let chapters = parse_chapter_csv(file)
            .with_context(|| format!("failed to parse catalogue '{}'", path.display()))?;
        let imported = self.import_chapters(&chapters).await?;
        info!(path = %path.display(), imported, "imported chapter catalogue");
        Ok(imported)
    }

    pub async fn list_chapters(&self) -> Result<Vec<Chapter>> {
        let rows = sqlx::query("SELECT number, name, verses, words FROM chapters ORDER BY number")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(|row| -> Result<Chapter> {
                let number: i64 = row.try_get("number")?;
                let verses: i64 = row.try_get("verses")?;
                let words: i64 = row.try_get("words")?;
                Ok(Chapter {
                    number: ChapterNumber(number),
                    name: row.try_get("name")?,
                    verses: u32::try_from(verses)
                        .with_context(|| format!("chapter {number} verse count out of range"))?,
                    words: u32::try_from(words)
                        .with_context(|| format!("chapter {number} word count out of range"))?,
                })
            })
            .collect()
    }

    pub async fn chapter_count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM chapters")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

fn ensure_sqlite_parent_dir_exists(database_url: &str) -> Result<()> {
    let Some(path) = sqlite_path(database_url) else {
        return Ok(());
    };

    let Some(parent) = path.parent() else {
        return Ok(());
    };

    fs::create_dir_all(parent).with_context(|| {
        format!(
            "failed to create parent directory '{}' for database url '{database_url}'",
            parent.display()
        )
    })?;

    Ok(())
}

fn sqlite_path(database_url: &str) -> Option<PathBuf> {
    if database_url == "sqlite::memory:" || !database_url.starts_with("sqlite:") {
        return None;
    }

    let path = database_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:")
        .split('?')
        .next()
        .unwrap_or_default();

    if path.is_empty() {
        return None;
    }

    Some(Path::new(path).to_path_buf())
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
