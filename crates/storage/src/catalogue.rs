use std::io::Read;

use anyhow::{anyhow, Context, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use shared::domain::Chapter;

const NUMBER_COLUMN: usize = 0;
const NAME_COLUMN: usize = 1;
const VERSES_COLUMN: usize = 3;
const WORDS_COLUMN: usize = 4;

/// Parses a chapter catalogue export.
///
/// The first row is a header. Columns are positional: number, name, a column
/// this parser does not read, verse count, word count. Extra trailing columns
/// are ignored.
pub fn parse_chapter_csv<R: Read>(reader: R) -> Result<Vec<Chapter>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut chapters = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        // header occupies line 1
        let line = index + 2;
        let record = record.with_context(|| format!("failed to read catalogue line {line}"))?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        chapters.push(chapter_from_record(&record, line)?);
    }

    Ok(chapters)
}

fn chapter_from_record(record: &StringRecord, line: usize) -> Result<Chapter> {
    let number: i64 = parse_column(record, NUMBER_COLUMN, "number", line)?;
    if number < 1 {
        return Err(anyhow!(
            "catalogue line {line}: chapter number must be positive, got {number}"
        ));
    }

    let name = record
        .get(NAME_COLUMN)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| anyhow!("catalogue line {line}: missing chapter name"))?;

    let verses: u32 = parse_column(record, VERSES_COLUMN, "verses", line)?;
    if verses == 0 {
        return Err(anyhow!(
            "catalogue line {line}: chapter {number} has no verses"
        ));
    }
    let words: u32 = parse_column(record, WORDS_COLUMN, "words", line)?;

    Ok(Chapter::new(number, name, verses, words))
}

fn parse_column<T>(record: &StringRecord, column: usize, label: &str, line: usize) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = record
        .get(column)
        .ok_or_else(|| anyhow!("catalogue line {line}: missing {label} column"))?;
    raw.parse::<T>()
        .with_context(|| format!("catalogue line {line}: invalid {label} value '{raw}'"))
}
