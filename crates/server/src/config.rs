use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use search::{SearchLimits, DEFAULT_MAX_EXPANSIONS, DEFAULT_MAX_SOLUTIONS, DEFAULT_TOLERANCE};
use server_api::SearchSettings;
use tracing::warn;

const SETTINGS_FILE: &str = "server.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_bind: String,
    pub database_url: String,
    pub catalogue_csv: Option<PathBuf>,
    pub search_tolerance: u32,
    pub search_max_solutions: usize,
    pub search_max_expansions: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "0.0.0.0:5000".into(),
            database_url: "sqlite://./data/chapters.db".into(),
            catalogue_csv: Some(PathBuf::from("./data/quran_chapters.csv")),
            search_tolerance: DEFAULT_TOLERANCE,
            search_max_solutions: DEFAULT_MAX_SOLUTIONS,
            search_max_expansions: DEFAULT_MAX_EXPANSIONS,
        }
    }
}

impl Settings {
    pub fn search_settings(&self) -> SearchSettings {
        SearchSettings {
            tolerance: self.search_tolerance,
            limits: SearchLimits {
                max_solutions: self.search_max_solutions,
                max_expansions: self.search_max_expansions,
                max_depth: None,
            },
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(SETTINGS_FILE) {
        apply_file_settings(&mut settings, &raw);
    }
    apply_env_settings(&mut settings, |key| std::env::var(key).ok());

    settings
}

pub(crate) fn apply_file_settings(settings: &mut Settings, raw: &str) {
    let table = match toml::from_str::<toml::Table>(raw) {
        Ok(table) => table,
        Err(error) => {
            warn!(%error, file = SETTINGS_FILE, "ignoring unparseable settings file");
            return;
        }
    };

    if let Some(v) = table.get("bind_addr").and_then(toml::Value::as_str) {
        settings.server_bind = v.to_string();
    }
    if let Some(v) = table.get("database_url").and_then(toml::Value::as_str) {
        settings.database_url = v.to_string();
    }
    if let Some(v) = table.get("catalogue_csv").and_then(toml::Value::as_str) {
        settings.catalogue_csv = optional_path(v);
    }
    if let Some(v) = table
        .get("search_tolerance")
        .and_then(toml::Value::as_integer)
        .and_then(|v| u32::try_from(v).ok())
    {
        settings.search_tolerance = v;
    }
    if let Some(v) = table
        .get("search_max_solutions")
        .and_then(toml::Value::as_integer)
        .and_then(|v| usize::try_from(v).ok())
    {
        settings.search_max_solutions = v;
    }
    if let Some(v) = table
        .get("search_max_expansions")
        .and_then(toml::Value::as_integer)
        .and_then(|v| usize::try_from(v).ok())
    {
        settings.search_max_expansions = v;
    }
}

pub(crate) fn apply_env_settings(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    // PORT is what hosted platforms hand us; explicit bind addresses win over it.
    if let Some(port) = var("PORT").and_then(|v| v.parse::<u16>().ok()) {
        settings.server_bind = format!("0.0.0.0:{port}");
    }
    if let Some(v) = var("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = var("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Some(v) = var("DATABASE_URL") {
        settings.database_url = v;
    }
    if let Some(v) = var("APP__DATABASE_URL") {
        settings.database_url = v;
    }

    if let Some(v) = var("APP__CATALOGUE_CSV") {
        settings.catalogue_csv = optional_path(&v);
    }

    if let Some(v) = var("APP__SEARCH_TOLERANCE").and_then(|v| v.parse().ok()) {
        settings.search_tolerance = v;
    }
    if let Some(v) = var("APP__SEARCH_MAX_SOLUTIONS").and_then(|v| v.parse().ok()) {
        settings.search_max_solutions = v;
    }
    if let Some(v) = var("APP__SEARCH_MAX_EXPANSIONS").and_then(|v| v.parse().ok()) {
        settings.search_max_expansions = v;
    }
}

fn optional_path(raw: &str) -> Option<PathBuf> {
    let raw = raw.trim();
    (!raw.is_empty()).then(|| PathBuf::from(raw))
}

pub fn prepare_database_url(raw_database_url: &str) -> anyhow::Result<String> {
    let database_url = normalize_database_url(raw_database_url);
    ensure_parent_dir_exists(&database_url)?;
    Ok(database_url)
}

fn normalize_database_url(raw_database_url: &str) -> String {
    let raw_database_url = raw_database_url.trim();

    if raw_database_url.is_empty() {
        return Settings::default().database_url;
    }

    if raw_database_url.starts_with("sqlite::memory:")
        || raw_database_url.starts_with("sqlite://")
        || raw_database_url.contains("://")
    {
        return raw_database_url.to_string();
    }

    if let Some(path) = raw_database_url.strip_prefix("sqlite:") {
        let path = path.replace('\\', "/");
        return format!("sqlite://{path}");
    }

    format!("sqlite://{}", raw_database_url.replace('\\', "/"))
}

fn ensure_parent_dir_exists(database_url: &str) -> anyhow::Result<()> {
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
#[path = "tests/config_tests.rs"]
mod tests;
