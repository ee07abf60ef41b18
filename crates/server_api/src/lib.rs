use std::{sync::Arc, time::Instant};

use search::{search, SearchError, SearchLimits, SelectionProblem, DEFAULT_TOLERANCE};
use shared::{
    domain::Chapter,
    error::{ApiError, ErrorCode},
    protocol::{ChapterSequence, SequenceRequest},
};
use storage::Storage;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSettings {
    pub tolerance: u32,
    pub limits: SearchLimits,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            limits: SearchLimits::default(),
        }
    }
}

#[derive(Clone)]
pub struct ApiContext {
    pub storage: Storage,
    pub catalogue: Arc<[Chapter]>,
    pub search: SearchSettings,
}

impl ApiContext {
    /// Snapshots the stored catalogue. Later imports need a new context.
    pub async fn load(storage: Storage, search: SearchSettings) -> anyhow::Result<Self> {
        let chapters = storage.list_chapters().await?;
        if chapters.is_empty() {
            warn!("chapter catalogue is empty; sequence requests will fail until one is imported");
        } else {
            info!(chapters = chapters.len(), "loaded chapter catalogue");
        }
        Ok(Self {
            storage,
            catalogue: chapters.into(),
            search,
        })
    }
}

pub async fn generate_sequence(
    ctx: &ApiContext,
    request: SequenceRequest,
) -> Result<ChapterSequence, ApiError> {
    let goal = u32::try_from(request.verse_count)
        .ok()
        .filter(|goal| *goal >= 1)
        .ok_or_else(|| {
            ApiError::new(
                ErrorCode::Validation,
                format!(
                    "verseCount must be a positive integer, got {}",
                    request.verse_count
                ),
            )
        })?;

    let problem = SelectionProblem::new(goal, ctx.search.tolerance, ctx.catalogue.clone())
        .map_err(search_error)?;
    let limits = ctx.search.limits;

    let started = Instant::now();
    let outcome = tokio::task::spawn_blocking(move || search(&problem, &limits))
        .await
        .map_err(|e| ApiError::new(ErrorCode::Internal, format!("search task failed: {e}")))?;
    let elapsed_ms = started.elapsed().as_millis();

    match outcome.best {
        Some(selection) => {
            info!(
                goal,
                verses = selection.verses,
                words = selection.words,
                chapters = selection.chapters.len(),
                solutions = outcome.solutions_found,
                expanded = outcome.expanded,
                elapsed_ms,
                "generated chapter sequence"
            );
            Ok(selection.names())
        }
        None => {
            info!(
                goal,
                expanded = outcome.expanded,
                budget_exhausted = outcome.budget_exhausted,
                elapsed_ms,
                "no chapter sequence satisfies goal"
            );
            Ok(Vec::new())
        }
    }
}

fn search_error(err: SearchError) -> ApiError {
    match err {
        SearchError::InvalidGoal(_) => ApiError::new(ErrorCode::Validation, err.to_string()),
        SearchError::EmptyCatalogue => ApiError::new(ErrorCode::Internal, err.to_string()),
    }
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
