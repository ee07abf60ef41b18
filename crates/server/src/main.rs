use std::{net::SocketAddr, path::Path, sync::Arc};

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use server_api::{generate_sequence, ApiContext};
use shared::{
    error::{ApiError, ErrorCode},
    protocol::{ChapterSequence, SequenceRequest, HEALTH_ROUTE, SEQUENCE_ROUTE},
};
use storage::Storage;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::{error, info, warn};

mod app_state;
mod config;

use app_state::AppState;
use config::{load_settings, prepare_database_url};

const MAX_REQUEST_BYTES: usize = 16 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    let database_url = prepare_database_url(&settings.database_url)?;
    let storage = Storage::new(&database_url).await.map_err(|error| {
        error!(
            %database_url,
            %error,
            "failed to open SQLite database; verify parent directory exists and permissions are correct"
        );
        error
    })?;

    if let Some(path) = settings.catalogue_csv.as_deref() {
        import_catalogue_if_present(&storage, path).await?;
    }

    let api = ApiContext::load(storage, settings.search_settings()).await?;
    let app = build_router(Arc::new(AppState { api }));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn import_catalogue_if_present(storage: &Storage, path: &Path) -> anyhow::Result<()> {
    if !path.exists() {
        warn!(path = %path.display(), "catalogue csv not found; serving stored chapters only");
        return Ok(());
    }
    storage.import_chapters_csv(path).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(HEALTH_ROUTE, get(healthz))
        .route(SEQUENCE_ROUTE, post(http_generate_sequence))
        .layer(RequestBodyLimitLayer::new(MAX_REQUEST_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn healthz(
    State(state): State<Arc<AppState>>,
) -> Result<&'static str, (StatusCode, Json<ApiError>)> {
    state.api.storage.health_check().await.map_err(|e| {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiError::new(ErrorCode::Internal, e.to_string())),
        )
    })?;
    Ok("ok")
}

async fn http_generate_sequence(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SequenceRequest>,
) -> Result<Json<ChapterSequence>, (StatusCode, Json<ApiError>)> {
    let sequence = generate_sequence(&state.api, req)
        .await
        .map_err(|e| (status_for(&e), Json(e)))?;
    Ok(Json(sequence))
}

fn status_for(error: &ApiError) -> StatusCode {
    match error.code {
        ErrorCode::Validation => StatusCode::BAD_REQUEST,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
