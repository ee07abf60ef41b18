use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client};
use serde_json::Value;
use shared::protocol::{SequenceRequest, SEQUENCE_ROUTE};
use thiserror::Error;
use tracing::debug;
use url::Url;

mod picker;
mod render;
mod stepper;

pub use picker::{
    validate_verse_count, ChapterPicker, DispatchError, ResultRegion, TriggerState,
    ValidationError, TRIGGER_BUSY_LABEL, TRIGGER_LABEL,
};
pub use render::{display_value, render_response, NO_RESULTS_MESSAGE, REQUEST_ERROR_MESSAGE};
pub use stepper::{
    parse_leading_int, Stepper, DEFAULT_MAX_VERSES, DEFAULT_MIN_VERSES, DEFAULT_VERSES,
};

/// Pause between a successful response and revealing the result region.
pub const REVEAL_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("response body was not valid json: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("invalid server url: {0}")]
    Url(#[from] url::ParseError),
}

#[async_trait]
pub trait ChapterSource: Send + Sync {
    /// Asks the server for a chapter sequence and returns the parsed body.
    async fn fetch_sequence(&self, verse_count: i64) -> Result<Value, RequestError>;
}

#[derive(Debug, Clone)]
pub struct HttpChapterSource {
    http: Client,
    endpoint: Url,
}

impl HttpChapterSource {
    pub fn new(server_url: &str) -> Result<Self, RequestError> {
        Self::with_client(Client::new(), server_url)
    }

    pub fn with_client(http: Client, server_url: &str) -> Result<Self, RequestError> {
        let endpoint = Url::parse(server_url)?.join(SEQUENCE_ROUTE)?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ChapterSource for HttpChapterSource {
    async fn fetch_sequence(&self, verse_count: i64) -> Result<Value, RequestError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .json(&SequenceRequest::new(verse_count))
            .send()
            .await
            .map_err(RequestError::Transport)?;

        let status = response.status();
        debug!(status = status.as_u16(), endpoint = %self.endpoint, "sequence response");
        if !status.is_success() {
            return Err(RequestError::Status(status.as_u16()));
        }

        response.json::<Value>().await.map_err(RequestError::Decode)
    }
}

/// Fetches a sequence and, when it succeeds, holds it back for [`REVEAL_DELAY`].
pub async fn fetch_with_reveal_delay<S>(
    source: &S,
    verse_count: i64,
) -> Result<Value, RequestError>
where
    S: ChapterSource + ?Sized,
{
    let response = source.fetch_sequence(verse_count).await;
    if response.is_ok() {
        tokio::time::sleep(REVEAL_DELAY).await;
    }
    response
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests/stepper_tests.rs"]
mod stepper_tests;

#[cfg(test)]
#[path = "tests/picker_tests.rs"]
mod picker_tests;

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod render_tests;
