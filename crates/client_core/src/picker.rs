use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    fetch_with_reveal_delay,
    render::{render_response, REQUEST_ERROR_MESSAGE},
    stepper::{parse_leading_int, Stepper},
    ChapterSource, RequestError,
};

pub const TRIGGER_LABEL: &str = "Find Chapters";
pub const TRIGGER_BUSY_LABEL: &str = "Finding...";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid number of verses.")]
    InvalidVerseCount { raw: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("a chapter request is already in flight")]
    InFlight,
}

/// Accepts any positive leading integer. Upper bounds are the server's call.
pub fn validate_verse_count(raw: &str) -> Result<i64, ValidationError> {
    parse_leading_int(raw)
        .filter(|count| *count >= 1)
        .ok_or_else(|| ValidationError::InvalidVerseCount {
            raw: raw.to_string(),
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerState {
    pub enabled: bool,
    pub label: &'static str,
}

impl TriggerState {
    fn idle() -> Self {
        Self {
            enabled: true,
            label: TRIGGER_LABEL,
        }
    }

    fn busy() -> Self {
        Self {
            enabled: false,
            label: TRIGGER_BUSY_LABEL,
        }
    }
}

impl Default for TriggerState {
    fn default() -> Self {
        Self::idle()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultRegion {
    pub visible: bool,
    pub text: String,
    pub is_error: bool,
}

/// Headless model of the picker: stepper, trigger, notice and result region.
///
/// The GUI and CLI both drive this; it never touches the network itself.
#[derive(Debug, Clone, Default)]
pub struct ChapterPicker {
    pub stepper: Stepper,
    trigger: TriggerState,
    result: ResultRegion,
    notice: Option<String>,
}

impl ChapterPicker {
    pub fn new(stepper: Stepper) -> Self {
        Self {
            stepper,
            ..Self::default()
        }
    }

    pub fn trigger_state(&self) -> TriggerState {
        self.trigger
    }

    pub fn result(&self) -> &ResultRegion {
        &self.result
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn is_busy(&self) -> bool {
        !self.trigger.enabled
    }

    /// Starts a request for the current field value.
    ///
    /// On success the previous result is hidden and the trigger is disabled
    /// until [`ChapterPicker::complete`] runs. On a validation failure the
    /// notice is raised and nothing else changes.
    pub fn trigger(&mut self) -> Result<i64, DispatchError> {
        if self.is_busy() {
            return Err(DispatchError::InFlight);
        }

        let verse_count = match validate_verse_count(self.stepper.text()) {
            Ok(verse_count) => verse_count,
            Err(err) => {
                self.notice = Some(err.to_string());
                return Err(err.into());
            }
        };

        self.result.visible = false;
        self.trigger = TriggerState::busy();
        Ok(verse_count)
    }

    pub fn complete(&mut self, response: Result<Value, RequestError>) {
        match response {
            Ok(value) => {
                self.result.text = render_response(&value);
                self.result.is_error = false;
            }
            Err(error) => {
                warn!(%error, "error fetching chapter data");
                self.result.text = REQUEST_ERROR_MESSAGE.to_string();
                self.result.is_error = true;
            }
        }
        self.result.visible = true;
        self.trigger = TriggerState::idle();
    }

    /// Re-enables the trigger after a request that never left the client.
    pub fn cancel(&mut self) {
        self.trigger = TriggerState::idle();
    }

    /// Runs one full trigger, fetch and render cycle against `source`.
    pub async fn generate<S>(&mut self, source: &S) -> Result<(), DispatchError>
    where
        S: ChapterSource + ?Sized,
    {
        let verse_count = self.trigger()?;
        info!(verse_count, "requesting chapter sequence");
        let response = fetch_with_reveal_delay(source, verse_count).await;
        self.complete(response);
        Ok(())
    }
}
