//! UI/backend events and error modeling for desktop GUI controller.

use client_core::RequestError;
use serde_json::Value;

#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    SequenceFetched(Result<Value, RequestError>),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Dispatch,
}

#[derive(Debug, Clone)]
pub struct UiError {
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn new(context: UiErrorContext, message: impl Into<String>) -> Self {
        Self {
            context,
            message: message.into(),
        }
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Status line text; startup failures are prefixed so they stand out.
    pub fn status_text(&self) -> String {
        match self.context {
            UiErrorContext::BackendStartup => {
                format!("Backend worker startup failure: {}", self.message)
            }
            UiErrorContext::Dispatch => self.message.clone(),
        }
    }
}
