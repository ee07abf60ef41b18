//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use client_core::{fetch_with_reveal_delay, HttpChapterSource};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(server_url: String, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::new(
                    UiErrorContext::BackendStartup,
                    format!("failed to build backend runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        let source = match HttpChapterSource::new(&server_url) {
            Ok(source) => source,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::new(
                    UiErrorContext::BackendStartup,
                    format!("invalid server url '{server_url}': {err}"),
                )));
                tracing::error!(%server_url, "invalid server url: {err}");
                return;
            }
        };
        let _ = ui_tx.try_send(UiEvent::Info(format!("Using {}", source.endpoint())));

        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::FetchSequence { verse_count } => {
                        let result = fetch_with_reveal_delay(&source, verse_count).await;
                        if ui_tx.send(UiEvent::SequenceFetched(result)).is_err() {
                            break;
                        }
                    }
                }
            }
            tracing::debug!("backend command queue closed");
        });
    });
}
