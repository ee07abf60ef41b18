//! UI layer for desktop GUI: the picker window.

pub mod app;

pub use app::{DesktopGuiApp, StartupConfig};
