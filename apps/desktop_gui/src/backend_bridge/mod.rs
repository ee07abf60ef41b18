//! Backend worker: owns the async runtime and the HTTP chapter source.

pub mod commands;
pub mod runtime;
