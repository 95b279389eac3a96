//! Multi-document generation.
//!
//! - [`MultiDocument`]: runs several [`DocumentUnit`]s in order into one output
//! - [`Progress`]: aggregate and per-unit progress handles
//! - [`GenerationOptions`]: run-wide settings

pub mod config;
mod orchestrator;
pub mod progress;
mod unit;

pub use config::GenerationOptions;
pub use orchestrator::{resolve_output_path, MultiDocument};
pub use progress::Progress;
pub use unit::DocumentUnit;
