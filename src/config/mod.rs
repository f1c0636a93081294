//! Configuration module for Caption Studio.
//!
//! Provides `AppConfig` (top-level settings), sub-configs for the completion
//! API and the generation defaults, `AppPaths` for the platform config
//! directory, and TOML persistence via `AppConfig::load` / `AppConfig::save`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{AppConfig, CompletionConfig, GenerationConfig};
