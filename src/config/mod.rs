//! CLI settings loading and merging
//!
//! Handles loading from a settings file, environment variables, and CLI
//! arguments with proper precedence (CLI > Env > File > Defaults).

pub mod loader;
pub mod settings;

pub use loader::load_settings;
pub use settings::{OutputFormat, Settings};
