//! Configuration management for the itinera CLI.
//!
//! This module provides a flexible configuration system that supports:
//! - File-based configuration (`~/.itinera/config`)
//! - Environment variable overrides
//! - Builder pattern for programmatic configuration
//! - Validation of required settings

mod builder;
mod constants;
mod defaults;
mod environment;
mod loader;
mod types;
mod validation;

// Re-export the main types for convenience
pub use types::{Config, LlmSettings, ModelSettings};

pub use constants::DEFAULT_GEMINI_BASE_URL;

#[cfg(test)]
mod tests;
