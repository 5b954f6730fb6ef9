//! Configuration loading for doc2json.
//!
//! `defaults/doc2json.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. A user file and command-line overrides are
//! layered on top of those defaults via [`Loader`] before deserializing into
//! [`Doc2JsonConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

use crate::godoc::formats::Format;

const DEFAULT_TOML: &str = include_str!("../defaults/doc2json.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Doc2JsonConfig {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Controls how the document is written.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: Format,
    pub trailing_newline: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for command-line flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<Doc2JsonConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<Doc2JsonConfig, ConfigError> {
    Loader::new().build()
}
