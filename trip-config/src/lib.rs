//! Configuration for the trip toolchain.
//!
//! Settings resolve in three layers, later ones winning key by key:
//!
//! 1. `defaults/trip.default.toml`, compiled into the binary
//! 2. a config file: an explicit `--config` path, or `trip.toml` in the
//!    working directory when present
//! 3. single-key overrides from command line flags (`--format`)
//!
//! [`Loader`] stacks the layers and deserializes the result into [`TripConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/trip.default.toml");

/// Per-project config file picked up from the working directory.
pub const LOCAL_CONFIG_FILE: &str = "trip.toml";

/// Top-level configuration consumed by trip applications.
#[derive(Debug, Clone, Deserialize)]
pub struct TripConfig {
    pub loader: LoaderConfig,
    pub prompt: PromptConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Where itinerary documents are looked up when none is named.
#[derive(Debug, Clone, Deserialize)]
pub struct LoaderConfig {
    pub default_paths: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PromptConfig {
    pub template_paths: Vec<String>,
    pub placeholder: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Name of the output format, resolved by the binary.
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// An `EnvFilter` directive such as `warn` or `trip_parser=debug`.
    pub level: String,
}

/// Stacks config layers over the embedded trip defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Only the embedded defaults; every key of [`TripConfig`] is present.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a TOML file the user named explicitly; `build` fails if it is missing.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a TOML file that may not exist.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer `trip.toml` from the working directory, if there is one.
    pub fn with_local_file(self) -> Self {
        self.with_optional_file(LOCAL_CONFIG_FILE)
    }

    /// Override one dotted key, e.g. `output.format` from `--format`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge the layers into a [`TripConfig`]; unknown format names are not checked here.
    pub fn build(self) -> Result<TripConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The built-in settings with no file or override applied.
pub fn load_defaults() -> Result<TripConfig, ConfigError> {
    Loader::new().build()
}
