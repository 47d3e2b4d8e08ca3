//! Shared configuration loader for the bmd toolchain.
//!
//! `defaults/bmd.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`BmdConfig`].

use bmd_parser::bmd::transforms::standard::Target;
use bmd_parser::RenderOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

const DEFAULT_TOML: &str = include_str!("../defaults/bmd.default.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Source(#[from] config::ConfigError),
    #[error("invalid value for `{key}`: {message}")]
    Validation { key: &'static str, message: String },
}

/// Top-level configuration consumed by bmd applications.
#[derive(Debug, Clone, Deserialize)]
pub struct BmdConfig {
    pub parsing: ParsingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParsingConfig {
    pub tab_width: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub line_numbers: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Html,
    Json,
    Treeviz,
}

impl OutputFormat {
    pub fn target(self) -> Target {
        match self {
            OutputFormat::Html => Target::Html,
            OutputFormat::Json => Target::Json,
            OutputFormat::Treeviz => Target::Treeviz,
        }
    }
}

impl BmdConfig {
    /// The parser options this configuration selects.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            tab_width: self.parsing.tab_width,
            line_numbers: self.output.line_numbers,
        }
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.parsing.tab_width == 0 {
            return Err(ConfigError::Validation {
                key: "parsing.tab_width",
                message: "must be at least 1".to_string(),
            });
        }
        Ok(self)
    }
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

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder, deserialize and validate the resulting configuration.
    pub fn build(self) -> Result<BmdConfig, ConfigError> {
        let config: BmdConfig = self.builder.build()?.try_deserialize()?;
        config.validate()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<BmdConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.parsing.tab_width, 4);
        assert_eq!(config.output.format, OutputFormat::Html);
        assert!(!config.output.line_numbers);
        assert_eq!(config.render_options(), RenderOptions::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("output.format", "treeviz")
            .expect("override to apply")
            .set_override("output.line_numbers", true)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, OutputFormat::Treeviz);
        assert_eq!(config.output.format.target(), Target::Treeviz);
        assert!(config.render_options().line_numbers);
    }

    #[test]
    fn layers_user_file_over_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[parsing]\ntab_width = 2").unwrap();
        let config = Loader::new().with_file(file.path()).build().unwrap();
        assert_eq!(config.parsing.tab_width, 2);
        assert_eq!(config.output.format, OutputFormat::Html);
    }

    #[test]
    fn override_wins_over_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[output]\nformat = \"json\"").unwrap();
        let config = Loader::new()
            .with_file(file.path())
            .set_override("output.format", "html")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.output.format, OutputFormat::Html);
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let result = Loader::new().with_file("/nonexistent/bmd.toml").build();
        assert!(matches!(result, Err(ConfigError::Source(_))));
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/bmd.toml")
            .build()
            .unwrap();
        assert_eq!(config.parsing.tab_width, 4);
    }

    #[test]
    fn zero_tab_width_is_rejected() {
        let err = Loader::new()
            .set_override("parsing.tab_width", 0i64)
            .unwrap()
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Validation {
                key: "parsing.tab_width",
                ..
            }
        ));
    }

    #[test]
    fn unknown_format_is_rejected() {
        let result = Loader::new()
            .set_override("output.format", "pdf")
            .unwrap()
            .build();
        assert!(matches!(result, Err(ConfigError::Source(_))));
    }
}
