use std::fs;
use std::path::{Path, PathBuf};

use gem_core::errors::{ErrorInfo, GemError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// File picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "gemctl.toml";

/// Output rendering for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain tab separated text.
    #[default]
    Text,
    /// Canonical JSON.
    Json,
}

/// TOML-configurable defaults for `gemctl`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Log filter directive used when neither `--log-level` nor `RUST_LOG` is set.
    #[serde(default)]
    pub log_level: Option<String>,
    /// Default output format.
    #[serde(default)]
    pub output: OutputFormat,
    /// Treat any invalid label passed to `check` as a failure.
    #[serde(default)]
    pub strict: bool,
}

impl CliConfig {
    pub fn from_toml_str(data: &str) -> Result<Self, GemError> {
        toml::from_str(data)
            .map_err(|err| GemError::Config(ErrorInfo::new("gemctl.config_parse", err.to_string())))
    }
}

/// Loads the CLI configuration.
///
/// An explicit path must exist. Without one, `gemctl.toml` in the working
/// directory is used when present and defaults apply otherwise.
pub fn load_config(path: Option<&Path>) -> Result<CliConfig, GemError> {
    let path: PathBuf = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !fallback.is_file() {
                return Ok(CliConfig::default());
            }
            fallback
        }
    };
    debug!(path = %path.display(), "loading configuration");
    let contents = fs::read_to_string(&path).map_err(|err| {
        GemError::Config(
            ErrorInfo::new("gemctl.config_read", format!("failed to read config: {err}"))
                .with_context("path", path.display().to_string()),
        )
    })?;
    CliConfig::from_toml_str(&contents).map_err(|err| match err {
        GemError::Config(info) => {
            GemError::Config(info.with_context("path", path.display().to_string()))
        }
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(CliConfig::from_toml_str("").unwrap(), CliConfig::default());
    }

    #[test]
    fn fields_are_parsed() {
        let config = CliConfig::from_toml_str(
            "log_level = \"debug\"\noutput = \"json\"\nstrict = true\n",
        )
        .unwrap();
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.output, OutputFormat::Json);
        assert!(config.strict);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = CliConfig::from_toml_str("colour = true").unwrap_err();
        assert_eq!(err.code(), "gemctl.config_parse");
    }

    #[test]
    fn explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert_eq!(err.code(), "gemctl.config_read");
        assert!(err.info().context.contains_key("path"));
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gemctl.toml");
        fs::write(&path, "output = \"json\"\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert!(!config.strict);
    }
}
