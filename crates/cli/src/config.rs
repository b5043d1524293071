//! Runtime configuration from the environment.

use std::fs;
use std::path::{Path, PathBuf};

use snapzone_invoicing::BusinessProfile;
use snapzone_observability::{LogFormat, UnknownLogFormat};
use thiserror::Error;

pub const OUTPUT_DIR_VAR: &str = "SNAPZONE_OUTPUT_DIR";
pub const PROFILE_VAR: &str = "SNAPZONE_PROFILE";
pub const LOG_FORMAT_VAR: &str = "SNAPZONE_LOG_FORMAT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid SNAPZONE_LOG_FORMAT")]
    LogFormat(#[from] UnknownLogFormat),

    #[error("cannot read business profile {path}: {source}")]
    ReadProfile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid business profile {path}: {source}")]
    ParseProfile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory invoices are written to.
    pub output_dir: PathBuf,
    /// Business profile file; the built-in profile is used when unset.
    pub profile_path: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            profile_path: None,
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// A `log_format` given here replaces `SNAPZONE_LOG_FORMAT`, which is
    /// then not read at all.
    pub fn from_env(log_format: Option<LogFormat>) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok(), log_format)
    }

    /// Read configuration through `lookup`; empty values count as unset.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        log_format: Option<LogFormat>,
    ) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Ok(Self {
            output_dir: var(OUTPUT_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            profile_path: var(PROFILE_VAR).map(PathBuf::from),
            log_format: match (log_format, var(LOG_FORMAT_VAR)) {
                (Some(format), _) => format,
                (None, Some(format)) => format.parse()?,
                (None, None) => defaults.log_format,
            },
        })
    }

    /// The configured business profile, or the built-in one.
    pub fn load_profile(&self) -> Result<BusinessProfile, ConfigError> {
        match &self.profile_path {
            Some(path) => read_profile(path),
            None => Ok(BusinessProfile::default()),
        }
    }
}

fn read_profile(path: &Path) -> Result<BusinessProfile, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::ReadProfile {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ConfigError::ParseProfile {
        path: path.to_path_buf(),
        source,
    })
}
