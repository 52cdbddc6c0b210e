use std::fmt;
use std::path::PathBuf;

use crate::color::RampError;

/// Error loading or validating a [`super::SimConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// File could not be read or is not valid INI.
    Load { path: PathBuf, source: ini::Error },

    /// INI text is malformed.
    Parse(ini::ParseError),

    /// A key holds a value that does not parse or is out of range.
    Invalid {
        section: &'static str,
        key: &'static str,
        value: String,
        reason: String,
    },

    /// Color stops or max speed were rejected.
    Ramp(RampError),
}

impl ConfigError {
    pub(crate) fn invalid(
        section: &'static str,
        key: &'static str,
        value: &str,
        reason: impl Into<String>,
    ) -> Self {
        ConfigError::Invalid {
            section,
            key,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Load { path, source } => {
                write!(f, "failed to load config {}: {source}", path.display())
            }
            ConfigError::Parse(e) => write!(f, "malformed config: {e}"),
            ConfigError::Invalid { section, key, value, reason } => {
                write!(f, "[{section}] {key} = \"{value}\": {reason}")
            }
            ConfigError::Ramp(e) => write!(f, "[color] {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Load { source, .. } => Some(source),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Ramp(e) => Some(e),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<RampError> for ConfigError {
    fn from(e: RampError) -> Self {
        ConfigError::Ramp(e)
    }
}
