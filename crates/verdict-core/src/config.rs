//! Oracle configuration, loaded from an optional `verdict.toml`.
use crate::DEFAULT_DIAGNOSTIC_LIMIT;
use serde::Deserialize;
use std::{fs, io, path::Path};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read oracle config '{path}': {source}")]
    Io { path: String, source: io::Error },

    #[error("failed to parse oracle config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid oracle config: {field} {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

///
/// OracleConfig
///
/// Knobs for how strictly values are matched and how much a failing
/// diagnostic lists.
///

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OracleConfig {
    /// Maximum elements listed per side in an element-mismatch diagnostic.
    pub diagnostic_limit: usize,

    /// Absolute tolerance for float-vs-number equality; 0.0 is exact.
    pub float_tolerance: f64,

    /// When false, numeric values of different representations never match.
    pub numeric_coercion: bool,
}

impl OracleConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;

        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.float_tolerance.is_finite() || self.float_tolerance < 0.0 {
            return Err(ConfigError::Invalid {
                field: "float_tolerance",
                message: format!("must be finite and >= 0, got {}", self.float_tolerance),
            });
        }
        if self.diagnostic_limit == 0 {
            return Err(ConfigError::Invalid {
                field: "diagnostic_limit",
                message: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    #[must_use]
    pub const fn with_float_tolerance(mut self, tolerance: f64) -> Self {
        self.float_tolerance = tolerance;
        self
    }

    #[must_use]
    pub const fn with_numeric_coercion(mut self, enabled: bool) -> Self {
        self.numeric_coercion = enabled;
        self
    }

    #[must_use]
    pub const fn with_diagnostic_limit(mut self, limit: usize) -> Self {
        self.diagnostic_limit = limit;
        self
    }
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            diagnostic_limit: DEFAULT_DIAGNOSTIC_LIMIT,
            float_tolerance: 0.0,
            numeric_coercion: true,
        }
    }
}

///
/// TESTS
///
