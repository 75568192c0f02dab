//! Shared context for conformance tests: the fixture snapshot every query
//! runs against and the oracle that judges the result.
use std::path::Path;
use thiserror::Error as ThisError;
use verdict::{
    config::{ConfigError, OracleConfig},
    oracle::Oracle,
};
use verdict_fixtures::{Fixture, FixtureError};

///
/// ContextError
///

#[derive(Debug, ThisError)]
pub enum ContextError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fixture(#[from] FixtureError),
}

///
/// TestContext
///
/// One test method's view of the world. Built per test; cheap to copy.
///

#[derive(Clone, Copy, Debug)]
pub struct TestContext {
    fixture: &'static Fixture,
    oracle: Oracle,
}

impl TestContext {
    /// Bundled fixture, default oracle configuration.
    pub fn new() -> Result<Self, ContextError> {
        Self::with_config(OracleConfig::default())
    }

    pub fn with_config(config: OracleConfig) -> Result<Self, ContextError> {
        Ok(Self {
            fixture: Fixture::bundled()?,
            oracle: Oracle::new(config)?,
        })
    }

    /// Bundled fixture, oracle configured from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ContextError> {
        Self::with_config(OracleConfig::load(path)?)
    }

    #[must_use]
    pub const fn fixture(&self) -> &'static Fixture {
        self.fixture
    }

    #[must_use]
    pub const fn oracle(&self) -> &Oracle {
        &self.oracle
    }
}
