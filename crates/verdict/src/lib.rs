//! ## Crate layout
//! - `oracle`: the judge and its comparison entry points.
//! - `value`, `key`, `tuple`: what results are made of.
//! - `expected`, `mode`: what a test declares.
//! - `outcome`, `check`: verdicts and their aggregation per test.
//! - `result`: actual results and execution signals.
//! - `config`, `error`, `obs`: configuration, refusals and verdict counters.
//!
//! The `prelude` module carries the vocabulary a conformance test needs.

pub use verdict_core::{
    COMPOSITE_KEY_ESCAPE, COMPOSITE_KEY_SEPARATOR, DEFAULT_DIAGNOSTIC_LIMIT, check, config, error,
    expected, key, keys, mode, obs, oracle, outcome, result, tuple, value, values,
};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Traits
/// The `HasKey` trait and its derive share one name.
///

pub mod traits {
    pub use verdict_core::traits::*;
    pub use verdict_derive::HasKey;
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::traits::HasKey;
    pub use verdict_core::prelude::*;
    pub use verdict_core::{keys, tuple, values};
}
