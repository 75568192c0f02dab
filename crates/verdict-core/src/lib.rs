//! Core runtime for Verdict: the result oracle that judges whether a query
//! result matches a declared expectation, plus the values, keys, tuples and
//! verdicts it speaks in.
#![warn(unreachable_pub)]

#[macro_use]
mod macros;

// public exports are one module level down
pub mod check;
pub mod config;
pub mod error;
pub mod expected;
pub mod key;
pub mod mode;
pub mod obs;
pub mod oracle;
pub mod outcome;
pub mod result;
pub mod traits;
pub mod tuple;
pub mod value;

///
/// CONSTANTS
///

/// Separator used when rendering the parts of a composite primary key.
pub const COMPOSITE_KEY_SEPARATOR: char = ',';

/// Escapes a literal separator (or itself) inside a composite key part.
pub const COMPOSITE_KEY_ESCAPE: char = '\\';

/// Default number of elements listed per side in an element-mismatch
/// diagnostic before the remainder is summarized as a count.
pub const DEFAULT_DIAGNOSTIC_LIMIT: usize = 16;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No sinks, metrics, or config loaders are re-exported here.
///

pub mod prelude {
    pub use crate::{
        check::CheckSet,
        expected::Expected,
        key::EntityKey,
        mode::ComparisonMode,
        oracle::Oracle,
        outcome::{Mismatch, PassKind, Verdict},
        result::{ActualResult, Execution, ExecutionSignal, SignalKind},
        traits::HasKey,
        tuple::Tuple,
        value::Value,
    };
}
