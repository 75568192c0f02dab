use thiserror::Error as ThisError;

///
/// FixtureError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum FixtureError {
    #[error("fixture parse failed: {0}")]
    Parse(String),

    #[error("fixture version {found} is not supported (expected {expected})")]
    Version { found: u32, expected: u32 },

    #[error("duplicate {kind} key '{key}'")]
    DuplicateKey { kind: &'static str, key: String },

    #[error("{kind} '{key}' references missing {target} '{reference}'")]
    DanglingReference {
        kind: &'static str,
        key: String,
        target: &'static str,
        reference: String,
    },
}

impl From<serde_json::Error> for FixtureError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
