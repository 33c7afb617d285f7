use thiserror::Error;

/// Reasons a piece of menu input is rejected by shape validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThaliError {
    #[error("expected a thali record")]
    NotARecord,
    #[error("field `{field}` must be {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
    #[error("expected a sequence of thali records")]
    NotASequence,
    #[error("sequence of thali records is empty")]
    EmptySequence,
    #[error("{what} must be text")]
    NotText { what: &'static str },
}

pub type Result<T> = std::result::Result<T, ThaliError>;
