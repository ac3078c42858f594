use thiserror::Error;

/// Error type for registry and dispatch operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VariantError {
    #[error("unknown tag: {0}")]
    InvalidTag(String),
    #[error("tag {0} requires an argument")]
    ArgumentRequired(String),
    #[error("tag {0} does not take an argument")]
    ArgumentUnexpected(String),
    #[error("dispatch table is missing handlers for: {}", .0.join(", "))]
    IncompleteDispatch(Vec<String>),
    #[error("no handler for tag: {0}")]
    DispatchMiss(String),
}
