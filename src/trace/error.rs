//! Trace generation errors.

/// Errors that can occur before a trace is generated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TraceError {
    #[error("Cannot sort an empty array: enter at least one number")]
    EmptyInput,

    #[error("Please enter valid numbers! No integers found in '{input}'")]
    NoValidNumbers { input: String },
}
