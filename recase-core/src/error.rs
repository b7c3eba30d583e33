use miette::Diagnostic;
use thiserror::Error;

use crate::{Case, ValueKind};

/// Result type for conversions of loosely-typed input.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    #[error("{}: expected a string input (received {received})", .case.function_name())]
    #[diagnostic(
        code(recase::invalid_input_type),
        help("pass text, or a missing value to get an empty result")
    )]
    InvalidInputType { case: Case, received: ValueKind },
}

impl Error {
    /// The kind of value that was rejected.
    pub fn received(&self) -> ValueKind {
        match self {
            Error::InvalidInputType { received, .. } => *received,
        }
    }
}
