//! Case conversion for arbitrary text.
//!
//! Splits input into words (separators, punctuation stripping and
//! case transitions) and re-joins them as camelCase, PascalCase,
//! kebab-case or dot.case. Every function here is pure.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod case;
mod error;
mod input;
mod words;

// Case styles
pub use case::{Case, convert_opt, to_camel_case, to_dot_case, to_kebab_case, to_pascal_case};
// Errors
pub use error::{Error, Result};
// Loosely-typed input
pub use input::{Input, ValueKind};
// Word extraction
pub use words::{is_separator, split_words};
