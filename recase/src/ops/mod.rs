//! Core operations.
//!
//! This module contains the logic behind recase commands,
//! separated from CLI argument parsing and output rendering.

pub mod cases;
pub mod check;
pub mod convert;
pub mod words;

pub use cases::cases;
pub use check::check;
pub use convert::convert;
pub use words::words;
