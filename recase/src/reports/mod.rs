//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod cases;
mod check;
mod convert;
mod output;
mod words;

pub use cases::{CaseRow, CasesReport};
pub use check::{CheckEntry, CheckReport};
pub use convert::ConvertReport;
#[cfg(test)]
pub use output::BufferOutput;
pub use output::{Report, TerminalOutput};
pub use words::{WordsEntry, WordsReport};
