//! Cases operation - lists supported cases.

use recase_core::Case;

use crate::reports::{CaseRow, CasesReport};

/// Sample shown when no example is given.
pub const DEFAULT_EXAMPLE: &str = "XMLHttpRequest version 2";

/// Execute the cases operation.
pub fn cases(example: &str) -> CasesReport {
    let rows = Case::ALL
        .iter()
        .map(|&case| CaseRow {
            case,
            joiner: case.joiner(),
            output: case.apply(example),
        })
        .collect();

    CasesReport {
        example: example.to_string(),
        rows,
    }
}
