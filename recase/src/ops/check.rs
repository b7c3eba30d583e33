//! Check operation - verifies inputs are already in a case.

use recase_core::Case;

use crate::reports::{CheckEntry, CheckReport};

/// Execute the check operation.
pub fn check(inputs: &[String], case: Case) -> CheckReport {
    let entries = inputs
        .iter()
        .map(|input| CheckEntry {
            input: input.clone(),
            expected: case.apply(input),
            ok: case.is_case(input),
        })
        .collect();

    CheckReport { case, entries }
}
