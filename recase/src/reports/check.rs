//! Check command report data structures.

use recase_core::Case;

use super::output::{Output, Report};

/// Report of which inputs are already in the target case.
#[derive(Debug)]
pub struct CheckReport {
    /// Target case.
    pub case: Case,
    /// One entry per input.
    pub entries: Vec<CheckEntry>,
}

/// A single checked input.
#[derive(Debug)]
pub struct CheckEntry {
    /// Input as given.
    pub input: String,
    /// Input converted to the target case.
    pub expected: String,
    /// Whether the input is already in the target case.
    pub ok: bool,
}

impl CheckReport {
    /// Number of inputs not in the target case.
    pub fn failures(&self) -> usize {
        self.entries.iter().filter(|e| !e.ok).count()
    }

    /// Whether every input is in the target case.
    pub fn is_valid(&self) -> bool {
        self.failures() == 0
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for entry in &self.entries {
            if entry.ok {
                out.ok_item(&entry.input);
            } else if entry.expected.is_empty() {
                out.failed_item(&format!("{:?} (no words)", entry.input));
            } else {
                out.failed_item(&format!("{} -> {}", entry.input, entry.expected));
            }
        }

        out.newline();
        let failures = self.failures();
        if failures == 0 {
            out.preformatted(&format!("all inputs are {} case", self.case));
        } else {
            out.preformatted(&format!(
                "{} of {} input{} not {} case",
                failures,
                self.entries.len(),
                if self.entries.len() == 1 { " is" } else { "s are" },
                self.case
            ));
        }
    }
}
