//! Convert command report data structures.

use recase_core::Case;

use super::output::{Output, Report};

/// Converted values, one per input, in input order.
#[derive(Debug)]
pub struct ConvertReport {
    /// Target case.
    pub case: Case,
    /// Converted outputs.
    pub outputs: Vec<String>,
}

impl Report for ConvertReport {
    fn render(&self, out: &mut dyn Output) {
        for output in &self.outputs {
            out.preformatted(output);
        }
    }
}
