//! Cases command report data structures.

use recase_core::Case;

use super::output::{Output, Report};

/// Supported cases applied to a sample input.
#[derive(Debug)]
pub struct CasesReport {
    /// Sample input.
    pub example: String,
    /// One row per supported case.
    pub rows: Vec<CaseRow>,
}

/// A supported case.
#[derive(Debug)]
pub struct CaseRow {
    pub case: Case,
    /// Word joiner, if any.
    pub joiner: Option<char>,
    /// The sample converted to this case.
    pub output: String,
}

impl Report for CasesReport {
    fn render(&self, out: &mut dyn Output) {
        out.title("Supported cases");
        out.key_value("example", &self.example);
        out.newline();

        for row in &self.rows {
            let joiner = match row.joiner {
                Some(c) => format!("'{}'", c),
                None => "none".to_string(),
            };
            out.preformatted(&format!(
                "  {:<8} joiner {:<6} {}",
                row.case.as_str(),
                joiner,
                row.output
            ));
        }
    }
}
