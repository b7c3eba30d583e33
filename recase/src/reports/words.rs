//! Words command report data structures.

use super::output::{Output, Report};

/// Extracted words for each input.
#[derive(Debug)]
pub struct WordsReport {
    pub entries: Vec<WordsEntry>,
}

#[derive(Debug)]
pub struct WordsEntry {
    pub input: String,
    pub words: Vec<String>,
}

impl Report for WordsReport {
    fn render(&self, out: &mut dyn Output) {
        for entry in &self.entries {
            let words = if entry.words.is_empty() {
                "(none)".to_string()
            } else {
                entry.words.join(" | ")
            };
            out.key_value(&entry.input, &words);
        }
    }
}
