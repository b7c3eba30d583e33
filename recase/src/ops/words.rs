//! Words operation - exposes word extraction.

use recase_core::split_words;

use crate::reports::{WordsEntry, WordsReport};

/// Execute the words operation.
pub fn words(inputs: &[String]) -> WordsReport {
    let entries = inputs
        .iter()
        .map(|input| WordsEntry {
            input: input.clone(),
            words: split_words(input),
        })
        .collect();

    WordsReport { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::BufferOutput;

    #[test]
    fn test_words_render() {
        let inputs = vec![
            "XMLHttpRequest".to_string(),
            "version 2 update".to_string(),
            "___".to_string(),
        ];
        let report = words(&inputs);
        assert_eq!(report.entries[0].words, ["XML", "Http", "Request"]);
        insta::assert_snapshot!(BufferOutput::render(&report), @r"
        XMLHttpRequest: XML | Http | Request
        version 2 update: version | 2 | update
        ___: (none)
        ");
    }
}
