//! Word extraction shared by every case style.

/// Check if a character separates words.
///
/// Separators are any Unicode whitespace, `_`, `-` and `.`.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '_' | '-' | '.')
}

/// Split a string into its words.
///
/// A word is a run of letters and numbers. Separators end a word and are
/// discarded, runs of them never produce empty words. Any other character
/// is dropped without ending the word (`"don't"` -> `dont`).
///
/// Inside a run, a word also ends before an uppercase letter that follows
/// a lowercase letter or number (`fooBar`, `v2Beta`) and before the last
/// capital of an acronym that is followed by a lowercase letter, so
/// `"XMLHttpRequest"` splits into `XML`, `Http`, `Request`.
pub fn split_words(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    for segment in s.split(is_separator) {
        let chars: Vec<char> = segment.chars().filter(|c| c.is_alphanumeric()).collect();
        split_segment(&chars, &mut words);
    }
    words
}

fn split_segment(chars: &[char], words: &mut Vec<String>) {
    let mut start = 0;
    for i in 1..chars.len() {
        if is_boundary(chars[i - 1], chars[i], chars.get(i + 1).copied()) {
            words.push(chars[start..i].iter().collect());
            start = i;
        }
    }
    if start < chars.len() {
        words.push(chars[start..].iter().collect());
    }
}

/// `prev` and `cur` are both alphanumeric.
fn is_boundary(prev: char, cur: char, next: Option<char>) -> bool {
    if !cur.is_uppercase() {
        return false;
    }
    if !prev.is_uppercase() {
        return true;
    }
    // End of an acronym: "XMLHttp" breaks before the "H"
    next.is_some_and(char::is_lowercase)
}
