//! Case styles and the converters built on top of [`split_words`].

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Input, Result, words::split_words};

/// Supported case styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    /// `helloWorld`
    Camel,
    /// `HelloWorld`
    Pascal,
    /// `hello-world`
    Kebab,
    /// `hello.world`
    Dot,
}

impl Case {
    /// Every supported style, in display order.
    pub const ALL: [Case; 4] = [Case::Camel, Case::Pascal, Case::Kebab, Case::Dot];

    /// Returns the style identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Case::Camel => "camel",
            Case::Pascal => "pascal",
            Case::Kebab => "kebab",
            Case::Dot => "dot",
        }
    }

    /// Name of the free function implementing this style, used in error messages.
    pub fn function_name(&self) -> &'static str {
        match self {
            Case::Camel => "to_camel_case",
            Case::Pascal => "to_pascal_case",
            Case::Kebab => "to_kebab_case",
            Case::Dot => "to_dot_case",
        }
    }

    /// Character placed between words, if any.
    pub fn joiner(&self) -> Option<char> {
        match self {
            Case::Camel | Case::Pascal => None,
            Case::Kebab => Some('-'),
            Case::Dot => Some('.'),
        }
    }

    /// Convert text to this style.
    pub fn apply(self, s: &str) -> String {
        let words = split_words(s);
        match self {
            Case::Camel => words
                .iter()
                .enumerate()
                .map(|(i, w)| if i == 0 { lowercase(w) } else { capitalize(w) })
                .collect(),
            Case::Pascal => words.iter().map(|w| capitalize(w)).collect(),
            Case::Kebab => join_lowercase(&words, "-"),
            Case::Dot => join_lowercase(&words, "."),
        }
    }

    /// Convert a loosely-typed value to this style.
    ///
    /// Missing values convert to an empty string. Values that are neither
    /// text nor missing are rejected rather than coerced.
    pub fn convert<'a>(self, input: impl Into<Input<'a>>) -> Result<String> {
        match input.into() {
            Input::Missing => Ok(String::new()),
            Input::Text(s) => Ok(self.apply(s)),
            Input::Other(received) => Err(Error::InvalidInputType {
                case: self,
                received,
            }),
        }
    }

    /// Check if `s` is non-empty and already written in this style.
    pub fn is_case(self, s: &str) -> bool {
        !s.is_empty() && self.apply(s) == s
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Case {
    type Err = String;

    /// Accepts the short name and the usual spellings of each style,
    /// e.g. `camel`, `camelCase`, `kebab-case`, `dot.case`, `PascalCase`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !crate::is_separator(*c))
            .flat_map(char::to_lowercase)
            .collect();
        let key = match key.strip_suffix("case") {
            Some(stem) if !stem.is_empty() => stem,
            _ => key.as_str(),
        };
        match key {
            "camel" | "lowercamel" => Ok(Case::Camel),
            "pascal" | "uppercamel" => Ok(Case::Pascal),
            "kebab" => Ok(Case::Kebab),
            "dot" => Ok(Case::Dot),
            _ => Err(format!(
                "unknown case '{}', expected one of: camel, pascal, kebab, dot",
                s
            )),
        }
    }
}

/// Lowercase a word, dropping marks the mapping introduces (`İ` -> `i`).
fn lowercase(word: &str) -> String {
    word.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect()
}

fn capitalize(word: &str) -> String {
    let lower = lowercase(word);
    let mut chars = lower.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c
            .to_uppercase()
            .filter(|c| c.is_alphanumeric())
            .chain(chars)
            .collect(),
    }
}

fn join_lowercase(words: &[String], sep: &str) -> String {
    words
        .iter()
        .map(|w| lowercase(w))
        .collect::<Vec<_>>()
        .join(sep)
}

/// Convert a string to camelCase (e.g., "hello world" -> "helloWorld")
pub fn to_camel_case(s: &str) -> String {
    Case::Camel.apply(s)
}

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
pub fn to_pascal_case(s: &str) -> String {
    Case::Pascal.apply(s)
}

/// Convert a string to kebab-case (e.g., "HelloWorld" -> "hello-world")
pub fn to_kebab_case(s: &str) -> String {
    Case::Kebab.apply(s)
}

/// Convert a string to dot.case (e.g., "XMLHttpRequest" -> "xml.http.request")
pub fn to_dot_case(s: &str) -> String {
    Case::Dot.apply(s)
}

/// Convert optional text, treating `None` as empty.
pub fn convert_opt(input: Option<&str>, case: Case) -> String {
    input.map(|s| case.apply(s)).unwrap_or_default()
}
