//! Behavioural tests for the public conversion API.

use recase_core::{
    Case, Error, Input, ValueKind, is_separator, split_words, to_camel_case, to_dot_case,
    to_kebab_case,
};
use serde_json::json;

/// Inputs exercising separators, punctuation, acronyms, digits and Unicode.
const CORPUS: &[&str] = &[
    "hello world",
    "  Foo_bar-baz  ",
    "Hello_World Example",
    "XMLHttpRequest",
    "version 2 update",
    "user id 2",
    "SCREEN_NAME",
    "dot.case.example",
    "parseHTMLString",
    "don't stop me now",
    "déjà-vu_example",
    "mixed\tWHITESPACE\nand__Underscores",
    "HTTP2Server",
    "日本語 テキスト",
    "İstanbul",
    "İZMİR port",
];

fn render_table(inputs: &[&str]) -> String {
    inputs
        .iter()
        .map(|input| {
            let outputs: Vec<String> = Case::ALL.iter().map(|case| case.apply(input)).collect();
            format!("{} => {}", input, outputs.join(" | "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_documented_examples() {
    assert_eq!(to_camel_case("hello world"), "helloWorld");
    assert_eq!(to_camel_case("  Foo_bar-baz  "), "fooBarBaz");
    assert_eq!(to_kebab_case("Hello_World Example"), "hello-world-example");
    assert_eq!(to_dot_case("XMLHttpRequest"), "xml.http.request");
    assert_eq!(to_camel_case("version 2 update"), "version2Update");
}

#[test]
fn test_conversion_table() {
    let table = render_table(&["XMLHttpRequest", "hello world", "version 2 update", "SCREEN_NAME"]);
    insta::assert_snapshot!(table, @r"
    XMLHttpRequest => xmlHttpRequest | XmlHttpRequest | xml-http-request | xml.http.request
    hello world => helloWorld | HelloWorld | hello-world | hello.world
    version 2 update => version2Update | Version2Update | version-2-update | version.2.update
    SCREEN_NAME => screenName | ScreenName | screen-name | screen.name
    ");
}

#[test]
fn test_idempotent_on_own_output() {
    for case in Case::ALL {
        for input in CORPUS {
            let once = case.apply(input);
            let twice = case.apply(&once);
            assert_eq!(once, twice, "{} is not idempotent on {:?}", case, input);
        }
    }
}

#[test]
fn test_adjacent_single_letter_words_merge_on_reapply() {
    assert_eq!(to_camel_case("a b c"), "aBC");
    assert_eq!(to_camel_case("aBC"), "aBc");
    assert_eq!(to_kebab_case("a b c"), "a-b-c");
    assert_eq!(to_kebab_case("a-b-c"), "a-b-c");
}

#[test]
fn test_output_is_in_its_own_case() {
    for case in Case::ALL {
        for input in CORPUS {
            let out = case.apply(input);
            assert!(case.is_case(&out), "{:?} is not {} case", out, case);
        }
    }
}

#[test]
fn test_output_has_no_stray_separators() {
    for case in Case::ALL {
        for input in CORPUS {
            let out = case.apply(input);
            let stray = out
                .chars()
                .filter(|c| is_separator(*c) && Some(*c) != case.joiner())
                .count();
            assert_eq!(stray, 0, "{} output {:?} contains separators", case, out);
            if let Some(joiner) = case.joiner() {
                assert!(!out.starts_with(joiner) && !out.ends_with(joiner));
                assert!(!out.contains(&format!("{joiner}{joiner}")));
            }
        }
    }
}

#[test]
fn test_word_count_matches_joiners() {
    for input in CORPUS {
        let words = split_words(input);
        let kebab = to_kebab_case(input);
        assert_eq!(kebab.split('-').count(), words.len(), "{:?}", input);
    }
}

#[test]
fn test_separator_only_inputs_are_empty() {
    for input in ["", " ", "\t\n", "___", "- - -", "...", " _-. "] {
        for case in Case::ALL {
            assert_eq!(case.apply(input), "", "{} on {:?}", case, input);
        }
    }
}

#[test]
fn test_missing_is_empty() {
    for case in Case::ALL {
        assert_eq!(case.convert(Input::Missing), Ok(String::new()));
        assert_eq!(case.convert(&json!(null)), Ok(String::new()));
    }
}

#[test]
fn test_json_values() {
    assert_eq!(Case::Kebab.convert(&json!("Hello World")).unwrap(), "hello-world");

    let cases = [
        (json!(42), ValueKind::Number),
        (json!(1.5), ValueKind::Number),
        (json!(false), ValueKind::Boolean),
        (json!(["a"]), ValueKind::Array),
        (json!({"a": 1}), ValueKind::Object),
    ];
    for (value, kind) in &cases {
        let err = Case::Camel.convert(value).unwrap_err();
        assert_eq!(err.received(), *kind);
        assert_eq!(
            err,
            Error::InvalidInputType {
                case: Case::Camel,
                received: *kind,
            }
        );
    }
}

#[test]
fn test_error_message_names_function_and_type() {
    let err = Case::Kebab.convert(&json!({"a": 1})).unwrap_err();
    assert_eq!(
        err.to_string(),
        "to_kebab_case: expected a string input (received object)"
    );

    let err = Case::Pascal.convert(7_u64).unwrap_err();
    assert_eq!(
        err.to_string(),
        "to_pascal_case: expected a string input (received number)"
    );
}

#[test]
fn test_error_diagnostic_code() {
    use miette::Diagnostic;

    let err = Case::Dot.convert(true).unwrap_err();
    let code = err.code().map(|c| c.to_string());
    assert_eq!(code.as_deref(), Some("recase::invalid_input_type"));
}

#[test]
fn test_concurrent_calls_are_independent() {
    let handles: Vec<_> = CORPUS
        .iter()
        .map(|input| {
            let input = input.to_string();
            std::thread::spawn(move || (to_dot_case(&input), to_dot_case(&input)))
        })
        .collect();
    for handle in handles {
        let (a, b) = handle.join().unwrap();
        assert_eq!(a, b);
    }
}
