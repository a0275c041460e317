//! Integration tests for doc comment normalisation.
//!
//! Covers embedded code capture, delegate routing, tag canonicalisation,
//! and the idempotence of the engine on its own output.

use apexdocfix::{FormatOptions, normalize_doc_comment, normalize_types};
use rstest::rstest;

use prelude::*;

fn normalize(value: &str) -> String {
    normalize_doc_comment(value, &FormatOptions::default(), normalize_types)
}

#[test]
fn code_sample_type_tokens_are_recased() {
    let input = "/**\n * Example:\n * {@code string name = 'test'; }\n */";
    let output = normalize(input);
    assert!(output.contains("{@code String name = 'test'; }"));
    assert_eq!(output.lines().count(), 4);
    assert_comment_shape(&output);
}

#[test]
fn prose_outside_code_is_not_recased() {
    let input = "/**\n * Returns the string label.\n */";
    let output = normalize(input);
    assert!(output.contains("Returns the string label."));
}

#[test]
fn group_category_word_is_recased_only() {
    let input = "/**\n * @group class My  description\n */";
    let output = normalize(input);
    assert!(output.contains(" * @group Class My  description"));
}

#[test]
fn runaway_code_block_is_captured_to_the_last_line() {
    let input = "/**\n * Sample:\n * {@code\n * Integer x = 1;\n */";
    let output = normalize(input);
    assert!(output.contains(" * {@code"));
    assert!(output.contains(" * Integer x = 1;"));
    assert_comment_shape(&output);
}

#[test]
fn single_line_comment_is_not_structured() {
    assert_eq!(normalize("/** */"), "/** */");
    assert_eq!(normalize("/** quick note */"), "/** quick note */");
}

#[test]
fn canonical_layout_snapshot() {
    let input = "/**\n *  Converts the record into its canonical shape\n * before persisting.\n \
                 *\n *\n * {@code\n *   Account acct = new Account();\n *   upsert acct;\n * }\n \
                 */";
    insta::assert_snapshot!(normalize(input), @r"
/**
 * Converts the record into its canonical shape before persisting.
 *
 * {@code
 *   Account acct = new Account();
 *   upsert acct;
 * }
 */
");
}

#[rstest]
#[case::prose("/**\n * Converts the record into its canonical shape before persisting.\n */")]
#[case::paragraphs("/**\n * One.\n *\n * Two.\n */")]
#[case::tags(
    "/**\n * Widget factory.\n *\n * @param name the widget name\n * @return the widget\n */"
)]
#[case::code("/**\n * {@code\n *   if (flag) {\n *     act();\n *   }\n * }\n */")]
#[case::runaway("/**\n * {@code\n * Integer x = 1;\n */")]
fn normalisation_is_idempotent(#[case] input: &str) {
    let once = normalize(input);
    let twice = normalize(&once);
    assert_eq!(once, twice);
    assert_comment_shape(&once);
}
