#![expect(missing_docs)]
#![expect(clippy::needless_raw_string_hashes)]

use core::fmt::Write;

use jsonpeg::{Grammar, parse_json};

fn render_outcomes(inputs: &[&str]) -> String {
    let grammar = Grammar::json();
    let mut out = String::new();
    for input in inputs {
        let outcome = grammar.parse(input);
        writeln!(
            out,
            "{{\"matched\":{},\"position\":{},\"values\":{:?}}}",
            outcome.matched, outcome.position, outcome.values
        )
        .unwrap();
    }
    out
}

#[test]
fn snapshot_display_of_nested_document() {
    let value = parse_json(
        r#"
        {
            "version": 17,
            "bundles" : [
                { "name" : "org.gci.Bundle" },
                { "name" : "org.gci.commands.Bundle" }
            ]
        }
        "#,
    )
    .unwrap();
    insta::assert_snapshot!(value.to_string(), @r#"{"bundles":[{"name":"org.gci.Bundle"},{"name":"org.gci.commands.Bundle"}],"version":17}"#);
}

#[test]
fn snapshot_debug_of_mixed_document() {
    let value = parse_json(r#"{"key": "String", "array": [1, 2], "nested": {}}"#).unwrap();
    insta::assert_snapshot!(format!("{value:?}"), @r#"Object({"array": Array([Number("1"), Number("2")]), "key": String("String"), "nested": Object({})})"#);
}

#[test]
fn snapshot_prefix_outcomes() {
    let inputs = [r#"[1, 2] rest"#, r#"{"a":}"#, r#""s" "t""#, "  7", "x"];
    insta::assert_snapshot!(render_outcomes(&inputs), @r#"
    {"matched":true,"position":6,"values":[Array([Number("1"), Number("2")])]}
    {"matched":false,"position":0,"values":[]}
    {"matched":true,"position":3,"values":[String("s")]}
    {"matched":true,"position":3,"values":[Number("7")]}
    {"matched":false,"position":0,"values":[]}
    "#);
}
