//! Snapshot tests for the `uischeme-grammar` end-to-end suite.
//!
//! These tests use `insta` to validate stable, user-facing outputs.

use insta::assert_snapshot;

use uischeme_grammar::{Flavor, GrammarBuilder, GrammarError};

fn builder() -> GrammarBuilder {
    let mut builder = GrammarBuilder::new();
    for (aliases, pattern) in [
        ("ID|name", "[a-z]+"),
        ("SP", " "),
        ("EQ", "="),
        ("VALUE", "[0-9]+"),
        ("COMMA", ","),
    ] {
        builder
            .lex(aliases, pattern)
            .unwrap_or_else(|err| panic!("lexeme: {err}"));
    }
    builder
}

#[test]
fn snapshot_canonical_expressions() {
    let grammar = builder()
        .build()
        .unwrap_or_else(|err| panic!("grammar: {err}"));
    let sources = [
        "  ID  (  SP  VALUE  )  ? ",
        "((ID))",
        "ID|VALUE|(ID EQ VALUE)",
        "(ID (COMMA ID)*)+ SP?",
        "name EQ (VALUE | name)",
    ];

    let rendered: Vec<_> = sources
        .iter()
        .map(|source| {
            grammar
                .parse(source, Flavor::Full)
                .map_or_else(|err| format!("error: {err}"), |expr| expr.canonical())
        })
        .collect();
    assert_snapshot!(rendered.join("\n"), @r"
    ID (SP VALUE)?
    ID
    ID | VALUE | (ID EQ VALUE)
    (ID (COMMA ID)*)+ SP?
    name EQ (VALUE | name)
    ");
}

#[test]
fn snapshot_compile_error_messages() {
    let grammar = builder()
        .build()
        .unwrap_or_else(|err| panic!("grammar: {err}"));
    let sources = ["ID (SP", "ID ()", "ID |", "ID ? ?", "*", "ID $", "ID missing", "ID )"];

    let messages: Vec<_> = sources
        .iter()
        .map(|source| {
            grammar
                .parse(source, Flavor::Full)
                .map_or_else(|err| err.to_string(), |expr| format!("ok: {expr}"))
        })
        .collect();
    assert_snapshot!(messages.join("\n"), @r#"
    group opened at offset 3 is not closed
    empty group at offset 3
    empty alternative at offset 3
    quantifier '?' at offset 5 has no operand
    quantifier '*' at offset 0 has no operand
    unexpected character '$' at offset 3
    unknown lexeme or definition "missing" at offset 3
    unexpected token ")" at offset 3
    "#);
}

#[test]
fn snapshot_build_error_messages() {
    let mut duplicate = builder();
    let lexeme = duplicate
        .lex("NEW|name", "x")
        .map(|_| ())
        .expect_err("duplicate alias");

    let mut nested = builder();
    nested
        .def("pair")
        .unwrap_or_else(|err| panic!("def: {err}"))
        .seq("ID EQ (VALUE");
    let definition = nested.build().map(|_| ()).expect_err("unclosed group");

    let mut cases = builder();
    cases
        .def("flag")
        .unwrap_or_else(|err| panic!("def: {err}"))
        .case("on|off", "")
        .case("off", "");
    let case = cases.build().map(|_| ()).expect_err("duplicate case");

    let invalid = builder()
        .lex("BROKEN", "[a-")
        .map(|_| ())
        .expect_err("invalid pattern");
    let is_invalid_pattern = matches!(invalid, GrammarError::InvalidLexemePattern { .. });

    assert_snapshot!(
        format!("{lexeme}\n{definition}\n{case}\n{is_invalid_pattern}"),
        @r"
    lexeme name is already defined
    in definition pair: group opened at offset 6 is not closed
    in definition flag: case off is already defined
    true
    "
    );
}

#[test]
fn snapshot_capture_json() {
    let mut builder = builder();
    builder
        .def("option")
        .unwrap_or_else(|err| panic!("def: {err}"))
        .case("on|off", "")
        .seq("ID EQ VALUE");
    let grammar = builder
        .build()
        .unwrap_or_else(|err| panic!("grammar: {err}"));
    let context = grammar
        .expression("option (COMMA option)*")
        .unwrap_or_else(|err| panic!("expression: {err}"))
        .evaluate("on,size=12")
        .unwrap_or_else(|err| panic!("evaluate: {err}"));

    let json = serde_json::to_string_pretty(&context)
        .unwrap_or_else(|err| panic!("serialize: {err}"));
    assert_snapshot!(json, @r#"
    {
      "length": 10,
      "captures": {
        "COMMA": [
          ","
        ],
        "option": [
          {
            "length": 2,
            "case": "on",
            "captures": {}
          },
          {
            "length": 7,
            "captures": {
              "EQ": "=",
              "ID": "size",
              "VALUE": "12"
            }
          }
        ]
      }
    }
    "#);
}
