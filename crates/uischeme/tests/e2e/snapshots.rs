//! Snapshot tests for the `uischeme` end-to-end suite.
//!
//! These tests use `insta` to validate stable, user-facing outputs.

use insta::assert_snapshot;

use uischeme::{Node, Scheme, ValidateMode, outline};

fn build(text: &str) -> Result<Scheme, String> {
    let tree = outline::parse(text).map_err(|err| err.to_string())?;
    Scheme::build(&tree).map_err(|err| err.to_string())
}

#[test]
fn snapshot_rendered_scheme() {
    let scheme = build(concat!(
        "root-rule form (ID (SP ANY)?)?\n",
        "lex ID [A-Za-z][A-Za-z0-9_-]+\n",
        "lex SP \\s+\n",
        "lex ANY .+\n",
        "def bounds\n",
        "\tseq NUM? RANGE NUM?\n",
        "\tcase any\n",
        "lex NUM | INT -?[0-9]+\n",
        "lex RANGE \\.\\.\n",
        "rule form\n",
        "\trule text|ip|table ID (SP ANY)?\n",
        "\tchildren note\n",
        "rule table   ID\n",
    ))
    .unwrap_or_else(|err| panic!("scheme: {err}"));

    assert_snapshot!(scheme.to_string().replace('\t', "    "), @r"
    lex ID [A-Za-z][A-Za-z0-9_-]+
    lex SP \s+
    lex ANY .+
    lex NUM|INT -?[0-9]+
    lex RANGE \.\.
    def bounds
        seq NUM? RANGE NUM?
        case any
    rule form
        rule text|ip|table ID (SP ANY)?
        children note
    rule table ID
    root-rule form (ID (SP ANY)?)?
    ");
}

#[test]
fn snapshot_build_error_messages() {
    let sources = [
        "o",
        "lex",
        "lex {}",
        "lex ID",
        "def a b",
        "root-rule ogo sp",
        "lex O 1\nlex O 2",
        "def x\n\tseq MISSING",
        "lex ID [a-z]+\nrule a\n\tchildren b ID |",
        "rule a\n\tcase b",
        "\trule a",
    ];

    let messages: Vec<_> = sources
        .iter()
        .map(|source| build(source).map_or_else(|err| err, |_| "ok".to_owned()))
        .collect();
    assert_snapshot!(messages.join("\n"), @r#"
    node "o" is not allowed here in row 1
    lex: missing alias list in row 1
    lex: bad alias list "{}" in row 1
    lex: missing pattern in row 1
    def: bad definition name "a b" in row 1
    root-rule in row 1: unknown lexeme or definition "sp" at offset 0
    lex in row 2: lexeme O is already defined
    def in row 1: in definition x: unknown lexeme or definition "MISSING" at offset 0
    children in row 3: empty alternative at offset 3
    node "case" is not allowed here in row 2
    row 1 is indented 1 levels, at most 0 allowed
    "#);
}

#[test]
fn snapshot_validation_error_messages() {
    let scheme = build(concat!(
        "lex ID [a-z]+\n",
        "root-rule menu\n",
        "\trule page ID\n",
    ))
    .unwrap_or_else(|err| panic!("scheme: {err}"));
    let documents = [
        "menu\n\tpage home\n",
        "page home\n",
        "menu\n\tpage\n",
        "menu\n\tpage Home\n",
        "menu\n\tpage home page\n",
        "menu\n  page home\n",
    ];

    let messages: Vec<_> = documents
        .iter()
        .map(|text| {
            let mut tree = match outline::parse(text) {
                Ok(tree) => tree,
                Err(err) => return err.to_string(),
            };
            scheme
                .validate(&mut tree, ValidateMode::Annotate)
                .map_or_else(|err| err.to_string(), |()| "ok".to_owned())
        })
        .collect();
    assert_snapshot!(messages.join("\n"), @r#"
    ok
    invalid node "page" in row 1
    invalid arguments of node "page" in row 2: syntax error at offset 0
    invalid arguments of node "page" in row 2: syntax error at offset 0
    invalid arguments of node "page" in row 2: unexpected trailing input at offset 4
    row 2 is indented with spaces
    "#);
}

#[test]
fn snapshot_annotated_tree_json() {
    let scheme = build(concat!(
        "lex ID [a-z]+\n",
        "lex SP \\s+\n",
        "lex NUM [0-9]+\n",
        "root-rule field ID (SP NUM)?\n",
        "root-rule note\n",
    ))
    .unwrap_or_else(|err| panic!("scheme: {err}"));
    let mut tree: Node = outline::parse("field size 12\nfield name\nnote free text\n")
        .unwrap_or_else(|err| panic!("document: {err}"));
    scheme
        .validate(&mut tree, ValidateMode::Annotate)
        .unwrap_or_else(|err| panic!("validate: {err}"));

    let json =
        serde_json::to_string_pretty(&tree).unwrap_or_else(|err| panic!("serialize: {err}"));
    assert_snapshot!(json, @r#"
    {
      "tag": "",
      "children": [
        {
          "tag": "field",
          "argument": {
            "parsed": {
              "length": 7,
              "captures": {
                "ID": "size",
                "NUM": "12",
                "SP": " "
              }
            }
          },
          "row": 1
        },
        {
          "tag": "field",
          "argument": {
            "parsed": {
              "length": 4,
              "captures": {
                "ID": "name"
              }
            }
          },
          "row": 2
        },
        {
          "tag": "note",
          "argument": {
            "raw": "free text"
          },
          "row": 3
        }
      ],
      "row": 0
    }
    "#);
}
