//! Tests for uischeme-grammar.


use crate::GrammarBuilder;

/// Lexemes shared by most tests: separators, brackets, identifiers under
/// several aliases, numbers and numeric bounds.
pub(super) fn lexicon() -> GrammarBuilder {
    let mut builder = GrammarBuilder::new();
    let lexemes = [
        ("SP", r"\s+"),
        ("COMMA", ","),
        ("SLASH", "/"),
        ("BR-OPEN", r"\("),
        ("BR-CLOSE", r"\)"),
        ("ANY", "(.+)"),
        (
            "ID|ip|mask|net-ip|net-mask|nets|begin|end|value|list|id",
            "([A-Za-z_][A-Za-z0-9_-]*)",
        ),
        ("TAGS", r"([a-zA-Z0-9_-]+(?:\s*\|\s*[a-zA-Z0-9_-]+)*)"),
        ("OPT", "([a-z][a-z0-9_]*)"),
        ("VALUE", r"(\d+)"),
        ("BOUNDS", r"(-?\d{1,5}|)\.\.(-?\d{1,5}|)"),
        ("LEXIDS", r"([A-Z0-9_-]+(?:\s*\|\s*[A-Z0-9_-]+)*)"),
    ];
    for (aliases, pattern) in lexemes {
        builder.lex(aliases, pattern).expect("lexicon lexeme");
    }
    builder
}
