//! Unit and behaviour tests for `uischeme`.


use crate::{Node, Scheme, outline};

/// Menu scheme: pages and groups nest under a menu, modules under pages.
pub(super) const MENU: &str = "\
lex ID [A-Za-z][A-Za-z0-9_-]+
lex SP \\s+
lex ANY .+
root-rule menu
rule menu
\trule group|page
rule group ID
\trule page
rule page ID
\trule module ID
";

/// Form scheme: fields with optional free text, tables of typed fields.
pub(super) const FORM: &str = "\
lex ID [A-Za-z][A-Za-z0-9_-]+
lex SP \\s+
lex VALUE \\S+
lex ANY .+
root-rule form (ID (SP ANY)?)?
rule form
\trule text|ip|table ID (SP ANY)?
rule table ID
\trule text|ip ID SP VALUE (SP ANY)?
";

pub(super) fn tree(text: &str) -> Node {
    outline::parse(text).expect("outline should parse")
}

pub(super) fn scheme(text: &str) -> Scheme {
    Scheme::build(&tree(text)).expect("scheme should build")
}
