use std::sync::Arc;
use std::time::{Duration, Instant};

use super::capture::CaptureRecorder;
use crate::{CaptureValue, Grammar, GrammarBuilder, MatchError};

fn grammar(define: impl FnOnce(&mut GrammarBuilder)) -> Arc<Grammar> {
    let mut builder = GrammarBuilder::new();
    for (aliases, pattern) in [
        ("WORD", "[a-z]+"),
        ("NUM", "[0-9]+"),
        ("SP", " "),
        ("COMMA", ","),
        ("DOT", r"\."),
    ] {
        builder.lex(aliases, pattern).expect("lexeme");
    }
    define(&mut builder);
    builder.build().expect("grammar")
}

#[test]
fn failed_alternative_leaves_no_captures() {
    let grammar = grammar(|_| {});
    let matcher = grammar
        .expression("(WORD SP NUM) | (WORD SP WORD)")
        .expect("expression");

    let context = matcher.evaluate("abc def").expect("match");
    assert_eq!(context.get("NUM"), None);
    assert_eq!(context.list("WORD").map(<[CaptureValue]>::len), Some(2));
}

#[test]
fn rollback_undoes_changes_newest_first() {
    let mut recorder = CaptureRecorder::new();
    recorder.record("ID", CaptureValue::from("a"), false);
    recorder.record("NUM", CaptureValue::from("1"), true);
    let checkpoint = recorder.checkpoint();
    recorder.record("ID", CaptureValue::from("b"), false);
    recorder.record("NUM", CaptureValue::from("2"), true);
    recorder.record("SP", CaptureValue::from(" "), false);
    recorder.select_case("on");
    recorder.rollback(checkpoint);

    let context = recorder.finish(3);
    assert_eq!(context.text("ID"), Some("a"));
    assert_eq!(
        context.list("NUM"),
        Some([CaptureValue::from("1")].as_slice())
    );
    assert_eq!(context.get("SP"), None);
    assert_eq!(context.case(), None);
    assert_eq!(context.length(), 3);
}

#[test]
fn long_repetitions_match_in_linear_time() {
    let grammar = grammar(|_| {});
    let matcher = grammar.expression("WORD (SP WORD)*").expect("expression");
    let text = vec!["abc"; 20_000].join(" ");

    let started = Instant::now();
    let context = matcher.evaluate(&text).expect("match");
    let elapsed = started.elapsed();

    assert_eq!(
        context.list("WORD").map(<[CaptureValue]>::len),
        Some(20_000)
    );
    assert!(
        elapsed < Duration::from_secs(5),
        "20000 repetitions took {elapsed:?}"
    );
}

#[test]
fn furthest_failure_is_reported() {
    let grammar = grammar(|_| {});
    let matcher = grammar
        .expression("(WORD SP NUM) | NUM")
        .expect("expression");

    assert_eq!(
        matcher.evaluate("abc def"),
        Err(MatchError::NoMatch { offset: 4 })
    );
}

#[test]
fn equal_failures_keep_the_first() {
    let grammar = grammar(|_| {});
    let matcher = grammar.expression("NUM | COMMA").expect("expression");

    assert_eq!(matcher.evaluate("x"), Err(MatchError::NoMatch { offset: 0 }));
}

#[test]
fn failed_definition_leaves_caller_context_untouched() {
    let grammar = grammar(|builder| {
        builder.def("pair").expect("def").seq("WORD COMMA WORD");
    });
    let matcher = grammar.expression("pair? WORD").expect("expression");

    let context = matcher.evaluate("abc").expect("match");
    assert_eq!(context.get("pair"), None);
    assert_eq!(context.text("WORD"), Some("abc"));
}

#[test]
fn failed_case_body_falls_back_without_case() {
    let grammar = grammar(|builder| {
        builder
            .def("item")
            .expect("def")
            .case("num", "SP NUM")
            .seq("WORD");
    });
    let matcher = grammar.expression("item").expect("expression");

    let context = matcher.evaluate("num").expect("match");
    let item = context.context("item").expect("item");
    assert_eq!(item.case(), None);
    assert_eq!(item.text("WORD"), Some("num"));
    assert_eq!(item.length(), 3);
}

#[test]
fn case_id_must_be_a_whole_identifier() {
    let grammar = grammar(|builder| {
        builder.def("item").expect("def").case("num", "").seq("WORD");
    });
    let matcher = grammar.expression("item").expect("expression");

    let context = matcher.evaluate("number").expect("match");
    assert_eq!(
        context.context("item").and_then(|item| item.text("WORD")),
        Some("number")
    );
}

#[test]
fn star_stops_on_an_empty_repetition() {
    let grammar = grammar(|builder| {
        builder.def("nothing").expect("def");
    });
    let matcher = grammar.expression("WORD nothing* NUM").expect("expression");

    let context = matcher.evaluate("abc1").expect("match");
    assert_eq!(context.length(), 4);
}

#[test]
fn plus_accepts_an_empty_first_repetition() {
    let grammar = grammar(|builder| {
        builder.def("nothing").expect("def");
    });
    let matcher = grammar.expression("nothing+ WORD").expect("expression");

    assert!(matcher.matches("abc"));
}

#[test]
fn compiled_expression_outlives_the_grammar() {
    let matcher = {
        let grammar = grammar(|builder| {
            builder.def("num").expect("def").seq("NUM (DOT NUM)?");
        });
        grammar.expression("num (COMMA num)*").expect("expression")
    };

    let context = matcher.evaluate("1.5,2").expect("match");
    assert_eq!(context.list("num").map(<[CaptureValue]>::len), Some(2));
}

#[test]
fn compiled_expression_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<super::CompiledExpression>();
    assert_send_sync::<Grammar>();
}

#[test]
fn captures_serialize_as_nested_json() {
    let grammar = grammar(|builder| {
        builder.def("num").expect("def").seq("NUM (DOT NUM)?");
    });
    let context = grammar
        .expression("WORD SP num")
        .expect("expression")
        .evaluate("pi 3.14")
        .expect("match");

    let json = serde_json::to_value(&context).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "length": 7,
            "captures": {
                "SP": " ",
                "WORD": "pi",
                "num": {
                    "length": 4,
                    "captures": { "DOT": ".", "NUM": ["3", "14"] }
                }
            }
        })
    );
}

fn assertion_grammar() -> Arc<Grammar> {
    let mut builder = GrammarBuilder::new();
    for (aliases, pattern) in [("X", "x"), ("SP", " "), ("W", r"\bword"), ("C", "^c")] {
        builder.lex(aliases, pattern).expect("lexeme");
    }
    builder.build().expect("grammar")
}

#[test]
fn word_boundaries_see_the_text_before_the_cursor() {
    let grammar = assertion_grammar();
    let matcher = grammar.expression("X SP? W").expect("expression");

    assert!(matcher.matches("x word"));
    assert_eq!(
        matcher.evaluate("xword"),
        Err(MatchError::NoMatch { offset: 1 })
    );
}

#[test]
fn start_anchors_match_only_at_the_start_of_input() {
    let grammar = assertion_grammar();

    assert!(grammar.expression("C").expect("expression").matches("c"));
    assert_eq!(
        grammar.expression("X C").expect("expression").evaluate("xc"),
        Err(MatchError::NoMatch { offset: 1 })
    );
}
