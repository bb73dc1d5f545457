//! Scenario bindings for the `uischeme-grammar` BDD feature file.
//!
//! These functions bind Gherkin scenario names to the step definitions in the
//! parent module.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::scenario;

use super::TestWorld;

/// Fixture providing the shared BDD world.
#[fixture]
fn world() -> RefCell<TestWorld> {
    super::world()
}

#[scenario(
    path = "tests/features/uischeme_grammar.feature",
    name = "Sequence of lexemes records each lexeme"
)]
fn sequence_records_each_lexeme(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/uischeme_grammar.feature",
    name = "Missing second identifier fails the match"
)]
fn missing_second_identifier(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/uischeme_grammar.feature",
    name = "Repeated identifier captures a list"
)]
fn repeated_identifier_list(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/uischeme_grammar.feature",
    name = "Trailing separator is reported as trailing input"
)]
fn trailing_separator(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/uischeme_grammar.feature",
    name = "Case dispatch records the fired case"
)]
fn case_dispatch(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/uischeme_grammar.feature",
    name = "Recursive definition nests sub-contexts"
)]
fn recursive_definition(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/uischeme_grammar.feature",
    name = "Case body with arguments"
)]
fn case_body_with_arguments(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/uischeme_grammar.feature",
    name = "Unclosed group is rejected at compile time"
)]
fn unclosed_group(world: RefCell<TestWorld>) {
    drop(world);
}
