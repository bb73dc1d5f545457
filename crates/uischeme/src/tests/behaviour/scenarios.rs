//! Scenario bindings for the `uischeme` BDD feature file.
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
    path = "tests/features/uischeme.feature",
    name = "Root rule accepts its tag"
)]
fn root_rule_accepts_its_tag(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/uischeme.feature",
    name = "Unknown top-level tag is rejected"
)]
fn unknown_top_level_tag(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/uischeme.feature",
    name = "Nested rules scope the children of a node"
)]
fn nested_rules_scope_children(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/uischeme.feature",
    name = "Arguments that do not match are rejected"
)]
fn mismatched_arguments(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/uischeme.feature",
    name = "Validation without annotation keeps raw arguments"
)]
fn validation_without_annotation(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/uischeme.feature",
    name = "Common rules apply at any depth"
)]
fn common_rules_at_any_depth(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/uischeme.feature",
    name = "Disallowed nesting is rejected at build time"
)]
fn disallowed_nesting(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/uischeme.feature",
    name = "Rendered schemes rebuild identically"
)]
fn rendered_schemes_rebuild(world: RefCell<TestWorld>) {
    drop(world);
}
