//! Grammar configuration for matching limits.

use serde::{Deserialize, Serialize};

/// Limits applied while evaluating compiled expressions.
///
/// # Defaults
///
/// - `max_recursion_depth`: 256 nested definition calls
///
/// # Example
///
/// ```
/// use uischeme_grammar::GrammarConfig;
///
/// let config = GrammarConfig::default();
/// assert_eq!(config.max_recursion_depth(), 256);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrammarConfig {
    /// Maximum depth of nested definition calls in one evaluation.
    max_recursion_depth: usize,
}

impl GrammarConfig {
    /// Creates a configuration with an explicit recursion limit.
    #[must_use]
    pub const fn new(max_recursion_depth: usize) -> Self {
        Self {
            max_recursion_depth,
        }
    }

    /// Returns the maximum depth of nested definition calls.
    #[must_use]
    pub const fn max_recursion_depth(&self) -> usize {
        self.max_recursion_depth
    }
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            max_recursion_depth: 256,
        }
    }
}
