//! Validation options.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// What validation does with node arguments that match their grammar.
///
/// ```
/// use uischeme::ValidateMode;
///
/// let mode: ValidateMode = "Validate_Only".parse()?;
/// assert_eq!(mode, ValidateMode::ValidateOnly);
/// assert_eq!(ValidateMode::Annotate.to_string(), "annotate");
/// # Ok::<(), strum::ParseError>(())
/// ```
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ValidateMode {
    /// Replace raw arguments with their parsed capture context.
    #[default]
    Annotate,
    /// Check arguments without touching the tree.
    ValidateOnly,
}

impl ValidateMode {
    /// Returns `true` when validation writes parsed arguments into the tree.
    #[must_use]
    pub const fn annotates(self) -> bool {
        matches!(self, Self::Annotate)
    }
}

/// Errors encountered while parsing a [`ValidateMode`] from text.
pub type ValidateModeParseError = strum::ParseError;
