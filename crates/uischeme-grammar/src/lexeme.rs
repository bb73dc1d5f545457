//! Lexeme registry: named leaf matchers backed by regular expressions.
//!
//! A lexeme is matched anchored at the current cursor, against the whole
//! input, so assertions such as `^` and `\b` see the text on both sides of
//! the cursor.
//!
//! Every lexeme is nullable from the grammar's point of view: a pattern that
//! finds nothing at the cursor reads as an empty match there. An empty match
//! never advances the cursor, so the compiled `Lex` step treats it as a miss.

use std::collections::HashMap;
use std::sync::Arc;

use regex_automata::meta::Regex;
use regex_automata::{Anchored, Input, PatternID};
use tracing::debug;

use crate::error::GrammarError;
use crate::matcher::CaptureValue;
use crate::names::split_aliases;

/// A compiled leaf matcher.
#[derive(Debug)]
pub struct Lexeme {
    pattern: String,
    regex: Regex,
    nullable: bool,
}

/// A non-empty match of a lexeme at a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LexemeMatch {
    /// Byte offset just past the match.
    pub(crate) end: usize,
    /// Value to record, if the match produced one.
    pub(crate) value: Option<CaptureValue>,
}

impl Lexeme {
    /// Compiles `pattern` into a lexeme.
    ///
    /// # Errors
    ///
    /// Returns [`GrammarError::InvalidLexemePattern`] when `pattern` is not a
    /// valid regular expression.
    pub fn compile(name: &str, pattern: &str) -> Result<Self, GrammarError> {
        let regex = Regex::new(pattern)
            .map_err(|err| GrammarError::invalid_lexeme_pattern(name, err.to_string()))?;
        let nullable = regex.is_match("");
        Ok(Self {
            pattern: pattern.to_owned(),
            regex,
            nullable,
        })
    }

    /// Returns the pattern as written.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns whether the pattern itself accepts the empty string.
    ///
    /// Lexemes that are not nullable still read as an empty match when
    /// nothing matches at the cursor; this flag reports what the pattern
    /// accepts on its own.
    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Returns the number of capture groups in the pattern.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.regex
            .group_info()
            .group_len(PatternID::ZERO)
            .saturating_sub(1)
    }

    /// Matches the lexeme at byte offset `pos` of `text`.
    ///
    /// The recorded value is the whole match when the pattern has no capture
    /// groups, the first group when it has one, and the list of all groups
    /// otherwise. A single group that did not participate records nothing.
    pub(crate) fn match_at(&self, text: &str, pos: usize) -> Option<LexemeMatch> {
        if !text.is_char_boundary(pos) {
            return None;
        }
        let input = Input::new(text).range(pos..).anchored(Anchored::Yes);
        let mut captures = self.regex.create_captures();
        self.regex.search_captures(&input, &mut captures);
        let whole = captures.get_match()?;
        if whole.is_empty() {
            return None;
        }

        let group = |index: usize| {
            captures
                .get_group(index)
                .and_then(|span| text.get(span.range()))
        };
        let value = match self.group_count() {
            0 => text.get(whole.range()).map(CaptureValue::from),
            1 => group(1).map(CaptureValue::from),
            count => Some(CaptureValue::List(
                (1..=count)
                    .map(|index| CaptureValue::from(group(index).unwrap_or_default()))
                    .collect(),
            )),
        };

        Some(LexemeMatch {
            end: whole.end(),
            value,
        })
    }
}

/// One `lex` declaration: a pattern shared by one or more aliases.
#[derive(Debug, Clone)]
pub struct LexemeDeclaration {
    aliases: Vec<String>,
    lexeme: Arc<Lexeme>,
}

impl LexemeDeclaration {
    /// Returns the aliases registered by this declaration, in order.
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Returns the shared lexeme.
    #[must_use]
    pub fn lexeme(&self) -> &Lexeme {
        &self.lexeme
    }
}

/// Name to lexeme table with duplicate checks at registration time.
#[derive(Debug, Default, Clone)]
pub struct LexemeRegistry {
    by_name: HashMap<String, Arc<Lexeme>>,
    declarations: Vec<LexemeDeclaration>,
}

impl LexemeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `pattern` under every alias of the pipe-separated `aliases`.
    ///
    /// Nothing is registered when any alias is already taken.
    ///
    /// # Errors
    ///
    /// Returns an error if the alias list is empty, an alias is already
    /// registered (or repeated within the list), or the pattern is invalid.
    pub fn register(&mut self, aliases: &str, pattern: &str) -> Result<(), GrammarError> {
        let names = split_aliases(aliases);
        if names.is_empty() {
            return Err(GrammarError::EmptyAliasList {
                list: aliases.to_owned(),
            });
        }

        for (index, name) in names.iter().enumerate() {
            let repeated = names.iter().take(index).any(|earlier| earlier == name);
            if repeated || self.by_name.contains_key(name) {
                return Err(GrammarError::DuplicateLexeme { name: name.clone() });
            }
        }

        let lexeme = Arc::new(Lexeme::compile(aliases, pattern)?);
        for name in &names {
            self.by_name.insert(name.clone(), Arc::clone(&lexeme));
        }
        debug!(aliases = ?names, pattern, nullable = lexeme.is_nullable(), "registered lexeme");
        self.declarations.push(LexemeDeclaration {
            aliases: names,
            lexeme,
        });
        Ok(())
    }

    /// Looks up a lexeme by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Lexeme> {
        self.by_name.get(name).map(AsRef::as_ref)
    }

    pub(crate) fn shared(&self, name: &str) -> Option<Arc<Lexeme>> {
        self.by_name.get(name).cloned()
    }

    /// Returns whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Returns the declarations in registration order.
    #[must_use]
    pub fn declarations(&self) -> &[LexemeDeclaration] {
        &self.declarations
    }

    /// Returns the number of registered names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
