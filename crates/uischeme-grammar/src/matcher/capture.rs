//! Capture types for expression matching.
//!
//! A [`CaptureContext`] maps capture names to [`CaptureValue`]s. Lexemes
//! record text, definitions record a nested context, and ids that the
//! repetition analysis marks as lists collect their values in order.

use std::collections::BTreeMap;

use serde::Serialize;

/// A captured value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CaptureValue {
    /// Text recorded by a lexeme.
    Text(String),
    /// Sub-context recorded by a definition.
    Context(CaptureContext),
    /// Values collected by a repeated id, or the groups of one lexeme match.
    List(Vec<CaptureValue>),
}

impl CaptureValue {
    /// Returns the text, if this is a text capture.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Context(_) | Self::List(_) => None,
        }
    }

    /// Returns the nested context, if this is a definition capture.
    #[must_use]
    pub const fn as_context(&self) -> Option<&CaptureContext> {
        match self {
            Self::Context(context) => Some(context),
            Self::Text(_) | Self::List(_) => None,
        }
    }

    /// Returns the items, if this is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            Self::Text(_) | Self::Context(_) => None,
        }
    }
}

impl From<&str> for CaptureValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<CaptureContext> for CaptureValue {
    fn from(context: CaptureContext) -> Self {
        Self::Context(context)
    }
}

/// The structured result of one match attempt.
///
/// Besides the named captures, a context records how many bytes were
/// consumed and, for definitions selected through a case table, which case
/// fired.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CaptureContext {
    length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    case: Option<String>,
    captures: BTreeMap<String, CaptureValue>,
}

impl CaptureContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of bytes consumed.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Returns the id of the case branch that fired, if any.
    #[must_use]
    pub fn case(&self) -> Option<&str> {
        self.case.as_deref()
    }

    /// Looks up a capture by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CaptureValue> {
        self.captures.get(name)
    }

    /// Returns the text captured under `name`, if it is a text capture.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(CaptureValue::as_text)
    }

    /// Returns the sub-context captured under `name`, if any.
    #[must_use]
    pub fn context(&self, name: &str) -> Option<&Self> {
        self.get(name).and_then(CaptureValue::as_context)
    }

    /// Returns the list captured under `name`, if any.
    #[must_use]
    pub fn list(&self, name: &str) -> Option<&[CaptureValue]> {
        self.get(name).and_then(CaptureValue::as_list)
    }

    /// Returns all captures ordered by name.
    #[must_use]
    pub const fn captures(&self) -> &BTreeMap<String, CaptureValue> {
        &self.captures
    }

    /// Returns `true` when nothing was captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.captures.is_empty() && self.case.is_none()
    }
}

/// One change made to a context under construction.
#[derive(Debug)]
enum Undo {
    /// Put back the slot under `name`, or remove it when it was empty.
    Slot {
        name: String,
        previous: Option<CaptureValue>,
    },
    /// Shorten the list under `name` back to `len` items.
    Truncate { name: String, len: usize },
    /// Put back the previous case id.
    Case(Option<String>),
}

/// Journal position a [`CaptureRecorder`] can roll back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Checkpoint(usize);

/// A context under construction, with an undo journal for backtracking.
///
/// Every change is journaled, so a failed branch is undone in time
/// proportional to what it recorded rather than to the whole context.
#[derive(Debug, Default)]
pub(crate) struct CaptureRecorder {
    context: CaptureContext,
    journal: Vec<Undo>,
}

impl CaptureRecorder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) const fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.journal.len())
    }

    /// Undoes every change recorded after `checkpoint`, newest first.
    pub(crate) fn rollback(&mut self, checkpoint: Checkpoint) {
        while self.journal.len() > checkpoint.0 {
            let Some(undo) = self.journal.pop() else {
                break;
            };
            let captures = &mut self.context.captures;
            match undo {
                Undo::Slot {
                    name,
                    previous: Some(value),
                } => {
                    captures.insert(name, value);
                }
                Undo::Slot {
                    name,
                    previous: None,
                } => {
                    captures.remove(&name);
                }
                Undo::Truncate { name, len } => {
                    if let Some(CaptureValue::List(items)) = captures.get_mut(&name) {
                        items.truncate(len);
                    }
                }
                Undo::Case(previous) => self.context.case = previous,
            }
        }
    }

    /// Records `value` under `name`, appending when `as_list` is set.
    pub(crate) fn record(&mut self, name: &str, value: CaptureValue, as_list: bool) {
        let captures = &mut self.context.captures;
        let undo = if as_list {
            match captures.get_mut(name) {
                Some(CaptureValue::List(items)) => {
                    let len = items.len();
                    items.push(value);
                    Undo::Truncate {
                        name: name.to_owned(),
                        len,
                    }
                }
                Some(slot) => Undo::Slot {
                    name: name.to_owned(),
                    previous: Some(std::mem::replace(slot, CaptureValue::List(vec![value]))),
                },
                None => {
                    captures.insert(name.to_owned(), CaptureValue::List(vec![value]));
                    Undo::Slot {
                        name: name.to_owned(),
                        previous: None,
                    }
                }
            }
        } else {
            Undo::Slot {
                name: name.to_owned(),
                previous: captures.insert(name.to_owned(), value),
            }
        };
        self.journal.push(undo);
    }

    /// Marks `case` as the case branch that fired.
    pub(crate) fn select_case(&mut self, case: &str) {
        let previous = self.context.case.replace(case.to_owned());
        self.journal.push(Undo::Case(previous));
    }

    /// Returns the finished context, `length` bytes long.
    pub(crate) fn finish(self, length: usize) -> CaptureContext {
        let mut context = self.context;
        context.length = length;
        context
    }
}
