//! Recursive-descent parser for pattern expressions.
//!
//! ```text
//! alternation := sequence ('|' sequence)*
//! sequence    := postfix+
//! postfix     := group ('?' | '*' | '+')?
//! group       := '(' alternation ')' | identifier
//! ```

use crate::error::GrammarError;
use crate::pattern::PatternNode;
use crate::token::{Flavor, Token, TokenKind, tokenize};

/// What an identifier resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Symbol {
    Lexeme,
    Definition,
}

/// Parses `text` into a syntax tree. Empty text yields `None`.
pub(crate) fn parse<R>(
    text: &str,
    flavor: Flavor,
    resolve: R,
) -> Result<Option<PatternNode>, GrammarError>
where
    R: Fn(&str) -> Option<Symbol>,
{
    let tokens = tokenize(text, flavor)?;
    if tokens.is_empty() {
        return Ok(None);
    }

    let mut parser = Parser {
        tokens,
        cursor: 0,
        end: text.len(),
        flavor,
        resolve,
    };
    let root = parser.alternation()?;

    if let Some(token) = parser.peek() {
        return Err(token.kind.quantifier().map_or_else(
            || GrammarError::trailing_tokens(token.kind.text(), token.offset),
            |quantifier| GrammarError::DanglingQuantifier {
                quantifier,
                offset: token.offset,
            },
        ));
    }

    Ok(Some(root))
}

struct Parser<'t, R> {
    tokens: Vec<Token<'t>>,
    cursor: usize,
    end: usize,
    flavor: Flavor,
    resolve: R,
}

impl<'t, R> Parser<'t, R>
where
    R: Fn(&str) -> Option<Symbol>,
{
    fn peek(&self) -> Option<Token<'t>> {
        self.tokens.get(self.cursor).copied()
    }

    fn peek_kind(&self) -> Option<TokenKind<'t>> {
        self.peek().map(|token| token.kind)
    }

    fn offset(&self) -> usize {
        self.peek().map_or(self.end, |token| token.offset)
    }

    fn advance(&mut self) {
        self.cursor += 1;
    }

    fn alternation(&mut self) -> Result<PatternNode, GrammarError> {
        let mut alternatives = vec![self.sequence()?];

        while self.peek_kind() == Some(TokenKind::Alternation) {
            let bar = self.offset();
            self.advance();
            match self.peek_kind() {
                None | Some(TokenKind::Alternation | TokenKind::CloseGroup) => {
                    return Err(GrammarError::EmptyAlternative { offset: bar });
                }
                Some(_) => alternatives.push(self.sequence()?),
            }
        }

        Ok(collapse(alternatives, PatternNode::Set))
    }

    fn sequence(&mut self) -> Result<PatternNode, GrammarError> {
        let mut items = Vec::new();
        while let Some(item) = self.postfix()? {
            items.push(item);
        }

        if items.is_empty() {
            return Err(self.missing_operand());
        }
        Ok(collapse(items, PatternNode::Seq))
    }

    fn postfix(&mut self) -> Result<Option<PatternNode>, GrammarError> {
        let Some(operand) = self.group()? else {
            return Ok(None);
        };

        let node = match self.peek_kind() {
            Some(TokenKind::Optional) => PatternNode::Opt(Box::new(operand)),
            Some(TokenKind::Star) => PatternNode::Star(Box::new(operand)),
            Some(TokenKind::Plus) => PatternNode::Plus(Box::new(operand)),
            _ => return Ok(Some(operand)),
        };
        self.advance();
        Ok(Some(node))
    }

    fn group(&mut self) -> Result<Option<PatternNode>, GrammarError> {
        let Some(token) = self.peek() else {
            return Ok(None);
        };

        match token.kind {
            TokenKind::OpenGroup => {
                self.advance();
                match self.peek_kind() {
                    None => return Err(GrammarError::UnclosedGroup { offset: token.offset }),
                    Some(TokenKind::CloseGroup) => {
                        return Err(GrammarError::EmptyGroup { offset: token.offset });
                    }
                    Some(_) => {}
                }
                let inner = self.alternation()?;
                if self.peek_kind() != Some(TokenKind::CloseGroup) {
                    return Err(GrammarError::UnclosedGroup { offset: token.offset });
                }
                self.advance();
                Ok(Some(inner))
            }
            TokenKind::Identifier(name) => {
                self.advance();
                self.resolve_identifier(name, token.offset).map(Some)
            }
            TokenKind::CloseGroup
            | TokenKind::Optional
            | TokenKind::Star
            | TokenKind::Plus
            | TokenKind::Alternation => Ok(None),
        }
    }

    fn resolve_identifier(&self, name: &str, offset: usize) -> Result<PatternNode, GrammarError> {
        match ((self.resolve)(name), self.flavor) {
            (Some(Symbol::Lexeme), _) => Ok(PatternNode::Lex(name.to_owned())),
            (Some(Symbol::Definition), Flavor::Full) => Ok(PatternNode::Def(name.to_owned())),
            (Some(Symbol::Definition), Flavor::Simple) | (None, _) => {
                Err(GrammarError::unknown_identifier(name, offset))
            }
        }
    }

    /// Builds the error for a sequence that could not start.
    fn missing_operand(&self) -> GrammarError {
        let offset = self.offset();
        let kind = self.peek_kind();
        if let Some(quantifier) = kind.and_then(TokenKind::quantifier) {
            return GrammarError::DanglingQuantifier { quantifier, offset };
        }
        match kind {
            Some(TokenKind::Alternation) | None => GrammarError::EmptyAlternative { offset },
            Some(other) => GrammarError::trailing_tokens(other.text(), offset),
        }
    }
}

/// Returns the single element of `items`, or wraps them with `wrap`.
fn collapse(mut items: Vec<PatternNode>, wrap: fn(Vec<PatternNode>) -> PatternNode) -> PatternNode {
    if items.len() == 1 {
        if let Some(only) = items.pop() {
            return only;
        }
    }
    wrap(items)
}
