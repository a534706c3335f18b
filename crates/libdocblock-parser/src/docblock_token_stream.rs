//! Bounded-lookahead stream of [`DocblockToken`]s over some
//! [`DocblockTokenSource`].

use std::collections::VecDeque;

use crate::token::DocblockToken;
use crate::token::DocblockTokenKind;
use crate::token_source::DocblockTokenSource;

/// Bounded-lookahead stream of [`DocblockToken`]s over some
/// [`DocblockTokenSource`].
///
/// The directive parser needs at most two tokens of lookahead (to tell a
/// named argument `name = value` from a positional constant `NAME`), which
/// it gets through [`peek_nth()`](Self::peek_nth). Tokens are buffered in a
/// [`VecDeque`]; `consume()` pops from the front.
pub struct DocblockTokenStream<'src, TTokenSource: DocblockTokenSource<'src>> {
    token_source: TTokenSource,
    buffer: VecDeque<DocblockToken<'src>>,
}

impl<'src, TTokenSource: DocblockTokenSource<'src>> DocblockTokenStream<'src, TTokenSource> {
    /// Advance to the next token and return it as an owned value.
    ///
    /// Returns `None` if the stream is exhausted.
    pub fn consume(&mut self) -> Option<DocblockToken<'src>> {
        self.ensure_buffer_has(1);
        self.buffer.pop_front()
    }

    /// Returns the number of tokens currently buffered (unconsumed).
    pub fn current_buffer_len(&self) -> usize {
        self.buffer.len()
    }

    fn ensure_buffer_has(&mut self, count: usize) {
        while self.buffer.len() < count {
            if let Some(token) = self.token_source.next() {
                self.buffer.push_back(token);
            } else {
                break;
            }
        }
    }

    /// Returns `true` if there are no more tokens to consume, or if the next
    /// token is `Eof`.
    pub fn is_at_end(&mut self) -> bool {
        match self.peek() {
            None => true,
            Some(token) => matches!(token.kind, DocblockTokenKind::Eof),
        }
    }

    /// Creates a new token stream from a token source.
    pub fn new(token_source: TTokenSource) -> Self {
        Self {
            token_source,
            buffer: VecDeque::new(),
        }
    }

    /// Peek at the next token without consuming it.
    #[inline]
    pub fn peek(&mut self) -> Option<&DocblockToken<'src>> {
        self.peek_nth(0)
    }

    /// Peek at the nth token ahead (0-indexed from the next unconsumed
    /// token).
    ///
    /// Returns `None` if the stream ends before reaching position n.
    pub fn peek_nth(&mut self, n: usize) -> Option<&DocblockToken<'src>> {
        self.ensure_buffer_has(n + 1);
        self.buffer.get(n)
    }
}
