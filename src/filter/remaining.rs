//! Restartable lookahead over a single-pass token source
//!
//! The engine and every lookahead cursor read from one shared, append-only
//! buffer. The first reader to reach a position past the buffer's end pulls
//! from the source and appends; every other reader finds the buffered copy.
//! This is what lets a language filter scan arbitrarily far ahead, repeatedly,
//! over a source that can only be pulled once per position.

use super::language::StopFn;
use crate::tokens::{CpdToken, TokenSource};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared stream state: the source, the append-only buffer, and the
/// engine's drain position.
///
/// Single writer (whoever holds the `RefCell` borrow while appending),
/// multiple reader positions. Existing entries are never mutated.
pub(crate) struct StreamState<S: TokenSource> {
    source: S,
    buffer: Vec<Rc<CpdToken>>,
    head: usize,
    end_reached: bool,
    stop: StopFn,
    pulls: usize,
}

impl<S: TokenSource> StreamState<S> {
    pub(crate) fn new(source: S, stop: StopFn) -> Self {
        Self {
            source,
            buffer: Vec::new(),
            head: 0,
            end_reached: false,
            stop,
            pulls: 0,
        }
    }

    /// Ensure the buffer covers `index`. Returns false when the stream ends
    /// first. Once the stop token (or source exhaustion) has been seen the
    /// end is latched and the source is never asked again.
    fn fill_to(&mut self, index: usize) -> bool {
        while self.buffer.len() <= index {
            if self.end_reached {
                return false;
            }
            self.pulls += 1;
            match self.source.next_token() {
                Some(token) if !(self.stop)(&token) => self.buffer.push(token),
                _ => {
                    self.end_reached = true;
                    return false;
                }
            }
        }
        true
    }

    /// Token at `index`, pulling from the source if needed.
    pub(crate) fn get(&mut self, index: usize) -> Option<Rc<CpdToken>> {
        if self.fill_to(index) {
            Some(Rc::clone(&self.buffer[index]))
        } else {
            None
        }
    }

    /// Position of the next token the engine will drain.
    pub(crate) fn head(&self) -> usize {
        self.head
    }

    /// Drain the next token for the engine's primary loop.
    pub(crate) fn advance_head(&mut self) -> Option<Rc<CpdToken>> {
        let head = self.head;
        let token = self.get(head)?;
        self.head += 1;
        Some(token)
    }

    /// Number of source pulls so far.
    pub(crate) fn pulls(&self) -> usize {
        self.pulls
    }

    pub(crate) fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

/// Lazy, finite, restartable view over the tokens still ahead of the engine.
///
/// `iter()` may be called any number of times; each call yields an
/// independently positioned cursor, and interleaved cursors observe the
/// identical sequence.
pub struct RemainingTokens<'a, S: TokenSource> {
    state: &'a RefCell<StreamState<S>>,
    anchor: usize,
}

impl<'a, S: TokenSource> RemainingTokens<'a, S> {
    pub(crate) fn new(state: &'a RefCell<StreamState<S>>, anchor: usize) -> Self {
        Self { state, anchor }
    }

    /// Start a fresh pass over the remaining tokens.
    pub fn iter(&self) -> RemainingCursor<'a, S> {
        RemainingCursor {
            state: self.state,
            position: self.anchor,
        }
    }
}

impl<'a, S: TokenSource> IntoIterator for &RemainingTokens<'a, S> {
    type Item = Rc<CpdToken>;
    type IntoIter = RemainingCursor<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One independently positioned pass over the remaining tokens.
pub struct RemainingCursor<'a, S: TokenSource> {
    state: &'a RefCell<StreamState<S>>,
    position: usize,
}

impl<S: TokenSource> Iterator for RemainingCursor<'_, S> {
    type Item = Rc<CpdToken>;

    fn next(&mut self) -> Option<Rc<CpdToken>> {
        let token = self.state.borrow_mut().get(self.position)?;
        self.position += 1;
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::language::stop_at_end_of_file;
    use crate::tokens::{TokenKind, VecTokenSource};
    use crate::utils::Span;

    fn word(image: &str) -> CpdToken {
        CpdToken::new(TokenKind::Word, image, Span::dummy())
    }

    fn state_over(images: &[&str]) -> RefCell<StreamState<VecTokenSource>> {
        let mut tokens: Vec<CpdToken> = images.iter().map(|i| word(i)).collect();
        tokens.push(CpdToken::end_of_file(Span::dummy()));
        RefCell::new(StreamState::new(
            VecTokenSource::new(tokens),
            stop_at_end_of_file,
        ))
    }

    fn images(cursor: RemainingCursor<'_, VecTokenSource>) -> Vec<String> {
        cursor.map(|t| t.image().to_string()).collect()
    }

    #[test]
    fn test_two_cursors_see_identical_sequences() {
        let state = state_over(&["a", "b", "c"]);
        let remaining = RemainingTokens::new(&state, 0);

        let first = images(remaining.iter());
        let second = images(remaining.iter());
        assert_eq!(first, vec!["a", "b", "c"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_interleaved_cursors_pull_each_position_once() {
        let state = state_over(&["a", "b", "c"]);
        let remaining = RemainingTokens::new(&state, 0);

        let mut first = remaining.iter();
        let mut second = remaining.iter();
        assert_eq!(first.next().unwrap().image(), "a");
        assert_eq!(second.next().unwrap().image(), "a");
        assert_eq!(second.next().unwrap().image(), "b");
        assert_eq!(first.next().unwrap().image(), "b");
        assert_eq!(first.next().unwrap().image(), "c");
        assert!(first.next().is_none());
        assert_eq!(second.next().unwrap().image(), "c");
        assert!(second.next().is_none());

        // 3 tokens + the stop token, each pulled exactly once
        assert_eq!(state.borrow().pulls(), 4);
    }

    #[test]
    fn test_cursor_stops_at_stop_token_without_repulling() {
        let state = state_over(&["a"]);
        let remaining = RemainingTokens::new(&state, 0);

        let mut cursor = remaining.iter();
        assert!(cursor.next().is_some());
        assert!(cursor.next().is_none());
        assert!(cursor.next().is_none());
        assert_eq!(state.borrow().pulls(), 2);

        // A cursor created after the end was latched pulls nothing new
        let late = images(remaining.iter());
        assert_eq!(late, vec!["a"]);
        assert_eq!(state.borrow().pulls(), 2);
    }

    #[test]
    fn test_anchor_offsets_the_view() {
        let state = state_over(&["a", "b", "c"]);
        let remaining = RemainingTokens::new(&state, 1);
        assert_eq!(images(remaining.iter()), vec!["b", "c"]);
    }
}
