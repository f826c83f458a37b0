//! Token source contract consumed by the filtering engine
//!
//! A source is strictly single-pass: every call to `next_token` advances the
//! stream irreversibly. The engine guarantees it asks for each position at
//! most once, no matter how many lookahead cursors eventually reach it.
use super::token::CpdToken;
use std::rc::Rc;

/// A pull-based, single-pass producer of tokens.
pub trait TokenSource {
    /// Pull the next token, or `None` once the underlying stream is drained.
    fn next_token(&mut self) -> Option<Rc<CpdToken>>;

    /// Record the name of the underlying source for diagnostics.
    /// Has no effect on tokenization.
    fn set_source_name(&mut self, _name: &str) {}
}

/// An in-memory token source.
///
/// Links forward pointers between consecutive tokens on construction and
/// counts pulls, which doubles as the instrumentation the single-pull tests
/// assert against.
#[derive(Debug)]
pub struct VecTokenSource {
    tokens: std::vec::IntoIter<Rc<CpdToken>>,
    source_name: Option<String>,
    pulls: usize,
}

impl VecTokenSource {
    /// Create a source over the given tokens, in order
    pub fn new(tokens: Vec<CpdToken>) -> Self {
        let tokens: Vec<Rc<CpdToken>> = tokens.into_iter().map(Rc::new).collect();
        for pair in tokens.windows(2) {
            pair[0].link_next(pair[1].clone());
        }
        Self {
            tokens: tokens.into_iter(),
            source_name: None,
            pulls: 0,
        }
    }

    /// Number of times `next_token` has been called
    pub fn pull_count(&self) -> usize {
        self.pulls
    }

    /// Diagnostic source name, if one was set
    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }
}

impl TokenSource for VecTokenSource {
    fn next_token(&mut self) -> Option<Rc<CpdToken>> {
        self.pulls += 1;
        self.tokens.next()
    }

    fn set_source_name(&mut self, name: &str) {
        self.source_name = Some(name.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenKind;
    use crate::utils::Span;

    fn word(image: &str) -> CpdToken {
        CpdToken::new(TokenKind::Word, image, Span::dummy())
    }

    #[test]
    fn test_tokens_come_back_in_order() {
        let mut source = VecTokenSource::new(vec![word("a"), word("b"), word("c")]);
        assert_eq!(source.next_token().unwrap().image(), "a");
        assert_eq!(source.next_token().unwrap().image(), "b");
        assert_eq!(source.next_token().unwrap().image(), "c");
        assert!(source.next_token().is_none());
    }

    #[test]
    fn test_pull_count_includes_exhausted_pulls() {
        let mut source = VecTokenSource::new(vec![word("a")]);
        source.next_token();
        source.next_token();
        assert_eq!(source.pull_count(), 2);
    }

    #[test]
    fn test_forward_links() {
        let mut source = VecTokenSource::new(vec![word("a"), word("b")]);
        let a = source.next_token().unwrap();
        assert_eq!(a.next().expect("forward link").image(), "b");
        let b = source.next_token().unwrap();
        assert!(b.next().is_none());
    }

    #[test]
    fn test_source_name_is_diagnostic_only() {
        let mut source = VecTokenSource::new(vec![word("a")]);
        source.set_source_name("Program.cs");
        assert_eq!(source.source_name(), Some("Program.cs"));
        assert_eq!(source.next_token().unwrap().image(), "a");
    }
}
