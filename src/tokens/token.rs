//! Immutable token records with comment back-links
//!
//! Tokens are produced once by a lexer adapter and never mutated afterwards.
//! Each token may point back at the nearest comment that preceded it; comments
//! chain backwards among themselves, which is what the suppression scan walks.
use crate::utils::Span;
use serde::{Deserialize, Serialize};
use std::cell::OnceCell;
use std::fmt;
use std::rc::Rc;

/// Symbolic token kinds visible to the filtering layer.
///
/// A concrete language grammar has far more kinds than these; the filter only
/// distinguishes the ones its decisions depend on. Everything else arrives as
/// `Word` and flows through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Leading keyword of a using/import construct
    Using,
    /// The "static" modifier
    Static,
    /// The "var" keyword
    Var,
    /// Open parenthesis
    OpenParen,
    /// Identifier or type name
    Identifier,
    /// Assignment operator
    Assignment,
    /// Qualified-name separator
    Dot,
    /// Statement terminator
    Semicolon,
    /// Line break token
    Newline,
    /// Comment text (participates in suppression, never in matching)
    Comment,
    /// Any other token that participates in duplicate matching
    Word,
    /// End-of-stream marker token
    EndOfFile,
}

impl TokenKind {
    /// Whether tokens of this kind mark the end of the stream
    pub fn is_end_of_file(self) -> bool {
        matches!(self, Self::EndOfFile)
    }
}

/// An immutable lexical token as seen by the duplicate detector.
#[derive(Debug, Clone)]
pub struct CpdToken {
    kind: TokenKind,
    image: String,
    span: Span,
    previous_comment: Option<Rc<CpdToken>>,
    /// Informational forward link, set at most once after construction.
    /// Traversal never depends on it.
    next: OnceCell<Rc<CpdToken>>,
}

impl CpdToken {
    /// Create a new token
    pub fn new(kind: TokenKind, image: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            image: image.into(),
            span,
            previous_comment: None,
            next: OnceCell::new(),
        }
    }

    /// Create a comment token, optionally chained to an earlier comment
    pub fn comment(
        image: impl Into<String>,
        span: Span,
        previous: Option<Rc<CpdToken>>,
    ) -> Rc<CpdToken> {
        let mut token = Self::new(TokenKind::Comment, image, span);
        token.previous_comment = previous;
        Rc::new(token)
    }

    /// Create the end-of-stream marker token
    pub fn end_of_file(span: Span) -> Self {
        Self::new(TokenKind::EndOfFile, "<EOF>", span)
    }

    /// Attach the nearest preceding comment
    pub fn with_previous_comment(mut self, comment: Rc<CpdToken>) -> Self {
        self.previous_comment = Some(comment);
        self
    }

    /// Symbolic kind of this token
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Textual image of this token
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Source span (begin/end line and column)
    pub fn span(&self) -> Span {
        self.span
    }

    /// Nearest preceding comment, if any
    pub fn previous_comment(&self) -> Option<&Rc<CpdToken>> {
        self.previous_comment.as_ref()
    }

    /// Forward link, if the producer set one
    pub fn next(&self) -> Option<&Rc<CpdToken>> {
        self.next.get()
    }

    /// Set the forward link. The first call wins; later calls are ignored.
    pub fn link_next(&self, next: Rc<CpdToken>) {
        let _ = self.next.set(next);
    }

    /// Whether this token marks the end of the stream
    pub fn is_end_of_file(&self) -> bool {
        self.kind.is_end_of_file()
    }
}

impl fmt::Display for CpdToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' ({:?}) at {}", self.image, self.kind, self.span)
    }
}
