//! C# specific filtering rules
//!
//! Two concerns on top of the generic engine: newline tokens are never part
//! of duplicate analysis, and `using` import directives can optionally be
//! excluded so files differing only in their import lists still match.
//!
//! The directive decision needs lookahead. `using` also opens resource
//! statements (`using (var reader = ...)`, `using var reader = ...;`) and
//! alias assignments (`using Alias = Some.Type;`), and only the plain
//! directive form and the alias form are import noise. A small state machine
//! classifies the run; once it resolves, every token of a directive run,
//! terminating semicolon included, is discarded.

use super::language::LanguageFilter;
use super::remaining::RemainingTokens;
use crate::config::FilterPreferences;
use crate::tokens::{CpdToken, TokenKind, TokenSource};

/// Classifier state for a `using` run.
///
/// `Default` and `Discarding` are the resolved states. `Keyword` and
/// `Identifier` mean the run is still ambiguous and more tokens are needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UsingState {
    Default,
    Keyword,
    Identifier,
    Discarding,
}

impl UsingState {
    fn is_resolved(self) -> bool {
        matches!(self, UsingState::Default | UsingState::Discarding)
    }
}

/// Language filter for C# token streams.
#[derive(Debug)]
pub struct CsTokenFilter {
    ignore_usings: bool,
    using_state: UsingState,
    discarding_newline: bool,
    discard_terminator: bool,
}

impl CsTokenFilter {
    pub fn new(ignore_usings: bool) -> Self {
        Self {
            ignore_usings,
            using_state: UsingState::Default,
            discarding_newline: false,
            discard_terminator: false,
        }
    }

    pub fn from_preferences(preferences: &FilterPreferences) -> Self {
        Self::new(preferences.ignore_usings)
    }

    /// One classifier transition. Unlisted pairs keep the current state, so
    /// while a directive run drains every token passes through unchanged
    /// until its terminating semicolon.
    fn feed(&mut self, kind: TokenKind) {
        self.using_state = match (self.using_state, kind) {
            (UsingState::Default, TokenKind::Using) => UsingState::Keyword,
            // `using static System.Math;` is still an import
            (UsingState::Keyword, TokenKind::Static) => UsingState::Discarding,
            // `using var x = ...` declares a resource, keep it
            (UsingState::Keyword, TokenKind::Var) => UsingState::Default,
            // `using (...)` is a resource statement, keep it
            (UsingState::Keyword, TokenKind::OpenParen) => UsingState::Default,
            (UsingState::Keyword, TokenKind::Identifier) => UsingState::Identifier,
            // `using Alias = ...;` aliases an import
            (UsingState::Identifier, TokenKind::Assignment) => UsingState::Discarding,
            // `using IDisposable resource ...` declares a resource
            (UsingState::Identifier, TokenKind::Identifier) => UsingState::Default,
            // qualified name continues, `using System.IO;`
            (UsingState::Identifier, TokenKind::Dot) => UsingState::Keyword,
            // bare `using Name;` imports a namespace
            (UsingState::Identifier, TokenKind::Semicolon) => UsingState::Discarding,
            (UsingState::Discarding, TokenKind::Semicolon) => {
                self.discard_terminator = true;
                UsingState::Default
            }
            (state, _) => state,
        };
    }
}

impl LanguageFilter for CsTokenFilter {
    fn analyze_token(&mut self, token: &CpdToken) {
        self.discarding_newline = token.kind() == TokenKind::Newline;
    }

    fn analyze_with_lookahead<S: TokenSource>(
        &mut self,
        token: &CpdToken,
        remaining: &RemainingTokens<'_, S>,
    ) {
        if !self.ignore_usings {
            return;
        }
        self.discard_terminator = false;
        self.feed(token.kind());
        if self.using_state.is_resolved() {
            return;
        }
        // Ambiguous run: look ahead until the classifier resolves. The
        // scanned tokens stay buffered and re-enter this hook when drained.
        for ahead in remaining.iter() {
            self.feed(ahead.kind());
            if self.using_state.is_resolved() {
                return;
            }
        }
    }

    fn is_discarding(&self) -> bool {
        self.discarding_newline
            || self.discard_terminator
            || self.using_state == UsingState::Discarding
    }
}
