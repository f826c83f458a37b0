//! Generic buffering and filtering engine
//!
//! Pulls tokens from a single-pass source, runs the language hooks, tracks
//! comment-based suppression, and returns the tokens that survive. Tokens
//! buffered by lookahead re-enter the full analysis path when they drain, so
//! a run resolved as a directive is discarded in its entirety.

use super::language::LanguageFilter;
use super::remaining::{RemainingTokens, StreamState};
use crate::config::constants::compile_time::filtering::{
    MAX_COMMENT_CHAIN_LENGTH, SUPPRESS_OFF_MARKER, SUPPRESS_ON_MARKER,
};
use crate::config::FilterPreferences;
use crate::logging::codes;
use crate::tokens::{CpdToken, TokenSource};
use crate::{log_debug, log_warning};
use std::cell::RefCell;
use std::rc::Rc;

/// The filtered token stream handed to the duplicate-matching engine.
///
/// Call `next_token` repeatedly until it returns `None`. Tokens come back in
/// original stream order, each at most once.
pub struct TokenFilter<S: TokenSource, L: LanguageFilter> {
    stream: RefCell<StreamState<S>>,
    language: L,
    suppressed: bool,
    log_suppression_changes: bool,
    track_pull_statistics: bool,
    returned: usize,
    finished: bool,
}

impl<S: TokenSource, L: LanguageFilter> TokenFilter<S, L> {
    /// Create a filter over `source` with the given language rules.
    pub fn new(source: S, language: L) -> Self {
        let stop = language.stop_predicate();
        Self {
            stream: RefCell::new(StreamState::new(source, stop)),
            language,
            suppressed: false,
            log_suppression_changes: false,
            track_pull_statistics: false,
            returned: 0,
            finished: false,
        }
    }

    /// Create a filter with logging behavior taken from preferences.
    pub fn with_preferences(source: S, language: L, preferences: &FilterPreferences) -> Self {
        let mut filter = Self::new(source, language);
        filter.log_suppression_changes = preferences.log_suppression_changes;
        filter.track_pull_statistics = preferences.track_pull_statistics;
        filter
    }

    /// Record the source name for diagnostics.
    pub fn set_source_name(&mut self, name: &str) {
        self.stream.borrow_mut().source_mut().set_source_name(name);
    }

    /// Number of times the underlying source has been pulled.
    pub fn pull_count(&self) -> usize {
        self.stream.borrow().pulls()
    }

    /// Next token visible to the duplicate-matching consumer, or `None` once
    /// the stop condition is reached.
    pub fn next_token(&mut self) -> Option<Rc<CpdToken>> {
        loop {
            let (token, anchor) = {
                let mut stream = self.stream.borrow_mut();
                match stream.advance_head() {
                    Some(token) => {
                        let anchor = stream.head();
                        (token, anchor)
                    }
                    None => {
                        drop(stream);
                        self.finish();
                        return None;
                    }
                }
            };

            self.language.analyze_token(&token);
            let remaining = RemainingTokens::new(&self.stream, anchor);
            self.language.analyze_with_lookahead(&token, &remaining);
            self.scan_suppression(&token);

            if !self.suppressed && !self.language.is_discarding() {
                self.returned += 1;
                return Some(token);
            }
        }
    }

    /// Walk the token's previous-comment chain nearest-first and apply the
    /// first suppression marker found, if any.
    fn scan_suppression(&mut self, token: &CpdToken) {
        let mut comment = token.previous_comment();
        let mut walked = 0usize;
        while let Some(current) = comment {
            if walked >= MAX_COMMENT_CHAIN_LENGTH {
                log_warning!(codes::filtering::COMMENT_CHAIN_BOUND_EXCEEDED,
                    "Comment chain walk bound exceeded; suppression state unchanged",
                    "walked" => walked,
                    "token" => token
                );
                return;
            }
            if current.image().contains(SUPPRESS_OFF_MARKER) {
                if !self.suppressed && self.log_suppression_changes {
                    log_debug!(codes::filtering::SUPPRESSION_ENABLED,
                        "Duplicate analysis suppressed",
                        "at" => current.span()
                    );
                }
                self.suppressed = true;
                return;
            }
            if current.image().contains(SUPPRESS_ON_MARKER) {
                if self.suppressed && self.log_suppression_changes {
                    log_debug!(codes::filtering::SUPPRESSION_DISABLED,
                        "Duplicate analysis resumed",
                        "at" => current.span()
                    );
                }
                self.suppressed = false;
                return;
            }
            comment = current.previous_comment();
            walked += 1;
        }
    }

    fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;
        if self.track_pull_statistics {
            log_debug!(codes::filtering::STREAM_COMPLETE,
                "Token stream fully filtered",
                "pulls" => self.stream.borrow().pulls(),
                "returned" => self.returned
            );
        }
    }
}
