//! Language extension points for the filtering engine
//!
//! Each supported language plugs a capability set into the engine: a stop
//! predicate, two analysis hooks, and a discard predicate. The engine calls
//! both hooks for every token before deciding whether to discard it.

use super::remaining::RemainingTokens;
use crate::tokens::{CpdToken, TokenSource};

/// Stop predicate captured once at engine construction.
pub type StopFn = fn(&CpdToken) -> bool;

/// Default stop predicate: filtering is complete at the end-of-file token.
pub fn stop_at_end_of_file(token: &CpdToken) -> bool {
    token.is_end_of_file()
}

/// Capability set a language filter implements.
///
/// All hooks default to no-ops, so a language with no specific rules gets
/// suppression handling and nothing else.
pub trait LanguageFilter {
    /// Predicate deciding when filtering is complete.
    fn stop_predicate(&self) -> StopFn {
        stop_at_end_of_file
    }

    /// Analyze a single token before the discard decision.
    fn analyze_token(&mut self, _token: &CpdToken) {}

    /// Analyze a token together with everything still ahead of it.
    ///
    /// `remaining` is anchored just past `token`; iterating it never consumes
    /// tokens out of the filtered output.
    fn analyze_with_lookahead<S: TokenSource>(
        &mut self,
        _token: &CpdToken,
        _remaining: &RemainingTokens<'_, S>,
    ) {
    }

    /// Whether the token just analyzed should be discarded for
    /// language-specific reasons. Queried after both analysis hooks.
    fn is_discarding(&self) -> bool {
        false
    }
}

/// Language filter with no language-specific rules: suppression comments
/// only, stopping at end of file.
#[derive(Debug, Default)]
pub struct PlainTokenFilter;

impl LanguageFilter for PlainTokenFilter {}
