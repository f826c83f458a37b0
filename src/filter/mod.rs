//! Token filtering core
//!
//! `TokenFilter` pulls from a single-pass `TokenSource`, applies suppression
//! comments, and delegates language-specific discard decisions to a
//! `LanguageFilter`. Lookahead runs over `RemainingTokens`, a restartable
//! view that shares one append-only buffer so no stream position is ever
//! pulled from the source twice.

pub mod csharp;
pub mod engine;
pub mod language;
pub mod remaining;

pub use csharp::CsTokenFilter;
pub use engine::TokenFilter;
pub use language::{stop_at_end_of_file, LanguageFilter, PlainTokenFilter, StopFn};
pub use remaining::{RemainingCursor, RemainingTokens};
