// Internal modules
pub mod config;
pub mod filter;
#[macro_use]
pub mod logging;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use filter::{CsTokenFilter, LanguageFilter, PlainTokenFilter, RemainingTokens, TokenFilter};
pub use tokens::{CpdToken, TokenKind, TokenSource, VecTokenSource};
