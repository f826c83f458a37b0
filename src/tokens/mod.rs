//! Token model and source contracts for the filtering layer

pub mod source;
pub mod token;

pub use source::{TokenSource, VecTokenSource};
pub use token::{CpdToken, TokenKind};
