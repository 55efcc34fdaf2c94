//! Lexer module.
//!
//! The lexer implementation is split into focused components:
//! - `core` - Lexer struct, dispatch and iteration
//! - `comment` - Whitespace and `{ ... }` comment skipping
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Number literal lexing
//! - `operator` - Operator and punctuation lexing

mod comment;
mod core;
mod identifier;
mod number;
mod operator;

pub use self::core::Lexer;
