//! Lexicon storage for the realiser: a plain-text lexicon format, compiled
//! `rkyv` archives, and the built-in core English word list.

pub mod error;
pub mod memory;
pub mod parser;

pub use error::LexiconError;
pub use memory::{MemoryLexicon, DICTIONARY_VERSION};

/// Source of the built-in lexicon.
pub const CORE_LEXICON: &str = include_str!("../data/core.lex");

/// The built-in core English lexicon.
pub fn builtin() -> Result<MemoryLexicon, LexiconError> {
    MemoryLexicon::parse(CORE_LEXICON)
}
