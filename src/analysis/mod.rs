//! Text analysis for building spelling lexicons.
//!
//! Tokenization is a collaborator of the correction core: it turns raw text
//! into word tokens, which the lexicon then counts. The core itself never
//! tokenizes.

pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use token::{Token, TokenStream};
pub use tokenizer::{RegexTokenizer, Tokenizer};
