//! # Lexis Spell
//!
//! A dictionary-backed spelling correction library for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Word-frequency lexicon built from any text corpus
//! - Bounded edit-distance candidate search (up to two edits)
//! - Frequency-based ranking with deterministic tie-breaking
//! - Pluggable regex tokenization
//!
//! ## Example
//!
//! ```
//! use lexis_spell::spelling::{Corrector, Lexicon};
//!
//! let lexicon = Lexicon::from_reader("the wild beast".as_bytes()).unwrap();
//! let corrector = Corrector::new(lexicon);
//!
//! assert_eq!(corrector.correct("beast"), Some("beast".to_string()));
//! assert_eq!(corrector.correct("baest"), Some("beast".to_string()));
//! assert_eq!(corrector.correct("zzzzzz"), None);
//! ```

pub mod analysis;
pub mod error;
pub mod spelling;

pub mod prelude {
    pub use crate::analysis::{RegexTokenizer, Tokenizer};
    pub use crate::error::{Result, SpellError};
    pub use crate::spelling::{Correction, Corrector, CorrectorConfig, Lexicon};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
