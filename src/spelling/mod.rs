//! Spelling correction over a word-frequency lexicon.
//!
//! This module provides the correction core: a [`Lexicon`] counts how often
//! each word appears in a corpus, and a [`Corrector`] searches the bounded
//! edit-distance neighborhood of a misspelled word for the most frequent
//! known candidate.

pub mod corrector;
pub mod edits;
pub mod lexicon;

// Re-export commonly used types
pub use corrector::{Correction, Corrector, CorrectorConfig};
pub use edits::{edits_of, single_edits};
pub use lexicon::Lexicon;
