//! Edit-distance search and frequency ranking over a lexicon.

use std::io::Read;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::spelling::edits::{edits_of, single_edits};
use crate::spelling::lexicon::Lexicon;

/// Configuration for the spelling corrector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectorConfig {
    /// Maximum edit distance to search. The search is defined for distances
    /// 1 and 2; a value of 1 disables the two-edit escalation, and values
    /// above 2 behave like 2.
    pub max_distance: usize,
    /// Minimum corpus frequency a candidate must have to be considered.
    pub min_frequency: u32,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        CorrectorConfig {
            max_distance: 2,
            min_frequency: 1,
        }
    }
}

/// A correction, with the edit distance and corpus frequency that ranked it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    /// The corrected word.
    pub word: String,
    /// Edit distance from the query (0 if the query was already known).
    pub distance: usize,
    /// Corpus frequency of the corrected word.
    pub frequency: u32,
}

/// Single-best spelling corrector over an immutable lexicon.
///
/// A query already present in the lexicon is returned unchanged. Otherwise
/// the distance-1 neighborhood is searched first, then distance-2; within a
/// distance the known candidate with the strictly highest corpus frequency
/// wins, and ties keep the candidate generated first.
///
/// The corrector does no case folding of its own: queries must be lowercased
/// by the caller to match the lexicon's normalized keys.
///
/// All state is immutable after construction, so a corrector can serve any
/// number of concurrent queries through a shared reference.
pub struct Corrector {
    lexicon: Lexicon,
    config: CorrectorConfig,
}

impl Corrector {
    /// Create a corrector over the given lexicon with default configuration.
    pub fn new(lexicon: Lexicon) -> Self {
        Self::with_config(lexicon, CorrectorConfig::default())
    }

    /// Create a corrector with a custom configuration.
    pub fn with_config(lexicon: Lexicon, config: CorrectorConfig) -> Self {
        Corrector { lexicon, config }
    }

    /// Build the lexicon from a corpus reader and wrap it in a corrector.
    ///
    /// A read failure surfaces as an error; no corrector is constructed.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(Self::new(Lexicon::from_reader(reader)?))
    }

    /// The lexicon backing this corrector.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Check whether a word is already known.
    pub fn is_correct(&self, word: &str) -> bool {
        self.lexicon.contains(word)
    }

    /// Return the most plausible correction for `word`.
    ///
    /// Returns the word itself if it is already known, the best-ranked known
    /// candidate within two edits otherwise, or `None` when the neighborhood
    /// holds no known word.
    pub fn correct(&self, word: &str) -> Option<String> {
        self.suggestion(word).map(|correction| correction.word)
    }

    /// Like [`correct`](Self::correct), but reports the edit distance and
    /// frequency that ranked the result.
    pub fn suggestion(&self, word: &str) -> Option<Correction> {
        if self.lexicon.contains(word) {
            return Some(Correction {
                word: word.to_string(),
                distance: 0,
                frequency: self.lexicon.frequency(word),
            });
        }

        let one_edit = single_edits(word);
        if let Some(correction) = self.best_known(&one_edit, 1) {
            return Some(correction);
        }

        if self.config.max_distance >= 2 {
            let two_edit = edits_of(&one_edit);
            if let Some(correction) = self.best_known(&two_edit, 2) {
                return Some(correction);
            }
        }

        None
    }

    /// Known candidates in first-seen order, duplicates removed.
    fn known<'a>(&self, candidates: &'a [String]) -> Vec<&'a str> {
        let mut seen = AHashSet::new();
        let mut known = Vec::new();

        for candidate in candidates {
            if self.lexicon.contains(candidate) && seen.insert(candidate.as_str()) {
                known.push(candidate.as_str());
            }
        }

        known
    }

    /// Max-reduction over candidate frequencies; first-seen wins ties.
    fn best_known(&self, candidates: &[String], distance: usize) -> Option<Correction> {
        let mut best: Option<(&str, u32)> = None;

        for candidate in self.known(candidates) {
            let frequency = self.lexicon.frequency(candidate);
            if frequency < self.config.min_frequency {
                continue;
            }
            if best.is_none_or(|(_, best_frequency)| frequency > best_frequency) {
                best = Some((candidate, frequency));
            }
        }

        best.map(|(word, frequency)| Correction {
            word: word.to_string(),
            distance,
            frequency,
        })
    }
}
