//! Word-frequency lexicon backing spelling correction.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use ahash::AHashMap;

use crate::analysis::tokenizer::{RegexTokenizer, Tokenizer};
use crate::error::Result;

/// An immutable table of known words and their corpus frequencies.
///
/// Every key is lowercased at build time and contains only word characters
/// (the tokenizer guarantees this). Lookups are exact: callers wanting
/// case-insensitive behavior must lowercase their query the same way the
/// corpus was normalized.
///
/// A lexicon never changes after construction, so shared references are safe
/// across any number of concurrent queries.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    /// Normalized word -> occurrence count
    entries: AHashMap<String, u32>,
    /// Total token occurrences seen at build time
    total_count: u64,
}

impl Lexicon {
    /// Build a lexicon from pre-tokenized words.
    ///
    /// Each token is lowercased and its count incremented by one. An empty
    /// token sequence yields an empty lexicon; construction never fails.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = AHashMap::new();
        let mut total_count = 0u64;

        for token in tokens {
            let token = token.as_ref();
            if token.is_empty() {
                continue;
            }
            *entries.entry(token.to_lowercase()).or_insert(0) += 1;
            total_count += 1;
        }

        Lexicon {
            entries,
            total_count,
        }
    }

    /// Build a lexicon from raw text using the given tokenizer.
    pub fn from_text(text: &str, tokenizer: &dyn Tokenizer) -> Result<Self> {
        let tokens = tokenizer.tokenize(text)?;
        Ok(Self::from_tokens(tokens.map(|token| token.text)))
    }

    /// Build a lexicon by reading an entire corpus from a reader.
    ///
    /// The read is all-or-nothing: a failure surfaces as an error before any
    /// lexicon exists. Tokenization uses the default `\w+` word pattern.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;

        let tokenizer = RegexTokenizer::new()?;
        Self::from_text(&text, &tokenizer)
    }

    /// Build a lexicon from a corpus file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Number of distinct words in the lexicon.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the lexicon holds no words.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact lookup against the normalized key set.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Occurrence count of a word, 0 if absent.
    pub fn frequency(&self, word: &str) -> u32 {
        self.entries.get(word).copied().unwrap_or(0)
    }

    /// Total number of token occurrences counted at build time.
    pub fn total_frequency(&self) -> u64 {
        self.total_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_lexicon_from_simple_corpus() {
        let lexicon = Lexicon::from_reader("the wild beast.".as_bytes()).unwrap();

        assert_eq!(lexicon.len(), 3);
        assert!(lexicon.contains("the"));
        assert!(lexicon.contains("wild"));
        assert!(lexicon.contains("beast"));
        assert_eq!(lexicon.frequency("the"), 1);
        assert_eq!(lexicon.frequency("wild"), 1);
        assert_eq!(lexicon.frequency("beast"), 1);
        assert_eq!(lexicon.total_frequency(), 3);
    }

    #[test]
    fn test_lexicon_case_folding_and_punctuation() {
        let lexicon = Lexicon::from_reader("the The beast ..,. tHe.".as_bytes()).unwrap();

        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.frequency("the"), 3);
        assert_eq!(lexicon.frequency("beast"), 1);
    }

    #[test]
    fn test_lexicon_splits_contractions() {
        let lexicon = Lexicon::from_reader("don't".as_bytes()).unwrap();

        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.contains("don"));
        assert!(lexicon.contains("t"));
    }

    #[test]
    fn test_empty_lexicon() {
        let lexicon = Lexicon::from_reader("".as_bytes()).unwrap();

        assert_eq!(lexicon.len(), 0);
        assert!(lexicon.is_empty());
        assert!(!lexicon.contains("foo"));
        assert_eq!(lexicon.frequency("foo"), 0);
        assert_eq!(lexicon.total_frequency(), 0);
    }

    #[test]
    fn test_lexicon_lookups_are_exact() {
        let lexicon = Lexicon::from_tokens(["Hello"]);

        assert!(lexicon.contains("hello"));
        assert!(!lexicon.contains("Hello"));
        assert_eq!(lexicon.frequency("hello"), 1);
        assert_eq!(lexicon.frequency("Hello"), 0);
    }

    #[test]
    fn test_lexicon_from_tokens_counts_occurrences() {
        let lexicon = Lexicon::from_tokens(["dog", "cat", "Dog", "dog"]);

        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.frequency("dog"), 3);
        assert_eq!(lexicon.frequency("cat"), 1);
        assert_eq!(lexicon.total_frequency(), 4);
    }

    #[test]
    fn test_lexicon_build_is_idempotent() {
        let corpus = "The quick brown fox jumps over the lazy dog. The dog was lazy.";
        let first = Lexicon::from_reader(corpus.as_bytes()).unwrap();
        let second = Lexicon::from_reader(corpus.as_bytes()).unwrap();

        assert_eq!(first.len(), second.len());
        for word in ["the", "quick", "brown", "fox", "lazy", "dog", "was"] {
            assert_eq!(first.contains(word), second.contains(word));
            assert_eq!(first.frequency(word), second.frequency(word));
        }
        assert_eq!(first.frequency("the"), 3);
        assert_eq!(first.frequency("dog"), 2);
    }

    #[test]
    fn test_lexicon_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "hello world").unwrap();
        writeln!(temp_file, "hello again").unwrap();
        temp_file.flush().unwrap();

        let lexicon = Lexicon::from_file(temp_file.path()).unwrap();
        assert_eq!(lexicon.len(), 3);
        assert_eq!(lexicon.frequency("hello"), 2);
        assert_eq!(lexicon.frequency("world"), 1);
        assert_eq!(lexicon.frequency("again"), 1);
    }

    #[test]
    fn test_lexicon_from_missing_file() {
        let result = Lexicon::from_file("/nonexistent/corpus.txt");
        assert!(result.is_err());
    }
}
