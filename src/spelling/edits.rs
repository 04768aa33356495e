//! Single-edit candidate generation.
//!
//! Enumerates the complete single-edit neighborhood of a word: deletions,
//! adjacent transpositions, lowercase replacements, and lowercase insertions.
//! Candidates are emitted in a fixed order (per split point, left to right:
//! deletion, transposition, replacements a-z, insertions a-z) so that
//! downstream frequency ranking breaks ties deterministically.

/// All strings reachable from `word` by exactly one edit.
///
/// Edits are restricted to the lowercase Latin alphabet; digits and
/// non-ASCII characters are never inserted or substituted. Duplicates are
/// kept here, callers deduplicate when filtering against a lexicon.
pub fn single_edits(word: &str) -> Vec<String> {
    let char_count = word.chars().count();
    let mut edits = Vec::with_capacity(54 * char_count + 28);

    let split_points = word
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(word.len()));

    for i in split_points {
        let (left, right) = word.split_at(i);

        let mut tail = right.chars();
        let head = tail.next();
        let rest = tail.as_str();

        // Deletion: drop the first character of the right part.
        if head.is_some() {
            edits.push(format!("{left}{rest}"));
        }

        // Transposition: swap the first two characters of the right part.
        let mut pair = right.chars();
        if let (Some(first), Some(second)) = (pair.next(), pair.next()) {
            edits.push(format!("{left}{second}{first}{}", pair.as_str()));
        }

        // Replacements: substitute each lowercase letter for the first
        // character of the right part.
        if head.is_some() {
            for ch in 'a'..='z' {
                edits.push(format!("{left}{ch}{rest}"));
            }
        }

        // Insertions: each lowercase letter at this split point, including
        // past the end of the word.
        for ch in 'a'..='z' {
            edits.push(format!("{left}{ch}{right}"));
        }
    }

    edits
}

/// Apply [`single_edits`] to every word in `words`, concatenating the
/// results.
///
/// This is the two-edit escalation pass. The input list is not deduplicated
/// first, so the same two-edit string may appear via multiple paths;
/// filtering deduplicates later.
pub fn edits_of<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    words
        .iter()
        .flat_map(|word| single_edits(word.as_ref()))
        .collect()
}
