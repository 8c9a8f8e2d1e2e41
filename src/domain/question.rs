// ============================================================
// Layer 3 — Question Normaliser and Candidate Filter
// ============================================================
// Every generated question goes through two forms:
//
//   cleaned — newlines → spaces, whitespace runs collapsed, trimmed.
//             This is what the user sees on the flashcard.
//   key     — the cleaned text lowercased, punctuation removed and
//             whitespace collapsed again. Only used for equality, so
//             "What is X?" and "what is x" count as the same question.
//
// The candidate filter is a pure predicate. The caller owns the
// set of seen keys and inserts a key after each acceptance.
//
// Reference: Rust Book §8 (Strings), §18 (Patterns)

use std::collections::HashSet;
use std::fmt;

/// Deduplication key derived from a question. Never shown to users.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuestionKey(String);

impl QuestionKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A raw candidate after normalisation: display form + dedup key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuestion {
    pub cleaned: String,
    pub key:     QuestionKey,
}

/// Why a candidate question was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateRejection {
    /// Nothing left after whitespace cleanup
    Empty,
    /// Same key as a question accepted earlier in this run
    Duplicate,
    /// No '?' anywhere in the cleaned text
    NotAQuestion,
}

impl fmt::Display for CandidateRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            CandidateRejection::Empty        => "empty after cleanup",
            CandidateRejection::Duplicate    => "duplicate of an accepted question",
            CandidateRejection::NotAQuestion => "missing question mark",
        };
        f.write_str(reason)
    }
}

/// Replace newlines with spaces, collapse whitespace runs, trim the ends.
/// Shared by the question and answer paths.
pub fn collapse_whitespace(text: &str) -> String {
    // split_whitespace already treats '\n', '\r' and '\t' as separators,
    // so joining with single spaces covers all three cleanup steps at once
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Build the dedup key for an already-cleaned question.
///
/// Lowercasing happens before punctuation is stripped so that the key is
/// a fixed point: running it through here again yields the same key.
pub fn question_key(cleaned: &str) -> QuestionKey {
    let kept: String = cleaned
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    // Removing punctuation can leave double spaces ("a - b" → "a  b")
    QuestionKey(collapse_whitespace(&kept))
}

/// Normalise one raw generated question into its cleaned and key forms.
pub fn normalize(raw: &str) -> NormalizedQuestion {
    let cleaned = collapse_whitespace(raw);
    let key     = question_key(&cleaned);
    NormalizedQuestion { cleaned, key }
}

/// Check a normalised candidate against the shape rules and the keys
/// already accepted in this run.
pub fn check_candidate(
    cleaned: &str,
    key:     &QuestionKey,
    seen:    &HashSet<QuestionKey>,
) -> Result<(), CandidateRejection> {
    // Order matters only for the logged reason; any failure rejects
    if cleaned.is_empty() {
        return Err(CandidateRejection::Empty);
    }
    // Compare keys, never the display text
    if seen.contains(key) {
        return Err(CandidateRejection::Duplicate);
    }
    // Statements like "Describe the leaf." are not flashcard questions
    if !cleaned.contains('?') {
        return Err(CandidateRejection::NotAQuestion);
    }
    Ok(())
}

/// Boolean form of [`check_candidate`].
pub fn accept_candidate(cleaned: &str, key: &QuestionKey, seen: &HashSet<QuestionKey>) -> bool {
    check_candidate(cleaned, key, seen).is_ok()
}
