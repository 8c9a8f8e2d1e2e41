// ============================================================
// Layer 3 — Run Report
// ============================================================
// A run never returns a bare empty list. Whenever fewer flashcards
// come back than were asked for, a Shortfall says why so the UI
// can show a useful message.

use std::fmt;

use serde::Serialize;

use crate::domain::qa_pair::QaPair;

/// Counters collected while the pipeline runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Candidates returned by the generation adapter
    pub candidates: usize,

    /// Candidates that survived the normaliser + candidate filter
    pub accepted_questions: usize,

    /// Extraction calls that returned an answer the filter rejected
    pub rejected_answers: usize,

    /// Extraction calls that returned an error
    pub extraction_failures: usize,
}

/// Why a run produced fewer pairs than requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Shortfall {
    /// The passage failed the minimum-length guard
    InputTooShort { chars: usize, min: usize },

    /// Not enough unique, answerable questions in the passage
    UnderAttainment { requested: usize, produced: usize },

    /// At least one extraction call failed and the target was missed
    ExtractionFailures { requested: usize, produced: usize, failures: usize },
}

impl fmt::Display for Shortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shortfall::InputTooShort { chars, min } => write!(
                f,
                "the input is too short ({chars} characters); provide at least {min} characters of text"
            ),
            Shortfall::UnderAttainment { requested, produced } => write!(
                f,
                "only {produced} of {requested} flashcards could be generated; \
                 try a longer or more detailed text"
            ),
            Shortfall::ExtractionFailures { requested, produced, failures } => write!(
                f,
                "only {produced} of {requested} flashcards could be generated; \
                 answer extraction failed for {failures} question(s)"
            ),
        }
    }
}

/// Result of one successful pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlashcardSet {
    /// Accepted pairs, in generation rank order
    pub pairs: Vec<QaPair>,

    /// The target count the caller asked for
    pub requested: usize,

    pub stats: RunStats,

    /// Present whenever `pairs.len() < requested`
    pub shortfall: Option<Shortfall>,
}

impl FlashcardSet {
    /// An empty set for input that failed the length guard.
    pub fn too_short(requested: usize, chars: usize, min: usize) -> Self {
        Self {
            pairs: Vec::new(),
            requested,
            stats: RunStats::default(),
            shortfall: Some(Shortfall::InputTooShort { chars, min }),
        }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Consume the set, keeping only the pairs.
    pub fn into_pairs(self) -> Vec<QaPair> {
        self.pairs
    }
}
