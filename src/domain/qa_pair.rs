// ============================================================
// Layer 3 — QaPair Domain Type
// ============================================================
// The terminal entity of a flashcard run: one accepted question
// and the validated answer extracted for it from the passage.
//
// Example:
//   Question: "What is photosynthesis?"
//   Answer:   "the process plants use to turn light into chemical energy"

use serde::{Deserialize, Serialize};

/// A single flashcard. Immutable once built by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaPair {
    /// The cleaned question text, exactly as it will be displayed
    pub question: String,

    /// The cleaned answer span taken from the source passage
    pub answer: String,
}

impl QaPair {
    /// Create a new QaPair
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer:   answer.into(),
        }
    }
}
