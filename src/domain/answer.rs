// ============================================================
// Layer 3 — Extracted Answers and the Answer Validity Filter
// ============================================================
// The extraction adapter hands back a best-effort span plus an
// explicit "no answer possible" flag. The filter then throws out
// anything that would make a useless flashcard:
//
//   - the adapter said the question is impossible
//   - nothing left after whitespace cleanup
//   - a "no answer" sentinel
//   - too short (length <= min_chars, 3 by default)
//   - the answer just echoes the question
//
// Reference: Rust Book §6 (Enums), §9 (Recoverable Errors)

use std::fmt;

use crate::domain::question::collapse_whitespace;

/// Lowercased answer strings that mean "the model found nothing".
pub const NO_ANSWER_SENTINELS: &[&str] = &["no answer", ""];

/// Default minimum: answers of this many characters or fewer are rejected.
pub const DEFAULT_MIN_ANSWER_CHARS: usize = 3;

/// What the extraction adapter returns for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedAnswer {
    /// Best-effort answer span, uncleaned
    pub text: String,

    /// True when the adapter decided the passage cannot answer the question
    pub is_impossible: bool,
}

impl ExtractedAnswer {
    /// A normal answer span
    pub fn span(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_impossible: false }
    }

    /// The explicit no-answer outcome
    pub fn impossible() -> Self {
        Self { text: String::new(), is_impossible: true }
    }
}

/// Why an extracted answer was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerRejection {
    Impossible,
    Empty,
    Sentinel,
    TooShort,
    EchoesQuestion,
}

impl fmt::Display for AnswerRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AnswerRejection::Impossible     => "adapter reported no answer",
            AnswerRejection::Empty          => "empty after cleanup",
            AnswerRejection::Sentinel       => "no-answer sentinel",
            AnswerRejection::TooShort       => "too short",
            AnswerRejection::EchoesQuestion => "repeats the question",
        };
        f.write_str(reason)
    }
}

/// Shape rules for extracted answers.
#[derive(Debug, Clone, Copy)]
pub struct AnswerFilter {
    /// Answers whose character count is <= this are rejected
    min_chars: usize,
}

impl AnswerFilter {
    pub fn new(min_chars: usize) -> Self {
        Self { min_chars }
    }

    /// Clean `raw` and check it against `question`.
    /// Returns the cleaned answer on success.
    pub fn check(&self, raw: &str, question: &str) -> Result<String, AnswerRejection> {
        let cleaned = collapse_whitespace(raw);
        let lowered = cleaned.to_lowercase();

        if cleaned.is_empty() {
            return Err(AnswerRejection::Empty);
        }
        if NO_ANSWER_SENTINELS.contains(&lowered.as_str()) {
            return Err(AnswerRejection::Sentinel);
        }
        if cleaned.chars().count() <= self.min_chars {
            return Err(AnswerRejection::TooShort);
        }
        if lowered == question.to_lowercase() {
            return Err(AnswerRejection::EchoesQuestion);
        }
        Ok(cleaned)
    }

    /// Same as [`check`](Self::check) but also honours the impossible flag.
    pub fn check_extracted(
        &self,
        extracted: &ExtractedAnswer,
        question:  &str,
    ) -> Result<String, AnswerRejection> {
        if extracted.is_impossible {
            return Err(AnswerRejection::Impossible);
        }
        self.check(&extracted.text, question)
    }

    /// Predicate + transform form: (accepted?, cleaned answer).
    pub fn accept(&self, raw: &str, question: &str) -> (bool, String) {
        match self.check(raw, question) {
            Ok(cleaned) => (true, cleaned),
            Err(_)      => (false, collapse_whitespace(raw)),
        }
    }
}

impl Default for AnswerFilter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_ANSWER_CHARS)
    }
}
