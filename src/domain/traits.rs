// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The pipeline never knows which model writes the questions or
// finds the answers. It only sees these traits:
//
//   DocumentSource    → anything that can hand us a Document
//   QuestionGenerator → passage in, ranked candidate questions out
//   AnswerExtractor   → question + passage in, answer span out
//
// Implementations:
//   - TextFileLoader / DocxLoader / PdfLoader  (data layer)
//   - HeuristicQuestionGenerator               (ml layer)
//   - OverlapAnswerExtractor                   (ml layer)
//   - scripted stubs in the pipeline tests
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::answer::ExtractedAnswer;
use crate::domain::document::Document;
use crate::domain::error::AdapterError;

// ─── DocumentSource ───────────────────────────────────────────────────────────
/// Any component that can load a document.
pub trait DocumentSource {
    /// Load the document this source points at.
    fn load(&self) -> Result<Document>;
}

// ─── QuestionGenerator ────────────────────────────────────────────────────────
/// Limits for one generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Return at most this many candidates
    pub num_candidates: usize,

    /// Truncate the passage to this many units before generating.
    /// Truncation is silent: it is never an error.
    pub max_input_len: usize,

    /// Longest question (in units) worth returning
    pub max_output_len: usize,
}

/// Produces candidate questions for a passage.
///
/// Output order is the adapter's ranking; the pipeline tries candidates
/// strictly in that order. Adapters should aim for diverse questions but
/// the pipeline deduplicates regardless.
///
/// Implementations must tolerate being called many times in sequence.
pub trait QuestionGenerator {
    fn generate(
        &self,
        passage: &str,
        request: &GenerationRequest,
    ) -> Result<Vec<String>, AdapterError>;
}

// ─── AnswerExtractor ──────────────────────────────────────────────────────────
/// Limits for one extraction call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionLimits {
    /// Truncate the context to this many units (silently)
    pub max_context_len: usize,

    /// Longest answer span in units
    pub max_answer_len: usize,
}

/// Finds an answer span for a question inside a passage.
///
/// When the passage cannot support an answer the adapter returns
/// [`ExtractedAnswer::impossible`] rather than a low-confidence guess.
/// An `Err` means this one question failed; the pipeline skips it.
pub trait AnswerExtractor {
    fn extract(
        &self,
        question: &str,
        passage:  &str,
        limits:   &ExtractionLimits,
    ) -> Result<ExtractedAnswer, AdapterError>;
}
