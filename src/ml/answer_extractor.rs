// ============================================================
// Layer 5 — Keyword-Overlap Answer Extractor
// ============================================================
// A deterministic, model-free AnswerExtractor:
//   1. Truncate the context to the budget
//   2. Score every sentence by keyword overlap with the question,
//      weighting each matched keyword by its length
//   3. Below the minimum overlap → "impossible", no guessing
//   4. Narrow the best sentence to a span:
//        why-question + "because" → the reason clause
//        "X is Y" with X about the question → Y
//        otherwise → the whole sentence
//   5. Truncate the span to the answer budget

use std::collections::HashSet;

use crate::domain::answer::ExtractedAnswer;
use crate::domain::error::AdapterError;
use crate::domain::traits::{AnswerExtractor, ExtractionLimits};
use crate::ml::budget::TextBudget;
use crate::ml::text::{clean_word, keywords, split_copula, split_sentences, strip_terminal};

/// Fraction of the question's keyword weight a sentence must cover
pub const DEFAULT_MIN_OVERLAP: f32 = 0.5;

pub struct OverlapAnswerExtractor {
    budget:      TextBudget,
    min_overlap: f32,
}

impl OverlapAnswerExtractor {
    pub fn new(budget: TextBudget) -> Self {
        Self { budget, min_overlap: DEFAULT_MIN_OVERLAP }
    }

    /// Override the minimum overlap (clamped to 0.0..=1.0)
    pub fn with_min_overlap(mut self, min_overlap: f32) -> Self {
        self.min_overlap = min_overlap.clamp(0.0, 1.0);
        self
    }
}

impl Default for OverlapAnswerExtractor {
    fn default() -> Self {
        Self::new(TextBudget::words())
    }
}

impl AnswerExtractor for OverlapAnswerExtractor {
    fn extract(
        &self,
        question: &str,
        passage:  &str,
        limits:   &ExtractionLimits,
    ) -> Result<ExtractedAnswer, AdapterError> {
        let context = self.budget.truncate(passage, limits.max_context_len)?;
        let q_words = keywords(question);
        if q_words.is_empty() {
            return Ok(ExtractedAnswer::impossible());
        }

        let Some((score, sentence)) = best_sentence(&split_sentences(context), &q_words) else {
            return Ok(ExtractedAnswer::impossible());
        };

        if score < self.min_overlap {
            tracing::debug!(question, score, "No sentence overlaps the question enough");
            return Ok(ExtractedAnswer::impossible());
        }

        let span   = answer_span(question, sentence, &q_words);
        let answer = self.budget.truncate(span, limits.max_answer_len)?;
        tracing::debug!(question, score, answer, "Extracted answer span");

        Ok(ExtractedAnswer::span(answer))
    }
}

/// Highest-scoring sentence; the earliest one wins ties.
fn best_sentence<'s>(sentences: &[&'s str], q_words: &[String]) -> Option<(f32, &'s str)> {
    let total: f32 = q_words.iter().map(|w| w.chars().count() as f32).sum();
    let mut best: Option<(f32, &str)> = None;

    for sentence in sentences {
        let words: HashSet<String> = sentence.split_whitespace().map(clean_word).collect();
        let matched: f32 = q_words
            .iter()
            .filter(|w| words.contains(w.as_str()))
            .map(|w| w.chars().count() as f32)
            .sum();
        let score = matched / total;

        if best.map_or(true, |(s, _)| score > s) {
            best = Some((score, *sentence));
        }
    }
    best
}

fn answer_span<'s>(question: &str, sentence: &'s str, q_words: &[String]) -> &'s str {
    let body = strip_terminal(sentence);

    if question.trim_start().to_ascii_lowercase().starts_with("why") {
        if let Some(idx) = body.to_ascii_lowercase().find(" because ") {
            let reason = body[idx + " because ".len()..].trim();
            if !reason.is_empty() {
                return reason;
            }
        }
    }

    if let Some((subject, _, predicate)) = split_copula(body) {
        let about_question = subject
            .split_whitespace()
            .map(clean_word)
            .any(|w| q_words.contains(&w));
        if about_question {
            return predicate;
        }
    }

    body
}
