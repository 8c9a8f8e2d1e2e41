// ============================================================
// Layer 5 — Heuristic Question Generator
// ============================================================
// A deterministic, model-free QuestionGenerator. It reads the
// (truncated) passage sentence by sentence and turns recognisable
// sentence shapes into questions:
//
//   "X is/are/was/were Y"      → "What is/are/was/were X?"
//   "..., called/known as Y"   → "What is Y?"
//   "A because B"              → "Why is it that A?"
//   sentence with a year       → "What happened in YEAR?"
//   anything else (>= 6 words) → "What does the text say about W?"
//
// Ranking: candidates are emitted round-robin across sentences
// (every sentence's best question first, then second-best ...),
// so the top of the list covers as much of the passage as possible.

use crate::domain::error::AdapterError;
use crate::domain::traits::{GenerationRequest, QuestionGenerator};
use crate::ml::budget::TextBudget;
use crate::ml::text::{
    clean_word, find_year, soften_article, split_copula, split_sentences, strip_terminal,
};

/// Subjects longer than this read badly as questions
const MAX_SUBJECT_WORDS: usize = 8;
/// Terms after "called"/"known as"
const MAX_TERM_WORDS: usize = 4;
/// Shortest sentence worth a fallback "about" question
const MIN_FALLBACK_WORDS: usize = 6;

pub struct HeuristicQuestionGenerator {
    budget: TextBudget,
}

impl HeuristicQuestionGenerator {
    pub fn new(budget: TextBudget) -> Self {
        Self { budget }
    }
}

impl Default for HeuristicQuestionGenerator {
    fn default() -> Self {
        Self::new(TextBudget::words())
    }
}

impl QuestionGenerator for HeuristicQuestionGenerator {
    fn generate(
        &self,
        passage: &str,
        request: &GenerationRequest,
    ) -> Result<Vec<String>, AdapterError> {
        let text      = self.budget.truncate(passage, request.max_input_len)?;
        let sentences = split_sentences(text);
        if sentences.is_empty() {
            return Err(AdapterError::invalid_input("passage contains no sentences"));
        }

        let per_sentence: Vec<Vec<String>> =
            sentences.iter().map(|s| questions_for(s)).collect();
        let depth = per_sentence.iter().map(Vec::len).max().unwrap_or(0);

        let mut out = Vec::new();
        for rank in 0..depth {
            for questions in &per_sentence {
                let Some(q) = questions.get(rank) else { continue };
                if self.budget.count(q)? > request.max_output_len {
                    continue;
                }
                out.push(q.clone());
                if out.len() >= request.num_candidates {
                    tracing::debug!(count = out.len(), "Generated candidate questions (limit reached)");
                    return Ok(out);
                }
            }
        }

        tracing::debug!(count = out.len(), sentences = sentences.len(), "Generated candidate questions");
        Ok(out)
    }
}

/// All questions one sentence supports, best first.
fn questions_for(sentence: &str) -> Vec<String> {
    let body = strip_terminal(sentence);
    let mut questions = Vec::new();

    if let Some((subject, verb, _)) = split_copula(body) {
        let words = subject.split_whitespace().count();
        if words <= MAX_SUBJECT_WORDS && !subject.contains(',') {
            questions.push(format!("What {verb} {}?", soften_article(subject)));
        }
    }

    if let Some(term) = named_term(body) {
        questions.push(format!("What is {term}?"));
    }

    if let Some(idx) = body.to_ascii_lowercase().find(" because ") {
        let clause = body[..idx].trim().trim_end_matches(',');
        if !clause.is_empty() {
            questions.push(format!("Why is it that {}?", lower_first(clause)));
        }
    }

    if let Some(year) = find_year(body) {
        questions.push(format!("What happened in {year}?"));
    }

    if questions.is_empty() && body.split_whitespace().count() >= MIN_FALLBACK_WORDS {
        if let Some(topic) = longest_word(body) {
            questions.push(format!("What does the text say about {topic}?"));
        }
    }

    questions
}

/// The term introduced by "called X" or "known as X", up to the next comma.
fn named_term(body: &str) -> Option<String> {
    let lower = body.to_ascii_lowercase();
    let start = ["known as ", "called "]
        .iter()
        .filter_map(|marker| lower.find(marker).map(|i| i + marker.len()))
        .min()?;

    let rest = body[start..].split(',').next().unwrap_or("");
    let term: Vec<&str> = rest.split_whitespace().take(MAX_TERM_WORDS).collect();
    if term.is_empty() {
        None
    } else {
        Some(term.join(" "))
    }
}

fn longest_word(body: &str) -> Option<String> {
    body.split_whitespace()
        .map(clean_word)
        .filter(|w| w.chars().count() > 4)
        .max_by_key(|w| w.chars().count())
}

fn lower_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) => c.to_lowercase().chain(chars).collect(),
        None    => String::new(),
    }
}
