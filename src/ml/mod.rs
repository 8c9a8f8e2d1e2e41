// ============================================================
// Layer 5 — Adapter Implementations
// ============================================================
// Concrete QuestionGenerator / AnswerExtractor implementations.
// No other layer depends on anything in here except through the
// Layer 3 traits, so a model-backed adapter can replace these
// without touching the pipeline.
//
//   budget.rs             — word/token length budgets + truncation
//   text.rs               — sentence and keyword helpers
//   question_generator.rs — rule-based question generation
//   answer_extractor.rs   — keyword-overlap answer extraction

/// Length budgets in words or tokenizer tokens
pub mod budget;

/// Sentence/keyword helpers shared by both adapters
pub mod text;

/// Rule-based QuestionGenerator
pub mod question_generator;

/// Keyword-overlap AnswerExtractor
pub mod answer_extractor;
