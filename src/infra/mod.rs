// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting file and tooling concerns used by the CLI:
//
//   config_store.rs    — PipelineConfig saved/loaded as JSON
//   tokenizer_store.rs — loads a HuggingFace tokenizer.json so
//                        length budgets count real tokens
//   csv_export.rs      — writes flashcards to a CSV file
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Pipeline config persistence
pub mod config_store;

/// Tokenizer loading
pub mod tokenizer_store;

/// Flashcard CSV writer
pub mod csv_export;
