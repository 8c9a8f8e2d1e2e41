// ============================================================
// flashcard_qa — library root
// ============================================================
// Layer 1: cli          — argument parsing and printing
// Layer 2: application  — the flashcard pipeline and its config
// Layer 3: domain       — core types, rules, adapter traits
// Layer 4: data         — document loading and text cleanup
// Layer 5: ml           — question generation and answer extraction
// Layer 6: infra        — config, tokenizer and CSV files on disk

pub mod cli;
pub mod application;
pub mod domain;
pub mod data;
pub mod ml;
pub mod infra;

pub use application::generate_use_case::{generate_flashcards, GenerateUseCase};
pub use application::pipeline_config::PipelineConfig;
pub use domain::error::{AdapterError, FlashcardError};
pub use domain::qa_pair::QaPair;
pub use domain::report::{FlashcardSet, Shortfall};
