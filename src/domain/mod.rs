// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits that describe what a
// flashcard run is made of. Nothing in here touches files,
// models or the terminal.
//
//   document.rs — a loaded source passage
//   qa_pair.rs  — the finished question/answer flashcard
//   question.rs — question normalisation + candidate filter
//   answer.rs   — extracted answers + answer validity filter
//   traits.rs   — the generation/extraction adapter seams
//   report.rs   — run statistics and shortfall reasons
//   error.rs    — typed adapter and run-level errors
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A loaded document (the source passage plus where it came from)
pub mod document;

// A finished flashcard
pub mod qa_pair;

// Question cleanup, dedup keys, and the candidate filter
pub mod question;

// Extracted answers and the answer validity filter
pub mod answer;

// Adapter traits that the ml layer implements
pub mod traits;

// What happened during one run
pub mod report;

// Error taxonomy
pub mod error;
