// ============================================================
// Layer 4 — Data Layer
// ============================================================
// Reads source documents and cleans their text before it
// reaches the pipeline.

pub mod loader;
pub mod preprocessor;
