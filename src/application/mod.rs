// ============================================================
// Layer 2 — Application / Use-Case Layer
// ============================================================
// Coordinates the flashcard pipeline. It knows the order of the
// steps but not how questions are generated or answers extracted;
// those come in through the domain traits.

pub mod pipeline_config;
pub mod generate_use_case;
