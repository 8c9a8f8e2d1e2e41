// ============================================================
// Layer 2 — Pipeline Configuration
// ============================================================
// Every tunable number in a flashcard run lives here.
// Serialisable so it can be written to / read from JSON by the
// ConfigStore in the infra layer.
//
// Length budgets (max_*_len) are measured in "units": whitespace
// words by default, tokenizer tokens when a tokenizer is loaded.

use serde::{Deserialize, Serialize};

use crate::domain::answer::DEFAULT_MIN_ANSWER_CHARS;
use crate::domain::error::ConfigError;
use crate::domain::traits::{ExtractionLimits, GenerationRequest};

/// Passages shorter than this (trimmed, in characters) yield no flashcards.
pub const DEFAULT_MIN_PASSAGE_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub min_passage_chars:  usize,
    pub oversample_floor:   usize,
    pub oversample_factor:  usize,
    pub max_qg_input_len:   usize,
    pub max_qg_output_len:  usize,
    pub max_qa_context_len: usize,
    pub max_qa_answer_len:  usize,
    pub min_answer_chars:   usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_passage_chars:  DEFAULT_MIN_PASSAGE_CHARS,
            oversample_floor:   10,
            oversample_factor:  2,
            max_qg_input_len:   512,
            max_qg_output_len:  64,
            max_qa_context_len: 512,
            max_qa_answer_len:  200,
            min_answer_chars:   DEFAULT_MIN_ANSWER_CHARS,
        }
    }
}

impl PipelineConfig {
    /// Reject values that would make every run empty or meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_zero = [
            ("oversample_factor",  self.oversample_factor),
            ("max_qg_input_len",   self.max_qg_input_len),
            ("max_qg_output_len",  self.max_qg_output_len),
            ("max_qa_context_len", self.max_qa_context_len),
            ("max_qa_answer_len",  self.max_qa_answer_len),
        ];
        for (field, value) in non_zero {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must be greater than zero".to_string(),
                });
            }
        }
        Ok(())
    }

    /// How many candidates to ask the generator for:
    /// max(oversample_floor, target * oversample_factor).
    pub fn oversample_count(&self, target: usize) -> usize {
        self.oversample_floor
            .max(target.saturating_mul(self.oversample_factor))
    }

    pub fn generation_request(&self, target: usize) -> GenerationRequest {
        GenerationRequest {
            num_candidates: self.oversample_count(target),
            max_input_len:  self.max_qg_input_len,
            max_output_len: self.max_qg_output_len,
        }
    }

    pub fn extraction_limits(&self) -> ExtractionLimits {
        ExtractionLimits {
            max_context_len: self.max_qa_context_len,
            max_answer_len:  self.max_qa_answer_len,
        }
    }
}
