// ============================================================
// Layer 6 — Tokenizer Store
// ============================================================
// Loads a HuggingFace tokenizer.json so length budgets can be
// counted in real tokens instead of words. Accepts either the
// file itself or a directory that contains tokenizer.json.

use anyhow::Result;
use std::path::PathBuf;
use tokenizers::Tokenizer;

use crate::ml::budget::TextBudget;

pub struct TokenizerStore {
    path: PathBuf,
}

impl TokenizerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolved path of the tokenizer JSON file
    pub fn file_path(&self) -> PathBuf {
        if self.path.is_dir() {
            self.path.join("tokenizer.json")
        } else {
            self.path.clone()
        }
    }

    /// Load a previously saved tokenizer from its JSON file
    pub fn load(&self) -> Result<Tokenizer> {
        let path = self.file_path();
        let tokenizer = Tokenizer::from_file(&path)
            .map_err(|e| anyhow::anyhow!(
                "Cannot load tokenizer from '{}': {}", path.display(), e
            ))?;
        tracing::info!("Loaded tokenizer from '{}'", path.display());
        Ok(tokenizer)
    }

    /// Token-based budget backed by this tokenizer
    pub fn load_budget(&self) -> Result<TextBudget> {
        Ok(TextBudget::tokens(self.load()?))
    }
}

/// Word budget unless a tokenizer path is given.
pub fn budget_from(path: Option<&PathBuf>) -> Result<TextBudget> {
    match path {
        Some(p) => TokenizerStore::new(p.clone()).load_budget(),
        None    => Ok(TextBudget::words()),
    }
}
