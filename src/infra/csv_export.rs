// ============================================================
// Layer 6 — Flashcard CSV Export
// ============================================================
// Writes a run's flashcards to a CSV file that opens cleanly in
// Excel, Google Sheets or any flashcard app with CSV import.
//
// Example CSV output:
//   question,answer
//   What is photosynthesis?,the process plants use to make sugar
//   "Why is it that leaves look green?","they hold a pigment, chlorophyll"
//
// Fields containing a comma, quote, CR or LF are wrapped in double
// quotes and embedded quotes are doubled (RFC 4180).

use anyhow::{Context, Result};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::domain::qa_pair::QaPair;

pub const CSV_HEADER: &str = "question,answer";

pub struct FlashcardExporter {
    /// Full path to the CSV file
    csv_path: PathBuf,
}

impl FlashcardExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { csv_path: path.into() }
    }

    /// Write header + one row per pair, replacing any existing file.
    pub fn write(&self, pairs: &[QaPair]) -> Result<()> {
        if let Some(parent) = self.csv_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Cannot create '{}'", parent.display()))?;
            }
        }

        let mut f = fs::File::create(&self.csv_path)
            .with_context(|| format!("Cannot create CSV '{}'", self.csv_path.display()))?;
        f.write_all(to_csv_string(pairs).as_bytes())
            .with_context(|| format!("Cannot write CSV '{}'", self.csv_path.display()))?;

        tracing::info!("Exported {} flashcards to '{}'", pairs.len(), self.csv_path.display());
        Ok(())
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }
}

/// Render pairs as CSV text (header included, '\n' line endings).
pub fn to_csv_string(pairs: &[QaPair]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for pair in pairs {
        out.push_str(&escape_field(&pair.question));
        out.push(',');
        out.push_str(&escape_field(&pair.answer));
        out.push('\n');
    }
    out
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
