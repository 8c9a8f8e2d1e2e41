// ============================================================
// Layer 3 — Document Domain Type
// ============================================================
// Represents a single document loaded by one of the loaders.
// This is a plain data struct with no behaviour —
// just a source name and the extracted text content.
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};

/// A raw document loaded from disk or pasted by the user.
/// Format-agnostic — by the time a Document is created the
/// text has already been pulled out of the .txt/.docx/.pdf.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// The filename, or "<inline>" for pasted text
    pub source: String,

    /// The full extracted text before any preprocessing
    pub text: String,
}

impl Document {
    /// Create a new Document with a source name and text content.
    ///
    /// Example:
    ///   let doc = Document::new("biology.txt", "Photosynthesis is...");
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text:   text.into(),
        }
    }

    /// True when the document carries no visible text at all
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_document() {
        assert!(Document::new("a.txt", "  \n\t ").is_blank());
        assert!(!Document::new("a.txt", "text").is_blank());
    }
}
