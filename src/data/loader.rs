// ============================================================
// Layer 4 — Document Loaders
// ============================================================
// Turns a file on disk into a Document. One loader per format,
// each implementing the DocumentSource trait from Layer 3:
//
//   TextFileLoader → .txt / .md, read as UTF-8
//   DocxLoader     → .docx via docx-rs
//   PdfLoader      → .pdf via pdf-extract
//
// load_document() picks the loader from the file extension.
// A file that yields no visible text is an error: there is
// nothing to make flashcards from.
//
// The docx-rs tree we walk:
//   Document
//     └── children: Vec<DocumentChild>
//           └── Paragraph
//                 └── children: Vec<ParagraphChild>
//                       └── Run
//                             └── children: Vec<RunChild>
//                                   └── Text (the actual words!)

use anyhow::{bail, Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};
use docx_rs::read_docx;

use crate::domain::document::Document;
use crate::domain::traits::DocumentSource;

// ─── Plain text ───────────────────────────────────────────────────────────────
pub struct TextFileLoader {
    path: PathBuf,
}

impl TextFileLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSource for TextFileLoader {
    fn load(&self) -> Result<Document> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read text file '{}'", self.path.display()))?;
        Ok(Document::new(source_name(&self.path), text))
    }
}

// ─── Word documents ───────────────────────────────────────────────────────────
pub struct DocxLoader {
    path: PathBuf,
}

impl DocxLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSource for DocxLoader {
    fn load(&self) -> Result<Document> {
        // A .docx file is a ZIP archive of XML parts
        let bytes = fs::read(&self.path)
            .with_context(|| format!("Cannot read '{}'", self.path.display()))?;

        let docx = read_docx(&bytes).map_err(|e| {
            anyhow::anyhow!("docx-rs parse error in '{}': {:?}", self.path.display(), e)
        })?;

        let mut paragraphs: Vec<String> = Vec::new();

        for child in &docx.document.children {
            use docx_rs::DocumentChild;

            // Tables, images and section breaks are skipped
            if let DocumentChild::Paragraph(para) = child {
                let para_text = extract_paragraph_text(para);
                if !para_text.trim().is_empty() {
                    paragraphs.push(para_text);
                }
            }
        }

        Ok(Document::new(source_name(&self.path), paragraphs.join("\n")))
    }
}

/// Concatenate every text run of one paragraph.
fn extract_paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut parts = Vec::new();

    for child in &para.children {
        use docx_rs::ParagraphChild;

        if let ParagraphChild::Run(run) = child {
            for rc in &run.children {
                use docx_rs::RunChild;

                if let RunChild::Text(t) = rc {
                    parts.push(t.text.clone());
                }
            }
        }
    }

    parts.join("")
}

// ─── PDF ──────────────────────────────────────────────────────────────────────
pub struct PdfLoader {
    path: PathBuf,
}

impl PdfLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSource for PdfLoader {
    fn load(&self) -> Result<Document> {
        let bytes = fs::read(&self.path)
            .with_context(|| format!("Cannot read '{}'", self.path.display()))?;
        let text = pdf_extract::extract_text_from_mem(&bytes)
            .with_context(|| format!("Failed to extract text from PDF '{}'", self.path.display()))?;
        Ok(Document::new(source_name(&self.path), text))
    }
}

// ─── Dispatch ─────────────────────────────────────────────────────────────────
/// Pick a loader by file extension (case-insensitive).
pub fn loader_for(path: &Path) -> Result<Box<dyn DocumentSource>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let loader: Box<dyn DocumentSource> = match ext.as_str() {
        "txt" | "md" => Box::new(TextFileLoader::new(path)),
        "docx"       => Box::new(DocxLoader::new(path)),
        "pdf"        => Box::new(PdfLoader::new(path)),
        other => bail!(
            "Unsupported file type '{}' for '{}' (expected .txt, .md, .docx or .pdf)",
            other,
            path.display()
        ),
    };
    Ok(loader)
}

/// Load a document and make sure it has something to read.
pub fn load_document(path: &Path) -> Result<Document> {
    let doc = loader_for(path)?.load()?;
    if doc.is_blank() {
        bail!("Could not extract any text from '{}'", path.display());
    }
    tracing::info!("Loaded: {} ({} chars)", doc.source, doc.text.chars().count());
    Ok(doc)
}

fn source_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string()
}
