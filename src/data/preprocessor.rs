// ============================================================
// Layer 4 — Text Preprocessor
// ============================================================
// Cleans raw text pulled out of files or pasted by the user
// before it reaches the flashcard pipeline.
//
// Why clean at all?
//   The length guard counts characters and the question generator
//   splits on sentence punctuation. Stray layout characters would
//   inflate the first and confuse the second.
//
// Raw input often contains:
//   - Non-breaking spaces (U+00A0) and zero-width spaces (U+200B)
//   - Carriage returns (\r) from Windows line endings
//   - Tabs and runs of spaces from PDF/Word layout
//   - Blank lines between every paragraph
//
// Cleaning steps (applied in order):
//   1. Replace Unicode whitespace variants and control chars with a space
//   2. Collapse runs of spaces and trim each line
//   3. Collapse runs of newlines into a single newline
//   4. Trim the whole text
//
// Reference: Rust Book §8 (Strings in Rust)
//            Rust Book §13 (Iterators)

pub struct Preprocessor;

impl Preprocessor {
    /// Create a new Preprocessor instance
    pub fn new() -> Self {
        Self
    }

    /// Clean a raw text string for the pipeline.
    /// Borrows the input and returns a fresh owned String.
    pub fn clean(&self, text: &str) -> String {

        // ── Step 1: Normalise individual characters ───────────────────────────
        // Invisible or layout-only characters become a plain space so the
        // sentence splitter and the length guard only ever see real text.
        let step1: String = text
            .chars()
            .map(|c| match c {
                // Tabs from tables and indented PDF columns
                '\t' => ' ',
                // Non-breaking, zero-width and BOM spaces from Word / web copy
                '\u{00A0}' | '\u{200B}' | '\u{FEFF}' => ' ',
                // Windows line endings → Unix newline
                '\r' => '\n',
                // Anything else invisible (except newline)
                c if c.is_control() && c != '\n' => ' ',
                c => c,
            })
            .collect();

        // ── Step 2: Clean each line individually ─────────────────────────────
        // Working per line keeps paragraph breaks intact while spaces collapse
        let step2: String = step1
            .lines()
            .map(|line| {
                let mut out        = String::with_capacity(line.len());
                let mut last_space = false;

                for c in line.chars() {
                    if c == ' ' {
                        // Keep only the first space of a run
                        if !last_space {
                            out.push(' ');
                        }
                        last_space = true;
                    } else {
                        out.push(c);
                        last_space = false;
                    }
                }

                out.trim().to_string()
            })
            .collect::<Vec<_>>()
            .join("\n");

        // ── Step 3: Collapse newline runs ─────────────────────────────────────
        // Blank lines between paragraphs carry no meaning for question
        // generation, so any run of newlines shrinks to a single one.
        let mut result           = String::with_capacity(step2.len());
        let mut last_was_newline = false;

        for c in step2.chars() {
            if c == '\n' {
                if !last_was_newline {
                    result.push(c);
                }
                last_was_newline = true;
            } else {
                last_was_newline = false;
                result.push(c);
            }
        }

        // Final trim of the whole passage
        result.trim().to_string()
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Shorthand for `Preprocessor::new().clean(text)`.
pub fn preprocess_text(text: &str) -> String {
    Preprocessor::new().clean(text)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_multiple_spaces() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("hello   world"), "hello world");
    }

    #[test]
    fn test_trims_edges() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("  hello world  "), "hello world");
    }

    #[test]
    fn test_removes_control_chars() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("hello\x01world"), "hello world");
    }

    #[test]
    fn test_collapses_newline_runs() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("line1\n\n\n\r\nline2"), "line1\nline2");
    }

    #[test]
    fn test_trims_each_line() {
        assert_eq!(preprocess_text("  a b \n\t c  "), "a b\nc");
    }

    #[test]
    fn test_empty_string() {
        let p = Preprocessor::new();
        assert_eq!(p.clean(""), "");
    }
}
