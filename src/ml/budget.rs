// ============================================================
// Layer 5 — Length Budgets
// ============================================================
// Adapters truncate their inputs to a maximum length measured in
// "units". Without a tokenizer a unit is a whitespace-separated
// word. With a HuggingFace tokenizer loaded it is a real token,
// and the cut is made at the byte offset where the last kept
// token ends.
//
// Truncation is silent: information past the limit is dropped,
// never reported as an error. The only failures are tokenizer
// faults (encode errors, offsets that do not fit the text).

use std::sync::Arc;

use tokenizers::Tokenizer;

use crate::domain::error::AdapterError;

#[derive(Clone)]
enum Unit {
    Words,
    Tokens(Arc<Tokenizer>),
}

/// Counts and truncates text in words or tokens.
#[derive(Clone)]
pub struct TextBudget {
    unit: Unit,
}

impl TextBudget {
    /// Budget measured in whitespace-separated words
    pub fn words() -> Self {
        Self { unit: Unit::Words }
    }

    /// Budget measured in tokenizer tokens
    pub fn tokens(tokenizer: Tokenizer) -> Self {
        Self { unit: Unit::Tokens(Arc::new(tokenizer)) }
    }

    pub fn unit_name(&self) -> &'static str {
        match self.unit {
            Unit::Words     => "words",
            Unit::Tokens(_) => "tokens",
        }
    }

    /// Number of units in `text`
    pub fn count(&self, text: &str) -> Result<usize, AdapterError> {
        match &self.unit {
            Unit::Words => Ok(text.split_whitespace().count()),
            Unit::Tokens(tok) => Ok(encode(tok, text)?.get_ids().len()),
        }
    }

    /// Longest prefix of `text` holding at most `max` units.
    pub fn truncate<'t>(&self, text: &'t str, max: usize) -> Result<&'t str, AdapterError> {
        match &self.unit {
            Unit::Words => Ok(truncate_words(text, max)),
            Unit::Tokens(tok) => {
                let encoding = encode(tok, text)?;
                let offsets  = encoding.get_offsets();
                if offsets.len() <= max {
                    return Ok(text);
                }
                if max == 0 {
                    return Ok("");
                }
                // Byte offset where the last kept token ends
                let end = offsets[max - 1].1;
                // A cut off a char boundary means the tokenizer's offsets do
                // not describe `text`; returning the whole text would blow the budget
                text.get(..end).map(str::trim_end).ok_or_else(|| {
                    AdapterError::malformed_output(format!(
                        "token offset {end} is not a char boundary of the input"
                    ))
                })
            }
        }
    }
}

impl Default for TextBudget {
    fn default() -> Self {
        Self::words()
    }
}

impl std::fmt::Debug for TextBudget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextBudget").field("unit", &self.unit_name()).finish()
    }
}

fn encode(tok: &Tokenizer, text: &str) -> Result<tokenizers::Encoding, AdapterError> {
    tok.encode(text, false)
        .map_err(|e| AdapterError::internal(format!("tokenise: {e}")))
}

/// Cut `text` right after its `max`-th word (trailing whitespace dropped).
fn truncate_words(text: &str, max: usize) -> &str {
    let mut words   = 0usize;
    let mut in_word = false;

    for (i, c) in text.char_indices() {
        let is_space = c.is_whitespace();
        if !is_space && !in_word {
            // a new word starts here
            if words == max {
                return text[..i].trim_end();
            }
            words += 1;
        }
        in_word = !is_space;
    }

    text
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count() {
        let b = TextBudget::words();
        assert_eq!(b.count("  one two\nthree  ").unwrap(), 3);
        assert_eq!(b.count("").unwrap(), 0);
    }

    #[test]
    fn test_truncate_words_keeps_prefix() {
        let b = TextBudget::words();
        assert_eq!(b.truncate("one two  three four", 2).unwrap(), "one two");
    }

    #[test]
    fn test_truncate_words_short_text_untouched() {
        let b = TextBudget::words();
        assert_eq!(b.truncate("  one two ", 5).unwrap(), "  one two ");
    }

    #[test]
    fn test_truncate_words_zero_budget() {
        let b = TextBudget::words();
        assert_eq!(b.truncate("one two", 0).unwrap(), "");
    }

    #[test]
    fn test_truncate_words_multibyte() {
        let b = TextBudget::words();
        assert_eq!(b.truncate("énergie lumière chimique", 2).unwrap(), "énergie lumière");
    }
}
