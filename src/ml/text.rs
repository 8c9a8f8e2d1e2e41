// ============================================================
// Layer 5 — Text Helpers for the Heuristic Adapters
// ============================================================
// Small, allocation-light helpers shared by the question
// generator and the answer extractor:
//
//   split_sentences — sentence boundaries on . ! ? and newlines
//   split_copula    — "X is Y" → (X, "is", Y)
//   keywords        — content words of a question, lowercased
//   find_year       — first 4-digit year in a sentence

/// Copular verbs the adapters recognise, in match priority order.
pub const COPULAS: &[&str] = &["is", "are", "was", "were"];

/// Question words and fillers that carry no content.
const STOP_WORDS: &[&str] = &[
    "what", "when", "where", "which", "who", "whom", "whose", "why", "how",
    "does", "did", "do", "is", "are", "was", "were", "the", "this", "that",
    "these", "those", "have", "has", "had", "will", "with", "from", "into",
    "about", "text", "passage", "happened", "there", "their", "they", "it",
];

/// Split text into trimmed, non-empty sentences.
/// A boundary is '.', '!' or '?' followed by whitespace or end of text,
/// or any newline.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start     = 0usize;
    let mut chars     = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let end = match c {
            '\n' => Some(i),
            '.' | '!' | '?' => match chars.peek() {
                None                               => Some(i + c.len_utf8()),
                Some((_, next)) if next.is_whitespace() => Some(i + c.len_utf8()),
                _ => None,
            },
            _ => None,
        };

        if let Some(end) = end {
            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = end;
        }
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}

/// Strip trailing sentence punctuation.
pub fn strip_terminal(sentence: &str) -> &str {
    sentence.trim_end_matches(|c: char| matches!(c, '.' | '!' | '?' | ';' | ':')).trim_end()
}

/// Find the earliest copula and split around it.
pub fn split_copula(sentence: &str) -> Option<(&str, &'static str, &str)> {
    // ASCII lowercasing keeps byte offsets identical to `sentence`
    let lower = sentence.to_ascii_lowercase();

    let (idx, verb) = COPULAS
        .iter()
        .filter_map(|verb| lower.find(&format!(" {verb} ")).map(|i| (i, *verb)))
        .min_by_key(|(i, _)| *i)?;

    let subject   = sentence[..idx].trim();
    let predicate = sentence[idx + verb.len() + 2..].trim();
    if subject.is_empty() || predicate.is_empty() {
        return None;
    }
    Some((subject, verb, predicate))
}

/// Lowercased, punctuation-trimmed words of a single token.
pub fn clean_word(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase()
}

/// Content words of a question: longer than 3 chars (or numeric),
/// not a question word or filler.
pub fn keywords(text: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for word in text.split_whitespace() {
        let w = clean_word(word);
        let keep = (w.chars().count() > 3 || (!w.is_empty() && w.chars().all(|c| c.is_ascii_digit())))
            && !STOP_WORDS.contains(&w.as_str());
        if keep && !out.contains(&w) {
            out.push(w);
        }
    }
    out
}

/// First standalone 4-digit number between 1000 and 2099.
pub fn find_year(sentence: &str) -> Option<&str> {
    sentence
        .split(|c: char| !c.is_ascii_digit())
        .find(|run| run.len() == 4 && (run.starts_with('1') || run.starts_with("20")))
}

/// Lowercase the first character when the phrase opens with an article,
/// so it reads naturally mid-question ("The cell" → "the cell").
pub fn soften_article(phrase: &str) -> String {
    let first = phrase.split_whitespace().next().unwrap_or("");
    if matches!(first, "The" | "A" | "An") {
        let mut chars = phrase.chars();
        match chars.next() {
            Some(c) => c.to_lowercase().chain(chars).collect(),
            None    => String::new(),
        }
    } else {
        phrase.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sentences() {
        let s = split_sentences("Cells divide. Is 3.5 a number?  Yes!\nNew line here");
        assert_eq!(s, vec!["Cells divide.", "Is 3.5 a number?", "Yes!", "New line here"]);
    }

    #[test]
    fn test_split_sentences_empty() {
        assert!(split_sentences("  \n \n").is_empty());
    }

    #[test]
    fn test_split_copula_picks_earliest_verb() {
        let (subject, verb, predicate) =
            split_copula("The mitochondria are organelles that were studied").unwrap();
        assert_eq!(subject, "The mitochondria");
        assert_eq!(verb, "are");
        assert_eq!(predicate, "organelles that were studied");
    }

    #[test]
    fn test_split_copula_none_without_verb() {
        assert!(split_copula("Plants grow towards light").is_none());
    }

    #[test]
    fn test_keywords_drop_question_words() {
        assert_eq!(keywords("What is Photosynthesis, really?"), vec!["photosynthesis", "really"]);
        assert_eq!(keywords("What happened in 1905?"), vec!["1905"]);
    }

    #[test]
    fn test_find_year() {
        assert_eq!(find_year("Einstein published it in 1905, aged 26."), Some("1905"));
        assert_eq!(find_year("It costs 12345 dollars."), None);
    }

    #[test]
    fn test_soften_article() {
        assert_eq!(soften_article("The cell wall"), "the cell wall");
        assert_eq!(soften_article("Theory of mind"), "Theory of mind");
    }
}
