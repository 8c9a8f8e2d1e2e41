// ============================================================
// Layer 2 — Generate Use Case (the flashcard pipeline)
// ============================================================
// Runs one passage through the full flow, strictly in order:
//
//   Step 1: Length guard           → too short = empty set, not an error
//   Step 2: Generate candidates    → one call, oversampled
//   Step 3: Normalise + dedup      → keep generation order, stop at target
//   Step 4: Extract answers        → one call per question, stop at target
//   Step 5: Assemble FlashcardSet  → pairs + stats + shortfall reason
//
// Generation is a single batched call so it is over-provisioned up
// front. Extraction runs once per question, so only that loop stops
// early. There is no second generation round when too few unique
// questions come back; the run just returns fewer pairs.
//
// Adapters are borrowed, never owned: the host builds them once and
// reuses them across runs. One use case runs one passage at a time.

use std::collections::HashSet;

use crate::application::pipeline_config::PipelineConfig;
use crate::domain::answer::AnswerFilter;
use crate::domain::error::FlashcardError;
use crate::domain::qa_pair::QaPair;
use crate::domain::question::{check_candidate, normalize};
use crate::domain::report::{FlashcardSet, RunStats, Shortfall};
use crate::domain::traits::{AnswerExtractor, QuestionGenerator};

pub struct GenerateUseCase<'a, G: ?Sized, E: ?Sized> {
    generator:     &'a G,
    extractor:     &'a E,
    config:        PipelineConfig,
    answer_filter: AnswerFilter,
}

impl<'a, G, E> GenerateUseCase<'a, G, E>
where
    G: QuestionGenerator + ?Sized,
    E: AnswerExtractor + ?Sized,
{
    /// Build a use case over borrowed adapters. Fails on an invalid config.
    pub fn new(
        generator: &'a G,
        extractor: &'a E,
        config:    PipelineConfig,
    ) -> Result<Self, FlashcardError> {
        config.validate()?;
        let answer_filter = AnswerFilter::new(config.min_answer_chars);
        Ok(Self { generator, extractor, config, answer_filter })
    }

    /// Turn `passage` into at most `target` flashcards.
    ///
    /// Returns `Err` only for run-level failures: a failed generation call
    /// or a zero target. Too-short input and missed targets come back as
    /// `Ok` with a [`Shortfall`] attached.
    pub fn run(&self, passage: &str, target: usize) -> Result<FlashcardSet, FlashcardError> {
        // ── Step 1: Length guard ──────────────────────────────────────────────
        let chars = passage.trim().chars().count();
        if chars < self.config.min_passage_chars {
            tracing::warn!(
                chars,
                min = self.config.min_passage_chars,
                "Input text is too short for flashcard generation"
            );
            return Ok(FlashcardSet::too_short(target, chars, self.config.min_passage_chars));
        }

        if target == 0 {
            return Err(FlashcardError::InvalidTarget);
        }

        // ── Step 2: Generate candidates ───────────────────────────────────────
        let request = self.config.generation_request(target);
        tracing::debug!(target, num_candidates = request.num_candidates, "Requesting candidate questions");

        let candidates = self
            .generator
            .generate(passage, &request)
            .map_err(FlashcardError::Generation)?;

        let mut stats = RunStats { candidates: candidates.len(), ..RunStats::default() };

        // ── Step 3: Normalise + dedup ─────────────────────────────────────────
        let questions = select_questions(&candidates, target);
        stats.accepted_questions = questions.len();

        if questions.len() < target {
            tracing::warn!(
                unique = questions.len(),
                target,
                "Fewer unique questions than requested; consider a longer or more varied text"
            );
        }

        // ── Step 4: Extract answers ───────────────────────────────────────────
        let limits    = self.config.extraction_limits();
        let mut pairs = Vec::with_capacity(target.min(questions.len()));

        for question in questions {
            let extracted = match self.extractor.extract(&question, passage, &limits) {
                Ok(extracted) => extracted,
                Err(e) => {
                    tracing::warn!(question = %question, error = %e, "Answer extraction failed, skipping");
                    stats.extraction_failures += 1;
                    continue;
                }
            };

            match self.answer_filter.check_extracted(&extracted, &question) {
                Ok(answer) => {
                    pairs.push(QaPair::new(question, answer));
                    if pairs.len() >= target {
                        break;
                    }
                }
                Err(reason) => {
                    tracing::debug!(question = %question, %reason, "Answer rejected");
                    stats.rejected_answers += 1;
                }
            }
        }

        // ── Step 5: Assemble ──────────────────────────────────────────────────
        let shortfall = shortfall_for(target, pairs.len(), stats.extraction_failures);

        tracing::info!(
            produced = pairs.len(),
            target,
            candidates = stats.candidates,
            accepted_questions = stats.accepted_questions,
            rejected_answers = stats.rejected_answers,
            extraction_failures = stats.extraction_failures,
            "Flashcard generation finished"
        );

        Ok(FlashcardSet { pairs, requested: target, stats, shortfall })
    }
}

/// Walk candidates in generation order and keep the first `target`
/// that pass the candidate filter. Returns cleaned question text.
fn select_questions(candidates: &[String], target: usize) -> Vec<String> {
    let mut seen     = HashSet::new();
    let mut accepted = Vec::new();

    for raw in candidates {
        let normalized = normalize(raw);
        match check_candidate(&normalized.cleaned, &normalized.key, &seen) {
            Ok(()) => {
                seen.insert(normalized.key);
                accepted.push(normalized.cleaned);
                if accepted.len() >= target {
                    break;
                }
            }
            Err(reason) => {
                tracing::debug!(candidate = %raw, %reason, "Candidate question rejected");
            }
        }
    }

    accepted
}

fn shortfall_for(requested: usize, produced: usize, failures: usize) -> Option<Shortfall> {
    if produced >= requested {
        None
    } else if failures > 0 {
        Some(Shortfall::ExtractionFailures { requested, produced, failures })
    } else {
        Some(Shortfall::UnderAttainment { requested, produced })
    }
}

/// Convenience entry point: default config, pairs only.
///
/// Returns between 0 and `target_count` pairs. Too-short input is an
/// empty result rather than an error.
pub fn generate_flashcards<G, E>(
    generator:    &G,
    extractor:    &E,
    text:         &str,
    target_count: usize,
) -> Result<Vec<QaPair>, FlashcardError>
where
    G: QuestionGenerator + ?Sized,
    E: AnswerExtractor + ?Sized,
{
    let use_case = GenerateUseCase::new(generator, extractor, PipelineConfig::default())?;
    Ok(use_case.run(text, target_count)?.into_pairs())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
// Deterministic stub adapters stand in for real models here.
#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    use super::*;
    use crate::domain::answer::ExtractedAnswer;
    use crate::domain::error::AdapterError;
    use crate::domain::question::question_key;
    use crate::domain::traits::{ExtractionLimits, GenerationRequest};

    const PASSAGE: &str = "Photosynthesis is the process used by plants, algae and \
        cyanobacteria to convert light energy into chemical energy stored in sugar.";

    /// Returns a fixed list of questions and remembers the request it saw.
    struct ScriptedGenerator {
        questions: Vec<String>,
        last_request: Cell<Option<GenerationRequest>>,
    }

    impl ScriptedGenerator {
        fn new(questions: &[&str]) -> Self {
            Self {
                questions: questions.iter().map(|q| q.to_string()).collect(),
                last_request: Cell::new(None),
            }
        }
    }

    impl QuestionGenerator for ScriptedGenerator {
        fn generate(&self, _passage: &str, request: &GenerationRequest) -> Result<Vec<String>, AdapterError> {
            self.last_request.set(Some(*request));
            Ok(self.questions.clone())
        }
    }

    struct FailingGenerator;

    impl QuestionGenerator for FailingGenerator {
        fn generate(&self, _passage: &str, _request: &GenerationRequest) -> Result<Vec<String>, AdapterError> {
            Err(AdapterError::internal("model exploded"))
        }
    }

    enum Scripted {
        Answer(&'static str),
        Impossible,
        Fail,
    }

    /// Answers by question text; unknown questions get a generic valid answer.
    struct ScriptedExtractor {
        script:      HashMap<String, Scripted>,
        calls:       RefCell<Vec<String>>,
        last_limits: Cell<Option<ExtractionLimits>>,
    }

    impl ScriptedExtractor {
        fn new(script: Vec<(&str, Scripted)>) -> Self {
            Self {
                script:      script.into_iter().map(|(q, s)| (q.to_string(), s)).collect(),
                calls:       RefCell::new(Vec::new()),
                last_limits: Cell::new(None),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl AnswerExtractor for ScriptedExtractor {
        fn extract(&self, question: &str, _passage: &str, limits: &ExtractionLimits) -> Result<ExtractedAnswer, AdapterError> {
            self.calls.borrow_mut().push(question.to_string());
            self.last_limits.set(Some(*limits));
            match self.script.get(question) {
                Some(Scripted::Answer(a))   => Ok(ExtractedAnswer::span(*a)),
                Some(Scripted::Impossible)  => Ok(ExtractedAnswer::impossible()),
                Some(Scripted::Fail)        => Err(AdapterError::internal("out of memory")),
                None => Ok(ExtractedAnswer::span(format!("answer to {question}"))),
            }
        }
    }

    fn run(gen: &ScriptedGenerator, ext: &ScriptedExtractor, text: &str, target: usize) -> FlashcardSet {
        GenerateUseCase::new(gen, ext, PipelineConfig::default())
            .unwrap()
            .run(text, target)
            .unwrap()
    }

    #[test]
    fn test_short_input_returns_empty_for_any_target() {
        let gen = ScriptedGenerator::new(&["What is X?"]);
        let ext = ScriptedExtractor::new(vec![]);
        let text = "Too short for real content, just filler";

        for target in [0, 1, 10, 25, 1000] {
            let set = run(&gen, &ext, text, target);
            assert!(set.is_empty());
            assert!(matches!(set.shortfall, Some(Shortfall::InputTooShort { .. })));
        }
        // the guard short-circuits before any adapter is touched
        assert!(gen.last_request.get().is_none());
        assert_eq!(ext.call_count(), 0);
    }

    #[test]
    fn test_whitespace_padding_does_not_pass_the_guard() {
        let gen  = ScriptedGenerator::new(&["What is X?"]);
        let ext  = ScriptedExtractor::new(vec![]);
        // 49 chars centred in 120 columns of padding
        let text = format!("{:^120}", "forty-nine characters of text, not quite enough!!");
        assert!(run(&gen, &ext, &text, 5).is_empty());
    }

    #[test]
    fn test_guard_boundary_is_fifty_chars() {
        let ext = ScriptedExtractor::new(vec![]);

        // One short of the minimum: reported, generator untouched
        let gen   = ScriptedGenerator::new(&["What is X?"]);
        let short = format!("  \n{}\t ", "a".repeat(49));
        let set   = run(&gen, &ext, &short, 5);
        assert_eq!(set.shortfall, Some(Shortfall::InputTooShort { chars: 49, min: 50 }));
        assert!(gen.last_request.get().is_none());

        // Exactly the minimum passes through to generation
        let gen    = ScriptedGenerator::new(&["What is X?"]);
        let enough = format!("  \n{}\t ", "a".repeat(50));
        let set    = run(&gen, &ext, &enough, 5);
        assert!(gen.last_request.get().is_some());
        assert!(!matches!(set.shortfall, Some(Shortfall::InputTooShort { .. })));
    }

    #[test]
    fn test_duplicate_questions_collapse_in_order() {
        let gen = ScriptedGenerator::new(&[
            "What is photosynthesis?",
            "what is photosynthesis",
            "How do plants make food?",
        ]);
        let ext = ScriptedExtractor::new(vec![
            ("What is photosynthesis?", Scripted::Answer("converting light into chemical energy")),
            ("How do plants make food?", Scripted::Answer("through photosynthesis")),
        ]);

        let set = run(&gen, &ext, PASSAGE, 10);
        assert_eq!(set.pairs, vec![
            QaPair::new("What is photosynthesis?", "converting light into chemical energy"),
            QaPair::new("How do plants make food?", "through photosynthesis"),
        ]);
    }

    #[test]
    fn test_impossible_answer_is_dropped() {
        let gen = ScriptedGenerator::new(&["Who discovered it?", "Where does it happen?"]);
        let ext = ScriptedExtractor::new(vec![
            ("Who discovered it?", Scripted::Impossible),
            ("Where does it happen?", Scripted::Answer("in the chloroplasts")),
        ]);

        let set = run(&gen, &ext, PASSAGE, 2);
        assert_eq!(set.pairs, vec![QaPair::new("Where does it happen?", "in the chloroplasts")]);
        assert_eq!(set.stats.rejected_answers, 1);
    }

    #[test]
    fn test_under_attainment_is_not_an_error() {
        let gen = ScriptedGenerator::new(&["What is light?", "What is sugar?", "not a question"]);
        let ext = ScriptedExtractor::new(vec![]);

        let set = run(&gen, &ext, PASSAGE, 3);
        assert_eq!(set.len(), 2);
        assert_eq!(set.shortfall, Some(Shortfall::UnderAttainment { requested: 3, produced: 2 }));
    }

    #[test]
    fn test_output_never_exceeds_target_and_extraction_stops_early() {
        let questions: Vec<String> = (0..30).map(|i| format!("What is item {i}?")).collect();
        let refs: Vec<&str> = questions.iter().map(String::as_str).collect();
        let gen = ScriptedGenerator::new(&refs);
        let ext = ScriptedExtractor::new(vec![]);

        let set = run(&gen, &ext, PASSAGE, 5);
        assert_eq!(set.len(), 5);
        assert_eq!(ext.call_count(), 5);
        assert!(set.shortfall.is_none());
    }

    #[test]
    fn test_oversample_count_is_passed_to_generator() {
        let gen = ScriptedGenerator::new(&["What is X?"]);
        let ext = ScriptedExtractor::new(vec![]);

        run(&gen, &ext, PASSAGE, 3);
        assert_eq!(gen.last_request.get().map(|r| r.num_candidates), Some(10));

        run(&gen, &ext, PASSAGE, 8);
        let request = gen.last_request.get().unwrap();
        assert_eq!(request.num_candidates, 16);
        assert_eq!(request.max_input_len, 512);
        assert_eq!(request.max_output_len, 64);
    }

    #[test]
    fn test_extraction_limits_come_from_config() {
        let gen = ScriptedGenerator::new(&["What is X?"]);
        let ext = ScriptedExtractor::new(vec![]);
        let cfg = PipelineConfig {
            max_qa_context_len: 300,
            max_qa_answer_len:  40,
            ..PipelineConfig::default()
        };

        GenerateUseCase::new(&gen, &ext, cfg).unwrap().run(PASSAGE, 1).unwrap();
        assert_eq!(
            ext.last_limits.get(),
            Some(ExtractionLimits { max_context_len: 300, max_answer_len: 40 })
        );
    }

    #[test]
    fn test_dedup_stops_at_target_without_regeneration() {
        // Only the first two unique questions are kept, so a rejected
        // answer for the first one is not replaced by a later candidate
        let gen = ScriptedGenerator::new(&["Q one?", "Q two?", "Q three?", "Q four?"]);
        let ext = ScriptedExtractor::new(vec![("Q one?", Scripted::Answer("no"))]);

        let set = run(&gen, &ext, PASSAGE, 2);
        assert_eq!(set.len(), 1);
        assert_eq!(set.pairs[0].question, "Q two?");
        assert_eq!(set.stats.accepted_questions, 2);
        assert_eq!(ext.call_count(), 2);
    }

    #[test]
    fn test_extraction_failure_skips_question() {
        let gen = ScriptedGenerator::new(&["What fails?", "What works?"]);
        let ext = ScriptedExtractor::new(vec![
            ("What fails?", Scripted::Fail),
            ("What works?", Scripted::Answer("the second question")),
        ]);

        let set = run(&gen, &ext, PASSAGE, 2);
        assert_eq!(set.pairs, vec![QaPair::new("What works?", "the second question")]);
        assert_eq!(set.stats.extraction_failures, 1);
        assert_eq!(
            set.shortfall,
            Some(Shortfall::ExtractionFailures { requested: 2, produced: 1, failures: 1 })
        );
    }

    #[test]
    fn test_generation_failure_is_fatal() {
        let ext = ScriptedExtractor::new(vec![]);
        let use_case = GenerateUseCase::new(&FailingGenerator, &ext, PipelineConfig::default()).unwrap();

        let err = use_case.run(PASSAGE, 5).unwrap_err();
        assert!(matches!(err, FlashcardError::Generation(_)));
        assert_eq!(ext.call_count(), 0);
    }

    #[test]
    fn test_zero_target_is_rejected() {
        let gen = ScriptedGenerator::new(&["What is X?"]);
        let ext = ScriptedExtractor::new(vec![]);
        let use_case = GenerateUseCase::new(&gen, &ext, PipelineConfig::default()).unwrap();

        assert!(matches!(use_case.run(PASSAGE, 0), Err(FlashcardError::InvalidTarget)));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let gen = ScriptedGenerator::new(&[]);
        let ext = ScriptedExtractor::new(vec![]);
        let cfg = PipelineConfig { oversample_factor: 0, ..PipelineConfig::default() };

        assert!(matches!(
            GenerateUseCase::new(&gen, &ext, cfg),
            Err(FlashcardError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_output_properties_hold_on_noisy_candidates() {
        let gen = ScriptedGenerator::new(&[
            "  What is\nchlorophyll? ",
            "What is chlorophyll?",
            "",
            "Describe the leaf.",
            "Why are leaves green?",
            "WHY are leaves green",
            "What is stored in sugar?",
            "What is energy?",
        ]);
        let ext = ScriptedExtractor::new(vec![
            ("What is chlorophyll?", Scripted::Answer("a green pigment")),
            ("Why are leaves green?", Scripted::Answer("why are leaves green?")),
            ("What is stored in sugar?", Scripted::Answer("chemical energy")),
            ("What is energy?", Scripted::Answer("    ")),
        ]);

        let set = run(&gen, &ext, PASSAGE, 10);
        assert!(set.len() <= 10);

        // unique keys
        let keys: HashSet<_> = set.pairs.iter().map(|p| question_key(&p.question)).collect();
        assert_eq!(keys.len(), set.len());

        // questions appear in generation order
        let order: Vec<&str> = set.pairs.iter().map(|p| p.question.as_str()).collect();
        assert_eq!(order, vec!["What is chlorophyll?", "What is stored in sugar?"]);

        // answers are valid
        for pair in &set.pairs {
            assert!(pair.answer.chars().count() > 3);
            assert_ne!(pair.answer.to_lowercase(), pair.question.to_lowercase());
        }
    }

    #[test]
    fn test_generate_flashcards_returns_pairs_only() {
        let gen = ScriptedGenerator::new(&["What is photosynthesis?"]);
        let ext = ScriptedExtractor::new(vec![]);

        let pairs = generate_flashcards(&gen, &ext, PASSAGE, 3).unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].question, "What is photosynthesis?");

        let none = generate_flashcards(&gen, &ext, "short", 3).unwrap();
        assert!(none.is_empty());
    }
}
