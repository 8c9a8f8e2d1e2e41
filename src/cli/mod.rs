// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All flashcard logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `generate` — read content, run the pipeline, print/export cards
//   2. `config`   — write or show the pipeline config file
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::{bail, Result};
use clap::Parser;
use commands::{Commands, ConfigAction, ConfigArgs, GenerateArgs};

use crate::domain::report::FlashcardSet;

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "flashcard-qa",
    version,
    about = "Turn educational text into question-answer flashcards."
)]
pub struct Cli {
    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct handler.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Generate(args) => run_generate(args),
            Commands::Config(args)   => run_config(args),
        }
    }
}

/// Handles the `generate` subcommand.
fn run_generate(args: GenerateArgs) -> Result<()> {
    use crate::application::generate_use_case::GenerateUseCase;
    use crate::application::pipeline_config::PipelineConfig;
    use crate::data::{loader::load_document, preprocessor::preprocess_text};
    use crate::infra::{
        config_store::ConfigStore, csv_export::FlashcardExporter, tokenizer_store::budget_from,
    };
    use crate::ml::{
        answer_extractor::OverlapAnswerExtractor, question_generator::HeuristicQuestionGenerator,
    };

    let raw = match (&args.input, &args.text) {
        (Some(path), _)    => load_document(path)?.text,
        (None, Some(text)) => text.clone(),
        (None, None)       => bail!("Provide --input <file> or --text <content>"),
    };
    let text = preprocess_text(&raw);

    let config = match &args.config {
        Some(path) => ConfigStore::new(path).load()?,
        None       => PipelineConfig::default(),
    };

    // Adapters are built once here and only borrowed by the use case
    let budget    = budget_from(args.tokenizer.as_ref())?;
    let generator = HeuristicQuestionGenerator::new(budget.clone());
    let extractor = OverlapAnswerExtractor::new(budget).with_min_overlap(args.min_overlap);
    let use_case  = GenerateUseCase::new(&generator, &extractor, config)?;

    tracing::info!("Generating up to {} flashcards from {} chars", args.count, text.chars().count());
    let set = use_case.run(&text, args.count as usize)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&set)?);
    } else {
        print_cards(&set);
    }

    if let Some(path) = &args.csv {
        FlashcardExporter::new(path).write(&set.pairs)?;
        if !args.json {
            println!("\nSaved {} flashcards to {}", set.len(), path.display());
        }
    }
    Ok(())
}

fn print_cards(set: &FlashcardSet) {
    if !set.is_empty() {
        println!("Generated {} flashcards:\n", set.len());
    }
    for (i, pair) in set.pairs.iter().enumerate() {
        println!("Q{}: {}", i + 1, pair.question);
        println!("A{}: {}\n", i + 1, pair.answer);
    }
    if let Some(shortfall) = &set.shortfall {
        println!("Note: {shortfall}");
    }
}

/// Handles the `config` subcommand.
fn run_config(args: ConfigArgs) -> Result<()> {
    use crate::application::pipeline_config::PipelineConfig;
    use crate::infra::config_store::ConfigStore;

    match args.action {
        ConfigAction::Init { path, force } => {
            let store = ConfigStore::new(path);
            if store.path().exists() && !force {
                bail!("'{}' already exists (use --force to overwrite)", store.path().display());
            }
            store.save(&PipelineConfig::default())?;
            println!("Wrote default config to {}", store.path().display());
        }
        ConfigAction::Show { path } => {
            let cfg = ConfigStore::new(path).load_or_default()?;
            println!("{}", serde_json::to_string_pretty(&cfg)?);
        }
    }
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_requires_a_source() {
        assert!(Cli::try_parse_from(["flashcard-qa", "generate"]).is_err());
    }

    #[test]
    fn test_count_range_is_enforced() {
        assert!(Cli::try_parse_from(["flashcard-qa", "generate", "--text", "x", "-n", "4"]).is_err());
        assert!(Cli::try_parse_from(["flashcard-qa", "generate", "--text", "x", "-n", "26"]).is_err());

        let cli = Cli::try_parse_from(["flashcard-qa", "generate", "--text", "x", "-n", "25"]).unwrap();
        match cli.command {
            Commands::Generate(args) => assert_eq!(args.count, 25),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_min_overlap_defaults_and_overrides() {
        let cli = Cli::try_parse_from(["flashcard-qa", "generate", "--text", "x"]).unwrap();
        match cli.command {
            Commands::Generate(args) => assert_eq!(args.min_overlap, 0.5),
            other => panic!("unexpected command {other:?}"),
        }

        let cli = Cli::try_parse_from([
            "flashcard-qa", "generate", "--text", "x", "--min-overlap", "0.25",
        ]).unwrap();
        match cli.command {
            Commands::Generate(args) => assert_eq!(args.min_overlap, 0.25),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_input_and_text_conflict() {
        let parsed = Cli::try_parse_from([
            "flashcard-qa", "generate", "--text", "x", "--input", "notes.txt",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_config_init_refuses_to_overwrite() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        std::fs::write(&path, "{}").unwrap();

        let cli = Cli::try_parse_from([
            "flashcard-qa", "config", "init", "--path", path.to_str().unwrap(),
        ]).unwrap();
        assert!(cli.run().is_err());
    }
}
