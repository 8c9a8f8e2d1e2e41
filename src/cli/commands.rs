// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the subcommands: `generate` and `config`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing or conflicting args
//   - type conversion and range checks
//
// Reference: Rust Book §12 (Building a CLI Program)

use std::path::PathBuf;

use clap::{ArgGroup, Args, Subcommand};

use crate::infra::config_store::CONFIG_FILE_NAME;
use crate::ml::answer_extractor::DEFAULT_MIN_OVERLAP;

/// The top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate flashcards from a file or from pasted text
    Generate(GenerateArgs),

    /// Create or inspect a pipeline config file
    Config(ConfigArgs),
}

/// All arguments for the `generate` command.
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("source").required(true).args(["input", "text"])))]
pub struct GenerateArgs {
    /// Educational content to read (.txt, .md, .docx or .pdf)
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Educational content passed directly on the command line
    #[arg(long)]
    pub text: Option<String>,

    /// Number of flashcards to aim for
    #[arg(long, short = 'n', default_value_t = 10,
          value_parser = clap::value_parser!(u64).range(5..=25))]
    pub count: u64,

    /// Share of a question's keywords (by length) an answer sentence must contain
    #[arg(long, default_value_t = DEFAULT_MIN_OVERLAP)]
    pub min_overlap: f32,

    /// Pipeline config JSON (defaults are used when omitted)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// HuggingFace tokenizer.json (or its directory) for token-based length limits
    #[arg(long)]
    pub tokenizer: Option<PathBuf>,

    /// Also write the flashcards to this CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Print the full run report as JSON instead of numbered cards
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `config` command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write a config file filled with the default values
    Init {
        #[arg(long, default_value = CONFIG_FILE_NAME)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective config (file values over defaults)
    Show {
        #[arg(long, default_value = CONFIG_FILE_NAME)]
        path: PathBuf,
    },
}
