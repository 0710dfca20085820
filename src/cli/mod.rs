//! CLI command definitions and handlers

pub(crate) mod analyze;
mod demo;
mod lexicon;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sentilex - lexicon-based sentiment scoring
///
/// 100% LOCAL - No model downloads. No data leaves your machine.
#[derive(Parser, Debug)]
#[command(name = "sentilex")]
#[command(
    version,
    about = "Lexicon-based sentiment scoring — sum word weights, label the total through a threshold policy",
    long_about = "Sentilex tokenizes text (lowercase, strip punctuation, split on whitespace), \
looks each word up in a word→weight lexicon, and sums the weights into a signed \
sentiment score with a label and confidence tier.\n\n\
100% LOCAL — No model downloads. No data leaves your machine.",
    after_help = "\
Examples:
  sentilex analyze \"I love this amazing ice cream!\"   Score one text
  sentilex analyze --file reviews.txt --format json   Score each line, JSON output
  sentilex analyze --stdin --fail-on negative         CI guard over piped text
  sentilex analyze \"okay\" --policy simple             Strict sign-split labeling
  sentilex demo                                       Run the bundled demo sentences
  sentilex lexicon show                               Print the active lexicon

Documentation: https://github.com/sentilex/sentilex"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze text for sentiment
    #[command(after_help = "\
Examples:
  sentilex analyze \"What a wonderful day\"            Score one text
  sentilex analyze --stdin                            Score standard input as one text
  sentilex analyze --file reviews.txt                 Score each non-empty line separately
  sentilex analyze \"meh\" --format json               JSON output for scripting
  sentilex analyze \"bad day\" --fail-on negative      Exit 1 on a negative label
  sentilex analyze \"nice\" --explain                   Step-by-step breakdown
  sentilex analyze \"ok\" --lexicon my.toml            Merge a custom lexicon over the built-in")]
    Analyze {
        /// Text to analyze (multiple args are joined with spaces)
        #[arg(value_name = "TEXT")]
        text: Vec<String>,

        /// Read the text from standard input
        #[arg(long)]
        stdin: bool,

        /// Score each non-empty line of this file as its own text
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json", "markdown", "md"])]
        format: String,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Lexicon file merged over the built-in table
        #[arg(long, value_name = "PATH")]
        lexicon: Option<PathBuf>,

        /// Use only the custom lexicon, skipping the built-in table
        #[arg(long)]
        no_builtin: bool,

        /// Threshold policy: dead-zone (default) or simple
        #[arg(long, value_parser = ["simple", "sign", "dead-zone", "deadzone"])]
        policy: Option<String>,

        /// Disable emoji in output (cleaner for CI logs)
        #[arg(long)]
        no_emoji: bool,

        /// Exit with code 1 if any result has this sentiment
        #[arg(long, value_parser = ["positive", "negative", "neutral"])]
        fail_on: Option<String>,

        /// Show the step-by-step scoring breakdown (text format only)
        #[arg(long)]
        explain: bool,
    },

    /// Analyze the bundled demonstration sentences
    Demo {
        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json", "markdown", "md"])]
        format: String,

        /// Threshold policy: dead-zone (default) or simple
        #[arg(long, value_parser = ["simple", "sign", "dead-zone", "deadzone"])]
        policy: Option<String>,

        /// Disable emoji in output
        #[arg(long)]
        no_emoji: bool,
    },

    /// Inspect, validate, or scaffold lexicon files
    Lexicon {
        #[command(subcommand)]
        action: LexiconAction,
    },

    /// Initialize the user config file with example settings
    Init,
}

#[derive(Subcommand, Debug)]
pub enum LexiconAction {
    /// Print the active lexicon sorted by weight
    Show {
        /// Lexicon file merged over the built-in table
        #[arg(long, value_name = "PATH")]
        lexicon: Option<PathBuf>,

        /// Use only the custom lexicon, skipping the built-in table
        #[arg(long)]
        no_builtin: bool,
    },

    /// Validate a lexicon file and warn about out-of-range weights
    Check {
        /// Lexicon file to validate
        path: PathBuf,
    },

    /// Write a commented starter lexicon file
    Init {
        /// Destination path for the new lexicon file
        path: PathBuf,
    },
}

/// Dispatch a parsed CLI invocation
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze {
            text,
            stdin,
            file,
            format,
            output,
            lexicon,
            no_builtin,
            policy,
            no_emoji,
            fail_on,
            explain,
        } => analyze::run(analyze::AnalyzeOptions {
            text,
            stdin,
            file,
            format,
            output,
            lexicon,
            no_builtin,
            policy,
            no_emoji,
            fail_on,
            explain,
        }),

        Commands::Demo {
            format,
            policy,
            no_emoji,
        } => demo::run(&format, policy.as_deref(), no_emoji),

        Commands::Lexicon { action } => lexicon::run(action),

        Commands::Init => {
            let path = crate::config::UserConfig::init_user_config()?;
            println!("✅ Config initialized at: {}", path.display());
            println!("\nEdit to set a default policy or lexicon:");
            println!("  {}", path.display());
            println!("\nOr set via environment:");
            println!("  export SENTILEX_POLICY=\"simple\"");
            println!("  export SENTILEX_LEXICON=\"/path/to/words.toml\"");
            Ok(())
        }
    }
}
