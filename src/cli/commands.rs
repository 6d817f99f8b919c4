//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - investigate: run the tool loop for one question
//! - demo: the two canned investigations
//! - prompts: compare the graded prompt variants
//! - analyze: extract a report with one of the three strategies
//! - tools / schema: print the tool catalog and report schemas

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use paytrace::prompt::PromptVersion;

/// Paytrace - investigate failed payments with a tool-using model
#[derive(Parser, Debug)]
#[command(name = "paytrace")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Model to use instead of the configured one
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    /// Subcommand to execute (defaults to `demo`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Ask a question; the model looks up payments and customers as needed
    Investigate {
        /// Question about a payment or customer
        query: String,
    },

    /// Run the two canned investigations back to back
    Demo {
        /// Do not wait for Enter between investigations
        #[arg(long)]
        no_pause: bool,
    },

    /// Analyse a payment log with the graded prompt variants
    Prompts {
        /// Run only this variant (basic, structured, detailed, with-context, few-shot)
        #[arg(long = "version", value_name = "VERSION", value_parser = parse_prompt_version)]
        prompt_version: Option<PromptVersion>,

        /// Payment log file (defaults to the built-in sample)
        #[arg(short, long)]
        log: Option<PathBuf>,

        /// Do not wait for Enter between variants
        #[arg(long)]
        no_pause: bool,
    },

    /// Produce an investigation report from a payment log
    Analyze {
        /// Extraction strategy
        #[arg(long, value_enum, default_value_t = AnalyzeMode::Tool)]
        mode: AnalyzeMode,

        /// Payment log file (defaults to the built-in detailed sample)
        #[arg(short, long)]
        log: Option<PathBuf>,

        /// Print the report as JSON instead of the formatted view
        #[arg(long)]
        raw: bool,
    },

    /// Print the tool catalog sent to the model
    Tools,

    /// Print the report and payment-attempt JSON schemas
    Schema {
        /// Validate a JSON file of payment attempts (one object or an array) instead
        #[arg(long, value_name = "FILE")]
        check: Option<PathBuf>,
    },
}

/// Report extraction strategies
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzeMode {
    /// Free-form text
    Unstructured,
    /// JSON requested in the prompt
    Json,
    /// Forced tool call
    Tool,
}

fn parse_prompt_version(s: &str) -> Result<PromptVersion, String> {
    s.parse()
}
