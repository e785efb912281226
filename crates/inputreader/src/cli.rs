//! CLI argument parsing with clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// inputreader - ask questions and numbered selections from shell scripts
#[derive(Parser)]
#[command(name = "inputreader")]
#[command(version = VERSION)]
#[command(about = "Ask questions and numbered selections from shell scripts")]
#[command(long_about = "Ask questions and numbered selections from shell scripts.\n\nPrompts are written to stderr and answers are read line by line from stdin. The answer is printed on stdout so it can be captured:\n\n  color=$(inputreader select \"Pick a color\" red green blue --default green)")]
pub struct Cli {
    /// Log reader activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Do not print prompts, only read answers
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask a free-text question and print the answer
    ///
    /// Any line is accepted, including an empty one.
    Ask {
        /// Question to show
        prompt: String,
    },

    /// Ask for a numbered choice and print the chosen option
    ///
    /// Re-prompts until a valid number is entered.
    #[command(long_about = "Ask for a numbered choice and print the chosen option.\n\nOptions are numbered from 1. Invalid answers are explained and asked again; only the end of input stops the loop without a choice.\n\nThe menu can be given inline or loaded from a TOML file:\n\n  prompt = \"Pick a color\"\n  options = [\"red\", \"green\", \"blue\"]\n  default = \"green\"")]
    Select {
        /// Question to show above the options
        #[arg(required_unless_present = "menu")]
        prompt: Option<String>,

        /// Options to choose from, in display order
        #[arg(required_unless_present = "menu")]
        options: Vec<String>,

        /// Option chosen when an empty line is entered
        #[arg(long)]
        default: Option<String>,

        /// Load prompt, options and default from a TOML file
        #[arg(long, conflicts_with_all = ["prompt", "options"])]
        menu: Option<PathBuf>,

        /// Print the 1-based number of the choice instead of its label
        #[arg(long)]
        index: bool,
    },
}

/// Get the command args for use in the application
pub fn parse() -> Cli {
    Cli::parse()
}
