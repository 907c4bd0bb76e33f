//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Roman numeral codec and calculator
#[derive(Parser, Debug)]
#[command(name = "numerus")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file (overrides the global config)
    #[arg(short, long, global = true, env = "NUMERUS_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a number (1..=3999) to Roman numerals
    Encode {
        /// Whole number to convert
        number: u32,
    },

    /// Convert Roman numerals to a number
    Decode {
        /// Roman numeral, e.g. MCMLXXXI
        numeral: String,
    },

    /// Check Roman numerals against the grammar
    Validate {
        /// Numerals to check
        #[arg(required = true)]
        numerals: Vec<String>,
    },

    /// Add Roman numerals, e.g. `numerus eval III + IV`
    Eval {
        /// Expression; words are joined with spaces
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        expression: Vec<String>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,
}
