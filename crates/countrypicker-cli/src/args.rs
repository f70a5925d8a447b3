use clap::{ArgAction, Parser, Subcommand};

/// CLI arguments for countrypicker
#[derive(Debug, Parser)]
#[command(
    name = "countrypicker",
    version,
    about = "CLI for browsing, searching and picking countries from the countrypicker catalog"
)]
pub struct CliArgs {
    /// Path to a custom country list (.json or .json.gz) used instead of the built-in catalog
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Comma-separated codes to keep (e.g. US,GB,CA)
    #[arg(long = "only", global = true)]
    pub only: Option<String>,

    /// Comma-separated codes to hide (e.g. RU,KP)
    #[arg(long = "exclude", global = true)]
    pub exclude: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the active country list
    Stats,

    /// List all countries
    List,

    /// Filter countries by name, code or dial code (case-insensitive substring)
    Search {
        /// Query text; an empty query lists everything
        query: String,

        /// Code to highlight with '*' (exact match)
        #[arg(long)]
        preselect: Option<String>,
    },

    /// Show one country by code (case-insensitive)
    Show {
        /// Two-letter code (e.g. DE, us)
        code: String,
    },

    /// List countries whose dial code starts with a prefix
    Dial {
        /// Prefix such as +44 or 44
        prefix: String,
    },

    /// Ranked search with relevance scores
    Smart {
        query: String,
    },

    /// Run a picker session: filter, then select a visible country and print it as JSON
    Pick {
        /// Query typed before selecting
        #[arg(default_value = "")]
        query: String,

        /// Code of the row to select
        #[arg(long)]
        select: String,

        /// Code to highlight (exact match)
        #[arg(long)]
        preselect: Option<String>,
    },
}

/// Split a comma-separated code list, dropping empty items.
pub fn split_codes(s: &str) -> Vec<&str> {
    s.split(',')
        .map(str::trim)
        .filter(|x| !x.is_empty())
        .collect()
}
