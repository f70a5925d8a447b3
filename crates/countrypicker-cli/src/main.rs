//! countrypicker — Command-line interface for countrypicker-core
//!
//! This binary drives the picker model from a terminal. It can print
//! statistics, list the catalog, filter it the way a picker does on every
//! keystroke, look up a code, search by dial code, and run a full picker
//! session that ends in a selection.
//!
//! Usage examples
//! --------------
//!
//! - List everything (or a narrowed list)
//!   $ countrypicker list
//!   $ countrypicker --only US,GB,CA list
//!   $ countrypicker --exclude RU,KP list
//!
//! - Filter like the picker search box, highlighting a pre-selection
//!   $ countrypicker search united --preselect GB
//!   $ countrypicker search +1
//!
//! - Lookups
//!   $ countrypicker show de
//!   $ countrypicker dial +44
//!   $ countrypicker smart guinea
//!
//! - Run a session and print the chosen country as JSON
//!   $ countrypicker pick ind --select IN
//!
//! Data source
//! -----------
//!
//! The built-in catalog is used unless `--input <path>` points at a custom
//! `.json` / `.json.gz` list. Logs go to stderr; use `-v` or `RUST_LOG`.
mod args;

use crate::args::{split_codes, CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use countrypicker_core::{Catalog, CountrySearch, PickerOptions, PickerSession};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let mut catalog = match &args.input {
        Some(path) => load_catalog(path)?,
        None => Catalog::builtin(),
    };
    if let Some(only) = &args.only {
        catalog = catalog.only_codes(&split_codes(only));
    }
    if let Some(exclude) = &args.exclude {
        catalog = catalog.excluding_codes(&split_codes(exclude));
    }
    debug!(countries = catalog.len(), builtin = catalog.is_builtin(), "active list");

    match args.command {
        Commands::Stats => {
            let stats = catalog.stats();
            println!("Country list statistics:");
            println!("  Countries: {}", stats.countries);
            println!("  Distinct dial codes: {}", stats.dial_codes);
            println!("  Source: {}", if catalog.is_builtin() { "built-in" } else { "custom" });
        }

        Commands::List => {
            for c in catalog.countries() {
                println!("{} {} ({}) {}", c.flag(), c.name(), c.code(), c.dial_code());
            }
        }

        Commands::Search { query, preselect } => {
            let mut options = PickerOptions::new().catalog(catalog);
            if let Some(code) = preselect {
                options = options.pre_selected(code);
            }
            let mut session = PickerSession::open(options);
            session.set_query(query.as_str())?;
            let rows = session.rows();
            if rows.is_empty() {
                println!("No countries found matching: {query}");
            }
            for row in rows {
                let c = row.country;
                let mark = if row.selected { '*' } else { ' ' };
                println!("{mark} {} ({}) {}", c.display_name(), c.code(), c.dial_code());
            }
        }

        Commands::Show { code } => match catalog.find_by_code_ignore_case(&code) {
            Some(c) => {
                println!("Country: {}", c.name());
                println!("Code: {}", c.code());
                println!("Flag: {}", c.flag());
                println!("Dial Code: {}", c.dial_code());
                println!("Display: {}", c.display_dial_code());
            }
            None => {
                eprintln!("No country found for: {code}");
            }
        },

        Commands::Dial { prefix } => {
            let matches = catalog.find_by_dial_code(&prefix);
            if matches.is_empty() {
                println!("No countries with dial code prefix: {prefix}");
            }
            for c in matches {
                println!("{} — {}", c.display_dial_code(), c.name());
            }
        }

        Commands::Smart { query } => {
            for hit in catalog.smart_search(&query) {
                println!("{:>3}  {} ({})", hit.score, hit.country.display_name(), hit.country.code());
            }
        }

        Commands::Pick {
            query,
            select,
            preselect,
        } => {
            let mut options = PickerOptions::new()
                .catalog(catalog)
                .on_select(|c| info!(code = c.code(), "picker selection"));
            if let Some(code) = preselect {
                options = options.pre_selected(code);
            }
            let mut session = PickerSession::open(options);
            session.set_query(query.as_str())?;
            let chosen = session
                .select(&select)
                .with_context(|| format!("cannot select {select} for query {query:?}"))?;
            println!("{}", serde_json::to_string_pretty(&chosen)?);
        }
    }

    Ok(())
}

#[cfg(feature = "json")]
fn load_catalog(path: &str) -> anyhow::Result<Catalog> {
    let countries = countrypicker_core::loader::load_countries_from_path(path)
        .with_context(|| format!("loading country list from {path}"))?;
    Ok(Catalog::custom(countries))
}

#[cfg(not(feature = "json"))]
fn load_catalog(path: &str) -> anyhow::Result<Catalog> {
    anyhow::bail!("cannot read {path}: built without the `json` feature")
}

/// Logs go to stderr so command output stays pipeable.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
