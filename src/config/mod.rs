pub mod cli;
pub mod file;

pub use file::FileConfig;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};

/// File and stdin inputs: JSON and list subcommands take a path (`-` for
/// stdin); time subcommands take literal values.
#[cfg(feature = "cli")]
#[derive(Debug, Parser)]
#[command(name = "alchemy-tools")]
#[command(about = "A small toolbox of JSON, list and time utilities")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Path to a TOML defaults file")]
    pub config: Option<String>,
}

#[cfg(feature = "cli")]
#[derive(Debug, Subcommand)]
pub enum Command {
    /// JSON tools: repair, diff, prettify, stringify, flatten
    #[command(subcommand)]
    Json(JsonCommand),
    /// List tools: unique, diff, intersection, duplicates, sort
    #[command(subcommand)]
    List(ListCommand),
    /// Time tools: conversions between dates and timestamps
    #[command(subcommand)]
    Time(TimeCommand),
}

#[cfg(feature = "cli")]
#[derive(Debug, Subcommand)]
pub enum JsonCommand {
    /// Repair malformed JSON text
    Repair { input: String },
    /// Structural diff of two JSON documents
    Diff { first: String, second: String },
    /// Pretty-print a JSON document
    Prettify {
        input: String,
        #[arg(long, help = "Indent width in spaces")]
        indent: Option<usize>,
    },
    /// Compact a JSON document onto one line
    Stringify { input: String },
    /// Deep-flatten a JSON array
    Flatten { input: String },
}

#[cfg(feature = "cli")]
#[derive(Debug, Subcommand)]
pub enum ListCommand {
    /// Remove duplicate entries
    Unique {
        input: String,
        #[arg(long, help = "Input format: auto, json or lines")]
        format: Option<String>,
    },
    /// Entries unique to each of two lists
    Diff {
        first: String,
        second: String,
        #[arg(long, help = "Input format: auto, json or lines")]
        format: Option<String>,
    },
    /// Entries common to two lists
    Intersection {
        first: String,
        second: String,
        #[arg(long, help = "Input format: auto, json or lines")]
        format: Option<String>,
    },
    /// Entries that occur more than once
    Duplicates {
        input: String,
        #[arg(long, help = "Input format: auto, json or lines")]
        format: Option<String>,
    },
    /// Sort entries
    Sort {
        input: String,
        #[arg(long, help = "Input format: auto, json or lines")]
        format: Option<String>,
    },
}

#[cfg(feature = "cli")]
#[derive(Debug, Subcommand)]
pub enum TimeCommand {
    /// Milliseconds since epoch to date/time
    MsToDate { ms: String },
    /// Date/time to milliseconds since epoch
    DateToMs { date: String },
    /// Difference between two date/times
    Diff { start: String, end: String },
    /// Add or subtract a span from a date/time
    Shift {
        date: String,
        amount: i64,
        unit: String,
        #[arg(long, default_value = "add")]
        op: String,
    },
    /// Show a date/time in multiple formats
    Format { date: String },
    /// Current time in several representations
    Now,
}

#[cfg(feature = "cli")]
impl Validate for Cli {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_non_empty_string("config", path)?;
        }
        if let Command::Json(JsonCommand::Prettify {
            indent: Some(indent),
            ..
        }) = &self.command
        {
            validation::validate_range("indent", *indent, 0, 8)?;
        }
        Ok(())
    }
}
