//! CLI argument parsing for notelit
//!
//! Uses clap for argument parsing.
//! Global flags: --cache, --format, --quiet, --verbose, --log-level, --log-json

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use notelit_core::error::NotelitError;
use notelit_core::format::OutputFormat;
use notelit_core::view::SortKey;

/// Notelit - note-taking client CLI with labels, pinning, and derived views
#[derive(Parser, Debug)]
#[command(name = "notelit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the note cache file
    #[arg(long, global = true, env = "NOTELIT_CACHE")]
    pub cache: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON to stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new note
    Create {
        /// Note title
        #[arg(long, short = 't')]
        title: String,

        /// Note body text
        #[arg(long, short = 'c')]
        content: Option<String>,

        /// Attach a label (can be specified multiple times)
        #[arg(long, action = clap::ArgAction::Append)]
        label: Vec<String>,
    },

    /// List notes through the derived view pipeline
    List {
        /// Case-insensitive substring search over title and content
        #[arg(long, short = 'Q')]
        query: Option<String>,

        /// Keep only notes carrying this label
        #[arg(long, short = 'l')]
        label: Option<String>,

        /// Sort key (manual, title, newest, oldest)
        #[arg(long, short = 's', value_parser = parse_sort_key)]
        sort: Option<SortKey>,

        /// Show only pinned notes, ordered by recency
        #[arg(long, short = 'p')]
        pinned: bool,
    },

    /// Show a single note in full
    Show {
        /// Note id
        id: String,
    },

    /// Delete a note
    Delete {
        /// Note id
        id: String,
    },

    /// Pin a note to the promoted shelf
    Pin {
        /// Note id
        id: String,
    },

    /// Unpin a note
    Unpin {
        /// Note id
        id: String,
    },

    /// Manage labels on a note
    Label {
        #[command(subcommand)]
        action: LabelAction,
    },

    /// List all labels in use across the collection
    Labels,
}

#[derive(Subcommand, Debug)]
pub enum LabelAction {
    /// Attach a label to a note
    Add {
        /// Note id
        id: String,

        /// Label name
        name: String,

        /// Label display color
        #[arg(long, default_value = "#9aa0a6")]
        color: String,
    },

    /// Detach a label from a note
    Rm {
        /// Note id
        id: String,

        /// Label name
        name: String,
    },
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse().map_err(|e: NotelitError| e.to_string())
}

fn parse_sort_key(s: &str) -> Result<SortKey, String> {
    s.parse().map_err(|e: NotelitError| e.to_string())
}
