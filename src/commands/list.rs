//! `notelit list` command - list notes through the view pipeline
//!
//! Filters and ordering come from `notelit_core::view::derive_view`;
//! human output renders each note's labels through the compact chip
//! layout, with a `+N` badge for anything that did not fit inline.

use notelit_core::chips::{self, LayoutMode};
use notelit_core::config::Config;
use notelit_core::error::Result;
use notelit_core::format::OutputFormat;
use notelit_core::note::Note;
use notelit_core::store::Collection;
use notelit_core::view::{derive_view, partition_pinned, SortKey, ViewParams};

use crate::cli::Cli;

/// Execute the list command
pub fn execute(
    cli: &Cli,
    collection: &Collection,
    config: &Config,
    query: Option<&str>,
    label: Option<&str>,
    sort: Option<SortKey>,
    pinned: bool,
) -> Result<()> {
    let params = ViewParams {
        search_query: query.unwrap_or_default().to_string(),
        sort_by: sort.unwrap_or(config.default_sort),
        selected_label: label.map(str::to_string),
        show_pinned_only: pinned,
    };

    let notes = derive_view(collection.notes(), &params);
    tracing::debug!(matched = notes.len(), total = collection.len(), "view derived");

    match cli.format {
        OutputFormat::Json => {
            let output: Vec<_> = notes.iter().map(note_json).collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => print_human(cli, config, &notes, pinned),
    }

    Ok(())
}

fn note_json(note: &Note) -> serde_json::Value {
    serde_json::json!({
        "id": note.id,
        "title": note.title,
        "labels": note.labels,
        "is_pinned": note.is_pinned,
        "pinned_at": note.pinned_at,
        "created_at": note.created_at,
        "updated_at": note.updated_at,
    })
}

fn print_human(cli: &Cli, config: &Config, notes: &[Note], pinned_only: bool) {
    if notes.is_empty() {
        if !cli.quiet {
            println!("No notes found");
        }
        return;
    }

    // Pinned shelf above the main list, unless the whole view is
    // already the shelf.
    if config.pinned_shelf && !pinned_only {
        let (shelf, rest) = partition_pinned(notes);
        if !shelf.is_empty() {
            println!("Pinned:");
            for note in &shelf {
                print_line(note);
            }
            if !rest.is_empty() {
                println!();
            }
        }
        for note in &rest {
            print_line(note);
        }
    } else {
        for note in notes {
            print_line(note);
        }
    }
}

fn print_line(note: &Note) {
    let marker = if note.is_pinned { "*" } else { " " };
    println!("{} {}  {}{}", marker, note.id, note.title, chip_row(note));
}

/// Render the compact chip row, e.g. `  [work, home +2]`
fn chip_row(note: &Note) -> String {
    let layout = chips::layout(&note.labels, LayoutMode::Compact);
    if layout.visible.is_empty() && !layout.overflow_needed {
        return String::new();
    }

    let names: Vec<&str> = layout.visible.iter().map(|l| l.name.as_str()).collect();
    let badge = if layout.overflow_needed {
        format!(" +{}", layout.hidden.len())
    } else {
        String::new()
    };
    format!("  [{}{}]", names.join(", "), badge)
}
