//! `notelit show` command - display a single note
//!
//! Human output runs the label row through the detail chip layout
//! (inline cap of six, `+N more` for the rest).

use notelit_core::chips::{self, LayoutMode};
use notelit_core::error::{NotelitError, Result};
use notelit_core::format::OutputFormat;
use notelit_core::note::Note;
use notelit_core::store::Collection;

use crate::cli::Cli;

/// Execute the show command
pub fn execute(cli: &Cli, collection: &Collection, id: &str) -> Result<()> {
    let note = collection
        .get(id)
        .ok_or_else(|| NotelitError::NoteNotFound { id: id.to_string() })?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&note)?);
        }
        OutputFormat::Human => print_human(note),
    }

    Ok(())
}

fn print_human(note: &Note) {
    println!("{}", note.id);
    println!("{}", note.title);
    if note.is_pinned {
        println!("pinned: yes");
    }
    if let Some(created) = note.created_at {
        println!("created: {}", created.to_rfc3339());
    }
    if let Some(updated) = note.updated_at {
        println!("updated: {}", updated.to_rfc3339());
    }
    println!("labels: {}", label_row(note));
    if !note.content.is_empty() {
        println!();
        println!("{}", note.content);
    }
}

fn label_row(note: &Note) -> String {
    let layout = chips::layout(&note.labels, LayoutMode::Detail);
    if layout.visible.is_empty() {
        return "(no labels)".to_string();
    }

    let names: Vec<&str> = layout.visible.iter().map(|l| l.name.as_str()).collect();
    if layout.overflow_needed {
        format!("{} +{} more", names.join(", "), layout.hidden.len())
    } else {
        names.join(", ")
    }
}
