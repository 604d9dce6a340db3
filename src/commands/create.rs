//! `notelit create` command - create a note in the local cache

use std::path::Path;

use notelit_core::error::Result;
use notelit_core::format::OutputFormat;
use notelit_core::note::{Label, Note};
use notelit_core::store::Collection;

use crate::cli::Cli;

/// Default color for labels created on the fly
const DEFAULT_LABEL_COLOR: &str = "#9aa0a6";

/// Execute the create command
pub fn execute(
    cli: &Cli,
    collection: &mut Collection,
    cache: &Path,
    title: &str,
    content: Option<&str>,
    labels: &[String],
) -> Result<()> {
    let mut note = Note::new(title, content.unwrap_or_default());

    for name in labels {
        // Reuse the color of an existing label with the same name so a
        // label keeps one color across the collection.
        let label = collection
            .available_labels()
            .into_iter()
            .find(|l| l.name == *name)
            .unwrap_or_else(|| Label::new(name, DEFAULT_LABEL_COLOR));
        note.attach_label(label)?;
    }

    let id = note.id.clone();
    collection.add(note);
    collection.save(cache)?;

    tracing::info!(id = %id, "note created");

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "id": id }));
        }
        OutputFormat::Human => {
            println!("{}", id);
        }
    }

    Ok(())
}
