//! `notelit delete` command - remove a note from the local cache

use std::path::Path;

use notelit_core::error::Result;
use notelit_core::format::OutputFormat;
use notelit_core::store::Collection;

use crate::cli::Cli;

/// Execute the delete command
pub fn execute(cli: &Cli, collection: &mut Collection, cache: &Path, id: &str) -> Result<()> {
    let removed = collection.remove(id)?;
    collection.save(cache)?;

    tracing::info!(id = %removed.id, "note deleted");

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "deleted": removed.id }));
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Deleted {}", removed.id);
            }
        }
    }

    Ok(())
}
