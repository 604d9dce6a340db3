//! `notelit pin` / `notelit unpin` commands
//!
//! Pinning stamps `pinned_at`; unpinning clears it, which also removes
//! the note from the pinned shelf on the next derived view.

use std::path::Path;

use notelit_core::error::Result;
use notelit_core::format::OutputFormat;
use notelit_core::store::Collection;

use crate::cli::Cli;

/// Execute the pin or unpin command
pub fn execute(
    cli: &Cli,
    collection: &mut Collection,
    cache: &Path,
    id: &str,
    pin: bool,
) -> Result<()> {
    if pin {
        collection.pin(id)?;
    } else {
        collection.unpin(id)?;
    }
    collection.save(cache)?;

    tracing::info!(id = %id, pinned = pin, "pin state changed");

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "id": id, "is_pinned": pin }));
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("{} {}", if pin { "Pinned" } else { "Unpinned" }, id);
            }
        }
    }

    Ok(())
}
