//! `notelit label` / `notelit labels` commands - label management

use std::path::Path;

use notelit_core::error::Result;
use notelit_core::format::OutputFormat;
use notelit_core::note::Label;
use notelit_core::store::Collection;

use crate::cli::Cli;

/// Execute `label add`
pub fn execute_add(
    cli: &Cli,
    collection: &mut Collection,
    cache: &Path,
    id: &str,
    name: &str,
    color: &str,
) -> Result<()> {
    collection.attach_label(id, Label::new(name, color))?;
    collection.save(cache)?;

    tracing::info!(id = %id, label = %name, "label attached");

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "id": id, "label": name }));
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Attached '{}' to {}", name, id);
            }
        }
    }

    Ok(())
}

/// Execute `label rm`
pub fn execute_rm(
    cli: &Cli,
    collection: &mut Collection,
    cache: &Path,
    id: &str,
    name: &str,
) -> Result<()> {
    collection.detach_label(id, name)?;
    collection.save(cache)?;

    tracing::info!(id = %id, label = %name, "label detached");

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "id": id, "label": name }));
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Detached '{}' from {}", name, id);
            }
        }
    }

    Ok(())
}

/// Execute `labels` - list every label in use
pub fn execute_list(cli: &Cli, collection: &Collection) -> Result<()> {
    let labels = collection.available_labels();

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&labels)?);
        }
        OutputFormat::Human => {
            if labels.is_empty() {
                if !cli.quiet {
                    println!("No labels found");
                }
            } else {
                for label in &labels {
                    println!("{}  {}", label.name, label.color);
                }
            }
        }
    }

    Ok(())
}
