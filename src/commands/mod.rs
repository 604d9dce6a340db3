//! CLI commands for notelit

pub mod create;
pub mod delete;
pub mod label;
pub mod list;
pub mod pin;
pub mod show;

use std::path::{Path, PathBuf};

use notelit_core::config::Config;
use notelit_core::error::Result;
use notelit_core::store::Collection;

use crate::cli::{Cli, Commands, LabelAction};

/// Default cache file name when `--cache` and `NOTELIT_CACHE` are absent
const DEFAULT_CACHE: &str = "notelit.json";

/// Route a parsed command line to its command handler
pub fn dispatch(cli: &Cli) -> Result<()> {
    let cache = cli
        .cache
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE));
    let mut collection = Collection::load(&cache)?;
    tracing::debug!(cache = %cache.display(), notes = collection.len(), "collection loaded");

    match &cli.command {
        Commands::Create {
            title,
            content,
            label,
        } => create::execute(cli, &mut collection, &cache, title, content.as_deref(), label),

        Commands::List {
            query,
            label,
            sort,
            pinned,
        } => {
            let config = Config::load(&config_path(&cache))?;
            list::execute(
                cli,
                &collection,
                &config,
                query.as_deref(),
                label.as_deref(),
                *sort,
                *pinned,
            )
        }

        Commands::Show { id } => show::execute(cli, &collection, id),

        Commands::Delete { id } => delete::execute(cli, &mut collection, &cache, id),

        Commands::Pin { id } => pin::execute(cli, &mut collection, &cache, id, true),

        Commands::Unpin { id } => pin::execute(cli, &mut collection, &cache, id, false),

        Commands::Label { action } => match action {
            LabelAction::Add { id, name, color } => {
                label::execute_add(cli, &mut collection, &cache, id, name, color)
            }
            LabelAction::Rm { id, name } => {
                label::execute_rm(cli, &mut collection, &cache, id, name)
            }
        },

        Commands::Labels => label::execute_list(cli, &collection),
    }
}

/// Preferences live next to the cache file
fn config_path(cache: &Path) -> PathBuf {
    cache.with_file_name("notelit.toml")
}
