//! Local draft commands
//!
//! A draft is unsaved work. It lives in a local JSON file until
//! `draft save` sends it to the server: as a new note, or over an existing
//! note when `--id` names one.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};

use notectl_core::{Draft, DraftCache, NoteFields, NoteId};

use crate::client::NoteClient;
use crate::config::NotectlConfig;

use super::resolve_content;

#[derive(Parser, Debug)]
pub struct DraftArgs {
    /// Draft file (default: ~/.notectl/draft.json)
    #[arg(long, env = "NOTECTL_DRAFT", global = true)]
    pub draft_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: DraftCommands,
}

#[derive(Subcommand, Debug)]
pub enum DraftCommands {
    /// Print the current draft
    Show(DraftShowArgs),
    /// Replace the draft text
    Set(DraftSetArgs),
    /// Create a note from the draft (or update one with --id) and clear it
    Save(DraftSaveArgs),
    /// Discard the draft
    Clear,
}

#[derive(Parser, Debug)]
pub struct DraftShowArgs {
    /// Output JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct DraftSaveArgs {
    /// Overwrite this note instead of creating a new one
    #[arg(long)]
    pub id: Option<NoteId>,
}

#[derive(Parser, Debug)]
pub struct DraftSetArgs {
    /// Draft title (keeps the current title when omitted)
    #[arg(long, short)]
    pub title: Option<String>,

    /// Inline content
    #[arg(long, short)]
    pub message: Option<String>,

    /// Read content from file
    #[arg(long)]
    pub file: Option<PathBuf>,
}

pub async fn run_draft(endpoint: &str, args: DraftArgs, config: &NotectlConfig) -> Result<()> {
    let path = args.draft_file.unwrap_or_else(|| config.draft_path());
    let cache = DraftCache::new(path);

    match args.command {
        DraftCommands::Show(show) => draft_show(&cache, show),
        DraftCommands::Set(set) => draft_set(&cache, set),
        DraftCommands::Save(save) => draft_save(&cache, endpoint, save.id).await,
        DraftCommands::Clear => {
            cache.clear()?;
            println!("Draft cleared");
            Ok(())
        }
    }
}

fn draft_show(cache: &DraftCache, args: DraftShowArgs) -> Result<()> {
    let draft = cache.load()?.unwrap_or_default();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&draft)?);
    } else {
        println!("# {}", draft.title);
        println!();
        println!("{}", draft.content);
    }
    Ok(())
}

fn draft_set(cache: &DraftCache, args: DraftSetArgs) -> Result<()> {
    let content = resolve_content(args.message, args.file)?;
    let current = cache.load()?.unwrap_or_default();

    let draft = Draft {
        title: args.title.unwrap_or(current.title),
        content,
    };
    cache
        .save(&draft)
        .with_context(|| format!("Failed to write draft {}", cache.path().display()))?;

    tracing::debug!(path = %cache.path().display(), "draft saved locally");
    println!("Draft updated: {}", draft.title);
    Ok(())
}

async fn draft_save(cache: &DraftCache, endpoint: &str, id: Option<NoteId>) -> Result<()> {
    let draft = cache
        .load()?
        .ok_or_else(|| anyhow!("No draft to save at {}", cache.path().display()))?;

    let client = NoteClient::new(endpoint)?;
    let fields = NoteFields::from(draft);
    let (note, verb) = match id {
        Some(id) => (client.update(id, &fields).await?, "Updated"),
        None => (client.create(&fields).await?, "Saved draft as"),
    };

    // Only drop the local copy once the server has it
    cache.clear()?;
    println!("{} note {}: {}", verb, note.id, note.display_title());
    Ok(())
}
