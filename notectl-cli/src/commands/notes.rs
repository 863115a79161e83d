//! Note commands - talk to a running notectl server
//!
//! ```bash
//! notectl list
//! notectl create --title "Groceries" -m "eggs"
//! notectl import ~/notes/plan.txt
//! notectl export 3 --dir ~/backup
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;

use notectl_core::files::{export_text_file, import_text_file};
use notectl_core::{Note, NoteFields, NoteId};

use crate::client::NoteClient;

use super::resolve_content;

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output JSON (for piping to jq)
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note ID
    pub id: NoteId,

    /// Output JSON instead of the note body
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Note title
    #[arg(long, short)]
    pub title: String,

    /// Inline content
    #[arg(long, short)]
    pub message: Option<String>,

    /// Read content from file
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct UpdateArgs {
    /// Note ID
    pub id: NoteId,

    /// New title (title and content are both replaced)
    #[arg(long, short)]
    pub title: String,

    /// Inline content
    #[arg(long, short)]
    pub message: Option<String>,

    /// Read content from file
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Note ID
    pub id: NoteId,
}

#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// Text file to import; its name (minus .txt) becomes the title
    pub path: PathBuf,
}

#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Note ID
    pub id: NoteId,

    /// Directory to write `<title>.txt` into
    #[arg(long, short, default_value = ".")]
    pub dir: PathBuf,
}

pub async fn run_list(endpoint: &str, args: ListArgs) -> Result<()> {
    let notes = NoteClient::new(endpoint)?.list().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&notes)?);
        return Ok(());
    }

    if notes.is_empty() {
        println!("No notes yet");
        return Ok(());
    }

    let now = Utc::now();
    for note in &notes {
        println!(
            "{:>4}  {}  ({})",
            note.id,
            note.display_title(),
            format_relative(note.last_modified, now)
        );
    }
    Ok(())
}

pub async fn run_show(endpoint: &str, args: ShowArgs) -> Result<()> {
    let note = NoteClient::new(endpoint)?.get(args.id).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else {
        println!("# {}", note.display_title());
        println!();
        print!("{}", note.content);
        if !note.content.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}

pub async fn run_create(endpoint: &str, args: CreateArgs) -> Result<()> {
    let content = resolve_content(args.message, args.file)?;
    let note = NoteClient::new(endpoint)?
        .create(&NoteFields::new(args.title, content))
        .await?;

    print_saved("Created", &note);
    Ok(())
}

pub async fn run_update(endpoint: &str, args: UpdateArgs) -> Result<()> {
    let content = resolve_content(args.message, args.file)?;
    let note = NoteClient::new(endpoint)?
        .update(args.id, &NoteFields::new(args.title, content))
        .await?;

    print_saved("Updated", &note);
    Ok(())
}

pub async fn run_delete(endpoint: &str, args: DeleteArgs) -> Result<()> {
    NoteClient::new(endpoint)?.delete(args.id).await?;
    println!("Deleted note {}", args.id);
    Ok(())
}

pub async fn run_import(endpoint: &str, args: ImportArgs) -> Result<()> {
    let fields = import_text_file(&args.path)
        .with_context(|| format!("Failed to import {}", args.path.display()))?;

    let note = NoteClient::new(endpoint)?.create(&fields).await?;
    print_saved("Imported", &note);
    Ok(())
}

pub async fn run_export(endpoint: &str, args: ExportArgs) -> Result<()> {
    let note = NoteClient::new(endpoint)?.get(args.id).await?;

    let path = export_text_file(&args.dir, &note.title, &note.content)
        .with_context(|| format!("Failed to export note {}", note.id))?;

    println!("Exported note {} to {}", note.id, path.display());
    Ok(())
}

fn print_saved(verb: &str, note: &Note) {
    println!("{} note {}: {}", verb, note.id, note.display_title());
}

/// Human-readable age, e.g. "5 minutes ago"
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds().max(0);

    let (n, unit) = match secs {
        0..=59 => return "less than a minute ago".to_string(),
        60..=3_599 => (secs / 60, "minute"),
        3_600..=86_399 => (secs / 3_600, "hour"),
        86_400..=2_591_999 => (secs / 86_400, "day"),
        2_592_000..=31_535_999 => (secs / 2_592_000, "month"),
        _ => (secs / 31_536_000, "year"),
    };

    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}
