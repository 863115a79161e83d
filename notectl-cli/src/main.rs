//! notectl CLI - note server and terminal client
//!
//! - `serve`: run the notes HTTP API
//! - `list`, `show`, `create`, `update`, `delete`: work with notes over HTTP
//! - `import`, `export`: move notes to and from `.txt` files
//! - `draft`: keep unsaved work locally until it is saved as a note

use anyhow::Result;
use clap::{Parser, Subcommand};

mod client;
mod commands;
mod config;
mod tracing_setup;

use commands::draft::DraftArgs;
use commands::notes::{
    CreateArgs, DeleteArgs, ExportArgs, ImportArgs, ListArgs, ShowArgs, UpdateArgs,
};
use commands::serve::ServeArgs;
use config::NotectlConfig;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "notectl",
    author,
    version,
    about = "Small note server and terminal client",
    long_about = "Run an in-memory notes API (`notectl serve`) and manage notes on it \
                  from the terminal: list, edit, import and export plain-text files."
)]
struct Cli {
    /// Notes API endpoint (default: http://127.0.0.1:5000)
    #[arg(long, env = "NOTECTL_SERVER", global = true)]
    endpoint: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the notes HTTP API server
    Serve(ServeArgs),
    /// List notes
    List(ListArgs),
    /// Show a single note
    Show(ShowArgs),
    /// Create a note
    Create(CreateArgs),
    /// Replace a note's title and content
    Update(UpdateArgs),
    /// Delete a note (no error if it does not exist)
    Delete(DeleteArgs),
    /// Create a note from a .txt file
    Import(ImportArgs),
    /// Write a note to <title>.txt
    Export(ExportArgs),
    /// Local draft operations (show, set, save, clear)
    Draft(DraftArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    let config = NotectlConfig::load()?;
    let endpoint = commands::resolve_endpoint(cli.endpoint, &config);

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args, &config).await?,
        Commands::List(args) => commands::run_list(&endpoint, args).await?,
        Commands::Show(args) => commands::run_show(&endpoint, args).await?,
        Commands::Create(args) => commands::run_create(&endpoint, args).await?,
        Commands::Update(args) => commands::run_update(&endpoint, args).await?,
        Commands::Delete(args) => commands::run_delete(&endpoint, args).await?,
        Commands::Import(args) => commands::run_import(&endpoint, args).await?,
        Commands::Export(args) => commands::run_export(&endpoint, args).await?,
        Commands::Draft(args) => commands::run_draft(&endpoint, args, &config).await?,
    }
    Ok(())
}
