//! HTTP server command
//!
//! Runs the notes API with an in-memory store. Notes live for the lifetime
//! of the process.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use notectl_core::MemoryStore;
use notectl_server::{run_server, ServerConfig};

use crate::config::NotectlConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:5000)
    #[arg(long, short = 'b', env = "NOTECTL_BIND")]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout: u64,

    /// Directory with the built web client to serve at /
    #[arg(long, env = "NOTECTL_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,
}

impl ServeArgs {
    fn into_server_config(self, config: &NotectlConfig) -> ServerConfig {
        let defaults = ServerConfig::default();
        ServerConfig {
            bind_addr: self.bind.or(config.bind()).unwrap_or(defaults.bind_addr),
            cors_permissive: self.cors_permissive,
            request_timeout: Duration::from_secs(self.timeout),
            static_dir: self.static_dir.or_else(|| config.static_dir()),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config: &NotectlConfig) -> Result<()> {
    let server_config = args.into_server_config(config);
    tracing::info!("Starting notectl server on {}", server_config.bind_addr);

    let store = Arc::new(MemoryStore::new());

    // Blocks until shutdown
    run_server(store, server_config)
        .await
        .context("Server error")?;

    Ok(())
}
