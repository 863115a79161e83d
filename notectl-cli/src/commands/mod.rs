//! Command implementations for the notectl CLI

pub mod draft;
pub mod notes;
pub mod serve;

use std::io::{IsTerminal, Read};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::config::{NotectlConfig, DEFAULT_ENDPOINT};

pub use draft::run_draft;
pub use notes::{
    run_create, run_delete, run_export, run_import, run_list, run_show, run_update,
};
pub use serve::run_serve;

/// Endpoint for client commands: flag/env > config.toml > default
pub fn resolve_endpoint(flag: Option<String>, config: &NotectlConfig) -> String {
    flag.or_else(|| config.endpoint().map(str::to_string))
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
}

/// Note body from `-m`, `--file`, or piped stdin (in that order)
pub fn resolve_content(message: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(msg) = message {
        return Ok(msg);
    }

    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {}", path.display()));
    }

    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        let mut buf = String::new();
        stdin
            .lock()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        return Ok(buf);
    }

    Err(anyhow!(
        "No content provided. Use -m, --file, or pipe content via stdin"
    ))
}
